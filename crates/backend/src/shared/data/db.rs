use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_CLIENT_TABLE: &str = r#"
    CREATE TABLE a001_client (
        name TEXT PRIMARY KEY NOT NULL,
        company TEXT NOT NULL,
        address TEXT NOT NULL DEFAULT '',
        contact TEXT NOT NULL DEFAULT '',
        company_email TEXT NOT NULL DEFAULT '',
        country TEXT,
        sort_order INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_INVOICE_TABLE: &str = r#"
    CREATE TABLE a002_invoice (
        id TEXT PRIMARY KEY NOT NULL,
        issued_date TEXT NOT NULL,
        due_date TEXT NOT NULL,
        total_due TEXT NOT NULL DEFAULT '',
        bank_name TEXT NOT NULL DEFAULT '',
        country TEXT NOT NULL DEFAULT '',
        iban TEXT NOT NULL DEFAULT '',
        swift_code TEXT NOT NULL DEFAULT ''
    );
"#;

fn sqlite_url(path: &Path) -> anyhow::Result<String> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Database::connect(sqlite_url(db_path)?).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Подключение к in-memory базе с готовой схемой
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    // у каждого соединения sqlite::memory: своя база
    options.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// Глобальное in-memory подключение для тестов, которые идут через `get_connection`
#[cfg(test)]
pub async fn install_in_memory() -> anyhow::Result<&'static DatabaseConnection> {
    if let Some(conn) = DB_CONN.get() {
        return Ok(conn);
    }
    let conn = connect_in_memory().await?;
    Ok(DB_CONN.get_or_init(|| conn))
}

/// Ensure required tables exist (minimal schema bootstrap)
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    ensure_table(conn, "a001_client", CREATE_CLIENT_TABLE).await?;
    ensure_table(conn, "a002_invoice", CREATE_INVOICE_TABLE).await?;
    Ok(())
}

async fn ensure_table(conn: &DatabaseConnection, name: &str, ddl: &str) -> anyhow::Result<()> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        name
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        assert_eq!(
            sqlite_url(Path::new("/tmp/db/invoice.db")).unwrap(),
            "sqlite:///tmp/db/invoice.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_bootstrap_is_repeatable() {
        let conn = connect_in_memory().await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name;".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = tables
            .iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect();
        assert_eq!(names, vec!["a001_client", "a002_invoice"]);
    }
}
