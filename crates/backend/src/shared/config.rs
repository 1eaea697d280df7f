use contracts::shared::company_profile::CompanyProfile;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub company: CompanyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Заполнить пустые таблицы демонстрационными клиентами и счетами
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            seed_demo_data: default_seed(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_seed() -> bool {
    true
}

/// Шапка счёта. Ключи в snake_case, как принято в config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct CompanyConfig {
    pub template_name: String,
    #[serde(default)]
    pub address_lines: Vec<String>,
    #[serde(default)]
    pub phones: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        let profile = CompanyProfile::default();
        Self {
            template_name: profile.template_name,
            address_lines: profile.address_lines,
            phones: profile.phones,
        }
    }
}

impl CompanyConfig {
    pub fn to_profile(&self) -> CompanyProfile {
        CompanyProfile {
            template_name: self.template_name.clone(),
            address_lines: self.address_lines.clone(),
            phones: self.phones.clone(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/invoice.db"

[server]
port = 3000
seed_demo_data = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}
