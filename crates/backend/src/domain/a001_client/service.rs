use super::repository;
use crate::shared::data::db::get_connection;
use contracts::domain::a001_client::aggregate::Client;
use sea_orm::DatabaseConnection;

/// Справочник клиентов для формы счёта
pub async fn list_all() -> anyhow::Result<Vec<Client>> {
    repository::list_all(get_connection()?).await
}

/// Вставка тестовых данных. Уже существующие имена пропускаются.
pub async fn insert_test_data() -> anyhow::Result<usize> {
    insert_clients(get_connection()?, demo_clients()).await
}

pub(crate) async fn insert_clients(
    db: &DatabaseConnection,
    clients: Vec<Client>,
) -> anyhow::Result<usize> {
    let offset = repository::count(db).await? as i32;
    let mut inserted = 0;
    for client in clients {
        client
            .validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
        if repository::get_by_name(db, &client.name).await?.is_some() {
            continue;
        }
        repository::insert(db, &client, offset + inserted as i32).await?;
        inserted += 1;
    }
    if inserted > 0 {
        tracing::info!("Inserted {} demo clients", inserted);
    }
    Ok(inserted)
}

fn demo_clients() -> Vec<Client> {
    let client = |name: &str, company: &str, address: &str, contact: &str, email: &str, country: &str| Client {
        name: name.into(),
        company: company.into(),
        address: address.into(),
        contact: contact.into(),
        company_email: email.into(),
        country: Some(country.into()),
    };
    vec![
        client("Jordan Stevenson", "Hall-Robbins PLC", "7777 Mendez Plains", "(616) 865-4180", "don85@johnson.com", "USA"),
        client("Stephanie Burns", "Mccann LLC and Sons", "04033 Wesley Wall Apt. 961", "(226) 204-8287", "brenda49@taylor.info", "Haiti"),
        client("Tony Herrera", "Leonard-Garcia and Sons", "5345 Robert Squares", "(955) 676-1076", "smithtiffany@powers.com", "Denmark"),
        client("Kevin Patton", "Smith, Miller and Henry LLC", "19022 Clark Parks Suite 149", "(832) 323-6914", "mejiageorge@lee-perez.com", "Cambodia"),
        client("Mrs. Julie Donovan MD", "Garcia-Cameron and Sons", "8534 Saunders Hill Apt. 583", "(970) 982-3353", "brandon07@pierce.com", "Martinique"),
    ]
}
