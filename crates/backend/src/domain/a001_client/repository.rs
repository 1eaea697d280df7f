use contracts::domain::a001_client::aggregate::Client;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub company: String,
    pub address: String,
    pub contact: String,
    pub company_email: String,
    pub country: Option<String>,
    /// Порядок в справочнике; первый клиент выбирается в форме по умолчанию
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Client {
    fn from(m: Model) -> Self {
        Client {
            name: m.name,
            company: m.company,
            address: m.address,
            contact: m.contact,
            company_email: m.company_email,
            country: m.country,
        }
    }
}

/// Весь справочник в порядке `sort_order`
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Client>> {
    let items = Entity::find()
        .order_by_asc(Column::SortOrder)
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_name(db: &DatabaseConnection, name: &str) -> anyhow::Result<Option<Client>> {
    let result = Entity::find_by_id(name.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn count(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

pub async fn insert(db: &DatabaseConnection, client: &Client, sort_order: i32) -> anyhow::Result<()> {
    let active = ActiveModel {
        name: Set(client.name.clone()),
        company: Set(client.company.clone()),
        address: Set(client.address.clone()),
        contact: Set(client.contact.clone()),
        company_email: Set(client.company_email.clone()),
        country: Set(client.country.clone()),
        sort_order: Set(sort_order),
    };
    active.insert(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn client(name: &str) -> Client {
        Client {
            name: name.into(),
            company: format!("{} LLC", name),
            address: "04033 Wesley Wall Apt. 961".into(),
            contact: "(226) 204-8287".into(),
            company_email: "brenda49@taylor.info".into(),
            country: None,
        }
    }

    #[tokio::test]
    async fn test_list_follows_sort_order() {
        let db = connect_in_memory().await.unwrap();
        insert(&db, &client("Zed"), 0).await.unwrap();
        insert(&db, &client("Adam"), 1).await.unwrap();

        let names: Vec<String> = list_all(&db).await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zed".to_string(), "Adam".to_string()]);
        assert_eq!(count(&db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_name_round_trip() {
        let db = connect_in_memory().await.unwrap();
        insert(&db, &client("Stephanie Burns"), 0).await.unwrap();

        let found = get_by_name(&db, "Stephanie Burns").await.unwrap();
        assert_eq!(found, Some(client("Stephanie Burns")));
        assert!(get_by_name(&db, "Nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let db = connect_in_memory().await.unwrap();
        insert(&db, &client("Tony Herrera"), 0).await.unwrap();
        assert!(insert(&db, &client("Tony Herrera"), 1).await.is_err());
    }
}
