use super::repository;
use crate::shared::data::db::get_connection;
use chrono::NaiveDate;
use contracts::domain::a002_invoice::aggregate::{
    InvoiceEditData, InvoiceId, InvoiceRecord, PaymentDetails,
};
use contracts::domain::common::AggregateId;
use sea_orm::DatabaseConnection;
use thiserror::Error;

/// Ошибки получения счёта
#[derive(Debug, Error)]
pub enum InvoiceLookupError {
    #[error("Invoice {0} not found")]
    NotFound(InvoiceId),

    #[error("Invoice {id} has corrupt data: {reason}")]
    Corrupt { id: InvoiceId, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Получение счёта с платёжными реквизитами
pub async fn get_by_id(id: &InvoiceId) -> Result<InvoiceEditData, InvoiceLookupError> {
    load(get_connection()?, id).await
}

pub(crate) async fn load(
    db: &DatabaseConnection,
    id: &InvoiceId,
) -> Result<InvoiceEditData, InvoiceLookupError> {
    let model = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| InvoiceLookupError::NotFound(id.clone()))?;
    InvoiceEditData::try_from(model).map_err(|reason| InvoiceLookupError::Corrupt {
        id: id.clone(),
        reason,
    })
}

/// Вставка тестовых данных. Уже существующие счета пропускаются.
pub async fn insert_test_data() -> anyhow::Result<usize> {
    insert_invoices(get_connection()?, demo_invoices()?).await
}

pub(crate) async fn insert_invoices(
    db: &DatabaseConnection,
    invoices: Vec<InvoiceEditData>,
) -> anyhow::Result<usize> {
    let mut inserted = 0;
    for data in invoices {
        if repository::get_by_id(db, &data.invoice.id).await?.is_some() {
            continue;
        }
        repository::insert(db, &data).await?;
        inserted += 1;
    }
    if inserted > 0 {
        tracing::info!("Inserted {} demo invoices", inserted);
    }
    Ok(inserted)
}

fn demo_invoices() -> anyhow::Result<Vec<InvoiceEditData>> {
    let rows = [
        ("4987", (2024, 1, 13), (2024, 2, 13), "$12,110.55", "American Bank", "United States", "ETD95476213874685", "BR91905"),
        ("4988", (2024, 3, 2), (2024, 4, 1), "$2,771.00", "Bank of America", "United States", "US04BOFA00000123456", "BOFAUS3N"),
        ("4989", (2024, 5, 20), (2024, 5, 10), "$950.40", "Danske Bank", "Denmark", "DK5000400440116243", "DABADKKK"),
    ];

    let mut invoices = Vec::with_capacity(rows.len());
    for (id, issued, due, total_due, bank_name, country, iban, swift_code) in rows {
        invoices.push(InvoiceEditData {
            invoice: InvoiceRecord {
                id: InvoiceId::from_string(id).map_err(anyhow::Error::msg)?,
                issued_date: ymd(issued)?,
                due_date: ymd(due)?,
            },
            payment_details: PaymentDetails {
                total_due: total_due.into(),
                bank_name: bank_name.into(),
                country: country.into(),
                iban: iban.into(),
                swift_code: swift_code.into(),
            },
        });
    }
    Ok(invoices)
}

fn ymd((y, m, d): (i32, u32, u32)) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("Invalid date {}-{}-{}", y, m, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn test_load_seeded_invoice() {
        let db = connect_in_memory().await.unwrap();
        assert_eq!(insert_invoices(&db, demo_invoices().unwrap()).await.unwrap(), 3);
        assert_eq!(insert_invoices(&db, demo_invoices().unwrap()).await.unwrap(), 0);

        let id = InvoiceId::from_string("4987").unwrap();
        let data = load(&db, &id).await.unwrap();
        assert_eq!(data.invoice.issued_date, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
        assert_eq!(data.payment_details.total_due, "$12,110.55");
    }

    #[tokio::test]
    async fn test_missing_invoice_is_not_found() {
        let db = connect_in_memory().await.unwrap();
        let id = InvoiceId::from_string("1").unwrap();
        assert!(matches!(
            load(&db, &id).await,
            Err(InvoiceLookupError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_corrupt_row_is_reported() {
        use sea_orm::{ActiveModelTrait, Set};

        let db = connect_in_memory().await.unwrap();
        repository::ActiveModel {
            id: Set("77".into()),
            issued_date: Set("someday".into()),
            due_date: Set("2024-01-01".into()),
            total_due: Set(String::new()),
            bank_name: Set(String::new()),
            country: Set(String::new()),
            iban: Set(String::new()),
            swift_code: Set(String::new()),
        }
        .insert(&db)
        .await
        .unwrap();

        let id = InvoiceId::from_string("77").unwrap();
        match load(&db, &id).await {
            Err(InvoiceLookupError::Corrupt { reason, .. }) => assert!(reason.contains("someday")),
            other => panic!("unexpected result: {:?}", other.map(|d| d.invoice.id)),
        }
    }
}
