use contracts::domain::a002_invoice::aggregate::{
    InvoiceEditData, InvoiceId, InvoiceRecord, PaymentDetails,
};
use contracts::domain::common::AggregateId;
use contracts::shared::date_format::{format_iso, parse_invoice_date};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_invoice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub issued_date: String,
    pub due_date: String,
    pub total_due: String,
    pub bank_name: String,
    pub country: String,
    pub iban: String,
    pub swift_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for InvoiceEditData {
    type Error = String;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(InvoiceEditData {
            invoice: InvoiceRecord {
                id: InvoiceId::from_string(&m.id)?,
                issued_date: parse_invoice_date(&m.issued_date)?,
                due_date: parse_invoice_date(&m.due_date)?,
            },
            payment_details: PaymentDetails {
                total_due: m.total_due,
                bank_name: m.bank_name,
                country: m.country,
                iban: m.iban,
                swift_code: m.swift_code,
            },
        })
    }
}

pub async fn get_by_id(db: &DatabaseConnection, id: &InvoiceId) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id.as_string()).one(db).await?)
}

pub async fn insert(db: &DatabaseConnection, data: &InvoiceEditData) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(data.invoice.id.as_string()),
        issued_date: Set(format_iso(data.invoice.issued_date)),
        due_date: Set(format_iso(data.invoice.due_date)),
        total_due: Set(data.payment_details.total_due.clone()),
        bank_name: Set(data.payment_details.bank_name.clone()),
        country: Set(data.payment_details.country.clone()),
        iban: Set(data.payment_details.iban.clone()),
        swift_code: Set(data.payment_details.swift_code.clone()),
    };
    active.insert(db).await?;
    Ok(())
}
