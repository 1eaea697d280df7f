use crate::domain::common::AggregateId;
use crate::shared::date_format::invoice_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Номер счёта (например, "4987")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for InvoiceId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Invoice id must not be empty".into());
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!("Invalid invoice id: {}", trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Запись счёта, из которой форма берёт начальные значения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub id: InvoiceId,
    #[serde(with = "invoice_date")]
    pub issued_date: NaiveDate,
    #[serde(with = "invoice_date")]
    pub due_date: NaiveDate,
}

/// Платёжные реквизиты ("Bill To"), только для отображения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub total_due: String,
    pub bank_name: String,
    pub country: String,
    pub iban: String,
    pub swift_code: String,
}

/// Входные данные формы редактирования: `{ invoice, paymentDetails }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceEditData {
    pub invoice: InvoiceRecord,
    pub payment_details: PaymentDetails,
}
