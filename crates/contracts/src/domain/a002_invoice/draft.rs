use super::aggregate::{InvoiceId, InvoiceRecord};
use super::line_item::LineItems;
use super::totals::TotalsAdjustments;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SALESPERSON: &str = "Tommy Shelby";
pub const DEFAULT_THANKS_NOTE: &str = "Thanks for your business";
pub const DEFAULT_NOTE: &str = "It was a pleasure working with you and your team. We hope you will keep us in mind for future freelance projects. Thank You!";

/// Редактируемый, ещё не сохранённый счёт
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub id: Option<InvoiceId>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: LineItems,
    pub adjustments: TotalsAdjustments,
    pub salesperson: String,
    pub thanks_note: String,
    pub note: String,
}

impl InvoiceDraft {
    /// Черновик из записи счёта; без записи обе даты равны `today`
    pub fn from_record(record: Option<&InvoiceRecord>, today: NaiveDate) -> Self {
        let (id, issue_date, due_date) = match record {
            Some(r) => (Some(r.id.clone()), r.issued_date, r.due_date),
            None => (None, today, today),
        };
        Self {
            id,
            issue_date,
            due_date,
            items: LineItems::with_default_row(),
            adjustments: TotalsAdjustments::default(),
            salesperson: DEFAULT_SALESPERSON.to_string(),
            thanks_note: DEFAULT_THANKS_NOTE.to_string(),
            note: DEFAULT_NOTE.to_string(),
        }
    }
}

/// Срок оплаты раньше даты выставления. Не блокирует редактирование.
pub fn due_precedes_issue(issue_date: NaiveDate, due_date: NaiveDate) -> bool {
    due_date < issue_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> InvoiceRecord {
        InvoiceRecord {
            id: InvoiceId::from_string("4987").unwrap(),
            issued_date: date(2024, 1, 1),
            due_date: date(2024, 1, 31),
        }
    }

    #[test]
    fn test_dates_come_from_record() {
        let draft = InvoiceDraft::from_record(Some(&record()), date(2030, 6, 1));
        assert_eq!(draft.id.as_ref().map(|id| id.value()), Some("4987"));
        assert_eq!(draft.issue_date, date(2024, 1, 1));
        assert_eq!(draft.due_date, date(2024, 1, 31));
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.salesperson, DEFAULT_SALESPERSON);
    }

    #[test]
    fn test_dates_default_to_today_without_record() {
        let today = date(2030, 6, 1);
        let draft = InvoiceDraft::from_record(None, today);
        assert!(draft.id.is_none());
        assert_eq!(draft.issue_date, today);
        assert_eq!(draft.due_date, today);
    }

    #[test]
    fn test_due_date_may_precede_issue_date() {
        let draft = InvoiceDraft::from_record(Some(&record()), date(2030, 6, 1));
        assert!(!due_precedes_issue(draft.issue_date, draft.due_date));
        assert!(due_precedes_issue(draft.issue_date, date(2023, 12, 1)));
        assert!(!due_precedes_issue(draft.issue_date, draft.issue_date));
    }

    #[test]
    fn test_totals_of_default_draft() {
        let draft = InvoiceDraft::from_record(None, date(2030, 6, 1));
        let totals = crate::domain::a002_invoice::totals::InvoiceTotals::compute(
            &draft.items,
            &draft.adjustments,
        );
        assert_eq!(totals.subtotal, 24.0);
        assert_eq!(totals.tax, 5.04);
        assert_eq!(totals.total, 29.04);
    }
}
