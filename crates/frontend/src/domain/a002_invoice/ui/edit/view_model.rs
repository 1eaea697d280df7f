use crate::domain::a001_client::api;
use crate::shared::date_utils::{parse_input_date, today};
use crate::shared::lifetime::ViewLifetime;
use chrono::NaiveDate;
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a001_client::selection::{ClientSelection, DirectoryUpdate};
use contracts::domain::a002_invoice::aggregate::{InvoiceId, InvoiceRecord};
use contracts::domain::a002_invoice::draft::{due_precedes_issue, InvoiceDraft};
use contracts::domain::a002_invoice::line_item::{LineItem, LineItemId, LineItems};
use contracts::domain::a002_invoice::totals::{InvoiceTotals, TotalsAdjustments};
use leptos::prelude::*;

/// ViewModel формы редактирования счёта
#[derive(Clone)]
pub struct InvoiceEditVm {
    pub invoice_id: Option<InvoiceId>,
    pub issue_date: RwSignal<NaiveDate>,
    pub due_date: RwSignal<NaiveDate>,
    pub items: RwSignal<LineItems>,
    pub adjustments: RwSignal<TotalsAdjustments>,
    pub salesperson: RwSignal<String>,
    pub thanks_note: RwSignal<String>,
    pub note: RwSignal<String>,
    pub clients: RwSignal<ClientSelection>,
    pub lifetime: ViewLifetime,
}

impl InvoiceEditVm {
    pub fn new(record: Option<&InvoiceRecord>) -> Self {
        let draft = InvoiceDraft::from_record(record, today());
        Self {
            invoice_id: draft.id,
            issue_date: RwSignal::new(draft.issue_date),
            due_date: RwSignal::new(draft.due_date),
            items: RwSignal::new(draft.items),
            adjustments: RwSignal::new(draft.adjustments),
            salesperson: RwSignal::new(draft.salesperson),
            thanks_note: RwSignal::new(draft.thanks_note),
            note: RwSignal::new(draft.note),
            clients: RwSignal::new(ClientSelection::new()),
            lifetime: ViewLifetime::new(),
        }
    }

    // ------------------------------------------------------------------
    // Clients directory
    // ------------------------------------------------------------------

    /// Запросить справочник клиентов
    pub fn load_clients(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let response = api::fetch_clients().await;
            vm.apply_clients_response(response);
        });
    }

    /// Применить ответ справочника. Ответ после закрытия формы отбрасывается.
    pub fn apply_clients_response(&self, response: Result<Vec<Client>, String>) -> DirectoryUpdate {
        if !self.lifetime.is_active() {
            log::debug!("clients response discarded: invoice form is closed");
            return DirectoryUpdate::Ignored;
        }
        let update = self
            .clients
            .try_update(|s| s.apply_response(response))
            .unwrap_or(DirectoryUpdate::Ignored);
        match update {
            DirectoryUpdate::Applied => log::debug!("clients directory loaded"),
            DirectoryUpdate::Ignored => log::debug!("clients directory already set, response ignored"),
            DirectoryUpdate::Failed => log::error!("clients directory unavailable"),
        }
        update
    }

    /// Повторный запрос после ошибки
    pub fn retry_clients(&self) {
        if self.clients.try_update(|s| s.retry()).unwrap_or(false) {
            self.load_clients();
        }
    }

    pub fn select_client(&self, name: String) {
        self.clients.update(|s| s.select(name));
    }

    // ------------------------------------------------------------------
    // Line items
    // ------------------------------------------------------------------

    /// Добавить строку по умолчанию; `None`, если форма уже уничтожена
    pub fn add_item(&self) -> Option<LineItemId> {
        self.items.try_update(|items| items.add())
    }

    pub fn remove_item(&self, id: LineItemId) {
        self.items.update(|items| {
            items.remove(id);
        });
    }

    pub fn update_item(&self, id: LineItemId, f: impl FnOnce(&mut LineItem)) {
        self.items.update(|items| {
            items.update(id, f);
        });
    }

    // ------------------------------------------------------------------
    // Dates, totals
    // ------------------------------------------------------------------

    /// Новая дата выставления. Некорректный ввод игнорируется, возвращается `false`
    pub fn set_issue_date(&self, value: &str) -> bool {
        Self::set_date(self.issue_date, value)
    }

    pub fn set_due_date(&self, value: &str) -> bool {
        Self::set_date(self.due_date, value)
    }

    fn set_date(target: RwSignal<NaiveDate>, value: &str) -> bool {
        match parse_input_date(value) {
            Some(date) => {
                target.set(date);
                true
            }
            None => false,
        }
    }

    pub fn set_discount(&self, value: f64) {
        self.adjustments.update(|a| a.set_discount(value));
    }

    pub fn set_tax_rate(&self, value: f64) {
        self.adjustments.update(|a| a.set_tax_rate(value));
    }

    pub fn totals(&self) -> Signal<InvoiceTotals> {
        let items = self.items;
        let adjustments = self.adjustments;
        Signal::derive(move || {
            items.with(|items| InvoiceTotals::compute(items, &adjustments.get()))
        })
    }

    pub fn due_precedes_issue(&self) -> Signal<bool> {
        let issue = self.issue_date;
        let due = self.due_date;
        Signal::derive(move || due_precedes_issue(issue.get(), due.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::selection::DirectoryState;
    use contracts::domain::a002_invoice::line_item::CatalogItem;
    use contracts::domain::common::AggregateId;

    fn client(name: &str, company: &str) -> Client {
        Client {
            name: name.to_string(),
            company: company.to_string(),
            address: format!("{} street", name),
            contact: "(555) 000-0000".to_string(),
            company_email: format!("{}@example.com", company.to_lowercase()),
            country: None,
        }
    }

    fn record() -> InvoiceRecord {
        InvoiceRecord {
            id: InvoiceId::from_string("4987").unwrap(),
            issued_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_dates_come_from_record() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(Some(&record()));
            assert_eq!(vm.issue_date.get_untracked(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
            assert_eq!(vm.due_date.get_untracked(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
            assert_eq!(vm.invoice_id.as_ref().map(|id| id.value()), Some("4987"));
        });
    }

    #[test]
    fn test_first_client_selected_and_second_response_ignored() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(Some(&record()));
            let first = vec![client("Jordan Stevenson", "Hall-Robbins"), client("Stephanie Burns", "Mccann LLC")];

            assert_eq!(vm.apply_clients_response(Ok(first.clone())), DirectoryUpdate::Applied);
            let selected = vm.clients.with_untracked(|s| s.selected_client().cloned());
            assert_eq!(selected.map(|c| c.company), Some("Hall-Robbins".to_string()));

            let second = vec![client("Someone Else", "Other")];
            assert_eq!(vm.apply_clients_response(Ok(second)), DirectoryUpdate::Ignored);
            vm.clients.with_untracked(|s| {
                assert_eq!(s.selected_name(), "Jordan Stevenson");
                assert_eq!(s.clients().map(|c| c.len()), Some(2));
            });
        });
    }

    #[test]
    fn test_select_client_updates_detail() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(None);
            vm.apply_clients_response(Ok(vec![
                client("Jordan Stevenson", "Hall-Robbins"),
                client("Stephanie Burns", "Mccann LLC"),
            ]));

            vm.select_client("Stephanie Burns".to_string());
            let selected = vm.clients.with_untracked(|s| s.selected_client().cloned());
            assert_eq!(selected.map(|c| c.company), Some("Mccann LLC".to_string()));

            vm.select_client("Nobody".to_string());
            vm.clients.with_untracked(|s| {
                assert_eq!(s.selected_name(), "Nobody");
                assert!(s.selected_client().is_none());
            });
        });
    }

    #[test]
    fn test_late_response_after_close_is_discarded() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(None);
            vm.lifetime.deactivate();

            let update = vm.apply_clients_response(Ok(vec![client("Jordan Stevenson", "Hall-Robbins")]));
            assert_eq!(update, DirectoryUpdate::Ignored);
            assert_eq!(vm.clients.get_untracked().directory(), &DirectoryState::Loading);
        });
    }

    #[test]
    fn test_failure_marks_directory_unavailable() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(None);
            let update = vm.apply_clients_response(Err("HTTP 503".to_string()));
            assert_eq!(update, DirectoryUpdate::Failed);
            assert_eq!(
                vm.clients.get_untracked().directory(),
                &DirectoryState::Unavailable("HTTP 503".to_string())
            );

            // после retry справочник снова ждёт ответа и принимает его
            assert!(vm.clients.try_update(|s| s.retry()).unwrap_or(false));
            assert_eq!(
                vm.apply_clients_response(Ok(vec![client("Jordan Stevenson", "Hall-Robbins")])),
                DirectoryUpdate::Applied
            );
            assert!(vm.clients.get_untracked().is_loaded());
        });
    }

    #[test]
    fn test_add_and_remove_items() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(None);
            assert_eq!(vm.items.with_untracked(|i| i.len()), 1);

            vm.add_item();
            let added = vm.add_item().unwrap();
            vm.add_item();
            assert_eq!(vm.items.with_untracked(|i| i.len()), 4);

            vm.remove_item(added);
            vm.items.with_untracked(|items| {
                assert_eq!(items.len(), 3);
                assert!(items.get(added).is_none());
                assert_eq!(items.ids().len(), items.len());
            });
        });
    }

    #[test]
    fn test_totals_follow_items() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(None);
            let id = vm.items.with_untracked(|i| i.ids()[0]);
            vm.update_item(id, |item| {
                item.item = CatalogItem::AppDevelopment;
                item.set_unit_cost(100.0);
                item.set_hours(2.0);
            });
            vm.set_discount(20.0);
            vm.set_tax_rate(10.0);

            let totals = vm.totals().get_untracked();
            assert_eq!(totals.subtotal, 200.0);
            assert_eq!(totals.discount, 20.0);
            assert_eq!(totals.tax, 18.0);
            assert_eq!(totals.total, 198.0);
        });
    }

    #[test]
    fn test_invalid_date_input_is_ignored() {
        Owner::new().with(|| {
            let vm = InvoiceEditVm::new(Some(&record()));
            assert!(!vm.set_due_date("not a date"));
            assert!(!vm.set_issue_date(""));
            assert_eq!(vm.due_date.get_untracked(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
            assert_eq!(vm.issue_date.get_untracked(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

            assert!(vm.set_due_date("2023-12-20"));
            assert!(vm.due_precedes_issue().get_untracked());
            assert_eq!(vm.due_date.get_untracked(), NaiveDate::from_ymd_opt(2023, 12, 20).unwrap());
        });
    }
}
