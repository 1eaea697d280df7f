use super::model;
use super::view::InvoiceEditCard;
use crate::shared::lifetime::ViewLifetime;
use contracts::domain::a002_invoice::aggregate::InvoiceEditData;
use contracts::shared::company_profile::CompanyProfile;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Состояние страницы: загруженная запись, реквизиты, ошибка.
///
/// Каждая загрузка получает свой `ViewLifetime`; новая загрузка или уход
/// со страницы гасит предыдущий, и его ответ отбрасывается.
#[derive(Clone)]
struct InvoicePageState {
    invoice: RwSignal<Option<InvoiceEditData>>,
    profile: RwSignal<Option<CompanyProfile>>,
    error: RwSignal<Option<String>>,
    current: StoredValue<Option<ViewLifetime>>,
}

impl InvoicePageState {
    fn new() -> Self {
        Self {
            invoice: RwSignal::new(None),
            profile: RwSignal::new(None),
            error: RwSignal::new(None),
            current: StoredValue::new(None),
        }
    }

    /// Начать загрузку; предыдущая загрузка становится неактуальной
    fn begin(&self) -> ViewLifetime {
        self.cancel();
        let request = ViewLifetime::new();
        self.current.set_value(Some(request.clone()));
        request
    }

    fn cancel(&self) {
        if let Some(Some(previous)) = self.current.try_get_value() {
            previous.deactivate();
        }
    }

    /// Применить ответ загрузки; `false`, если ответ устарел
    fn apply(
        &self,
        request: &ViewLifetime,
        company: CompanyProfile,
        response: Result<InvoiceEditData, String>,
    ) -> bool {
        if !request.is_active() {
            return false;
        }
        match response {
            Ok(data) => {
                self.error.set(None);
                self.invoice.set(Some(data));
            }
            Err(e) => {
                self.error.set(Some(e));
                self.invoice.set(None);
            }
        }
        self.profile.set(Some(company));
        true
    }
}

/// Страница `/apps/invoice/edit/:id`: загружает запись счёта и реквизиты компании
#[component]
pub fn InvoiceEditPage() -> impl IntoView {
    let params = use_params_map();
    let state = InvoicePageState::new();

    let cleanup_state = state.clone();
    on_cleanup(move || cleanup_state.cancel());

    let load_state = state.clone();
    Effect::new(move |_| {
        let state = load_state.clone();
        let Some(id) = params.with(|p| p.get("id")) else {
            state.cancel();
            state.error.set(Some("Invoice id is missing".to_string()));
            return;
        };
        let request = state.begin();
        wasm_bindgen_futures::spawn_local(async move {
            let company = match model::fetch_company_profile().await {
                Ok(company) => company,
                Err(e) => {
                    log::warn!("company profile unavailable, using defaults: {}", e);
                    CompanyProfile::default()
                }
            };
            let response = model::fetch_invoice(&id).await;
            if let Err(e) = &response {
                log::error!("failed to load invoice {}: {}", id, e);
            }
            if !state.apply(&request, company, response) {
                log::debug!("stale response for invoice {} discarded", id);
            }
        });
    });

    let InvoicePageState {
        invoice,
        profile,
        error,
        ..
    } = state;

    view! {
        <div class="page invoice-edit-page">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || {
                profile
                    .get()
                    .map(|company| view! { <InvoiceEditCard data=invoice.get() profile=company /> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a002_invoice::aggregate::{InvoiceId, InvoiceRecord, PaymentDetails};
    use contracts::domain::common::AggregateId;

    fn edit_data(id: &str) -> InvoiceEditData {
        InvoiceEditData {
            invoice: InvoiceRecord {
                id: InvoiceId::from_string(id).unwrap(),
                issued_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                due_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            },
            payment_details: PaymentDetails {
                total_due: "$1.00".into(),
                bank_name: "Bank".into(),
                country: "Country".into(),
                iban: "IBAN".into(),
                swift_code: "SWIFT".into(),
            },
        }
    }

    fn loaded_id(state: &InvoicePageState) -> Option<String> {
        state
            .invoice
            .with_untracked(|i| i.as_ref().map(|d| d.invoice.id.value().to_string()))
    }

    #[test]
    fn test_older_response_after_navigation_is_discarded() {
        Owner::new().with(|| {
            let state = InvoicePageState::new();
            let first = state.begin();
            let second = state.begin();

            assert!(state.apply(&second, CompanyProfile::default(), Ok(edit_data("4988"))));
            assert!(!state.apply(&first, CompanyProfile::default(), Ok(edit_data("4987"))));
            assert_eq!(loaded_id(&state), Some("4988".to_string()));
        });
    }

    #[test]
    fn test_response_after_leaving_page_is_discarded() {
        Owner::new().with(|| {
            let state = InvoicePageState::new();
            let request = state.begin();
            state.cancel();

            assert!(!state.apply(&request, CompanyProfile::default(), Ok(edit_data("4987"))));
            assert_eq!(loaded_id(&state), None);
            assert!(state.profile.get_untracked().is_none());
        });
    }

    #[test]
    fn test_failed_load_shows_error() {
        Owner::new().with(|| {
            let state = InvoicePageState::new();
            let request = state.begin();

            assert!(state.apply(&request, CompanyProfile::default(), Err("Invoice not found".into())));
            assert_eq!(state.error.get_untracked(), Some("Invoice not found".to_string()));
            assert_eq!(loaded_id(&state), None);
            assert!(state.profile.get_untracked().is_some());
        });
    }
}
