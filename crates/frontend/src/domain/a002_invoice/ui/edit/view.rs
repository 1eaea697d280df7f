use super::sections::{ClientSection, HeaderSection, LineItemsSection, SummarySection};
use super::view_model::InvoiceEditVm;
use contracts::domain::a002_invoice::aggregate::{InvoiceEditData, PaymentDetails};
use contracts::shared::company_profile::CompanyProfile;
use leptos::prelude::*;

/// Состояние карточки; `None`, если записи счёта нет
fn card_state(data: Option<InvoiceEditData>) -> Option<(InvoiceEditVm, PaymentDetails)> {
    data.map(|data| (InvoiceEditVm::new(Some(&data.invoice)), data.payment_details))
}

/// Карточка редактирования счёта. Без записи ничего не рисует.
#[component]
pub fn InvoiceEditCard(data: Option<InvoiceEditData>, profile: CompanyProfile) -> impl IntoView {
    let Some((vm, payment)) = card_state(data) else {
        return ().into_any();
    };

    let lifetime = vm.lifetime.clone();
    on_cleanup(move || lifetime.deactivate());
    vm.load_clients();

    view! {
        <div class="card invoice-edit">
            <HeaderSection vm=vm.clone() profile=profile />
            <hr class="invoice-edit__divider" />
            <ClientSection vm=vm.clone() payment=payment />
            <hr class="invoice-edit__divider" />
            <LineItemsSection vm=vm.clone() />
            <hr class="invoice-edit__divider" />
            <SummarySection vm=vm />
        </div>
    }
    .into_any()
}
