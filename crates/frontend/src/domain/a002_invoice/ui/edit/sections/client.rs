use super::super::view_model::InvoiceEditVm;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::domain::a001_client::selection::DirectoryState;
use contracts::domain::a002_invoice::aggregate::PaymentDetails;
use leptos::prelude::*;
use thaw::*;

/// "Invoice To" (выбор клиента) и "Bill To" (платёжные реквизиты)
#[component]
pub fn ClientSection(vm: InvoiceEditVm, payment: PaymentDetails) -> impl IntoView {
    let clients = vm.clients;

    let options = Signal::derive(move || {
        clients.with(|s| {
            s.clients()
                .map(|list| {
                    list.iter()
                        .map(|c| (c.name.clone(), c.name.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let selected = Signal::derive(move || clients.with(|s| s.selected_name().to_string()));
    let empty_text = Signal::derive(move || {
        let text = match clients.with(|s| s.directory().clone()) {
            DirectoryState::Loading => "Loading clients...",
            DirectoryState::Loaded(_) => "No clients",
            DirectoryState::Unavailable(_) => "Clients unavailable",
        };
        Some(text.to_string())
    });

    let vm_select = vm.clone();
    let on_select = Callback::new(move |name: String| vm_select.select_client(name));

    view! {
        <div class="invoice-edit__parties">
            <div class="invoice-edit__invoice-to">
                <h6>"Invoice To:"</h6>
                <Select
                    id="invoice-client"
                    value=selected
                    options=options
                    empty_text=empty_text
                    on_change=on_select
                />

                {move || {
                    clients
                        .with(|s| s.selected_client().cloned())
                        .map(|client| {
                            view! {
                                <div class="invoice-edit__client-detail">
                                    <p>{client.company}</p>
                                    <p>{client.address}</p>
                                    <p>{client.contact}</p>
                                    <p>{client.company_email}</p>
                                </div>
                            }
                        })
                }}

                {move || {
                    let vm = vm.clone();
                    match clients.with(|s| s.directory().clone()) {
                        DirectoryState::Unavailable(e) => Some(view! {
                            <div class="error invoice-edit__error">
                                {icon("alert")}
                                <span>{format!("Could not load clients: {}", e)}</span>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| vm.retry_clients()
                                >
                                    {icon("refresh")}
                                    " Retry"
                                </Button>
                            </div>
                        }),
                        _ => None,
                    }
                }}
            </div>

            <div class="invoice-edit__bill-to">
                <h6>"Bill To:"</h6>
                <table class="invoice-edit__payment">
                    <tbody>
                        <tr>
                            <td>"Total Due:"</td>
                            <td class="invoice-edit__payment-total">{payment.total_due}</td>
                        </tr>
                        <tr>
                            <td>"Bank name:"</td>
                            <td>{payment.bank_name}</td>
                        </tr>
                        <tr>
                            <td>"Country:"</td>
                            <td>{payment.country}</td>
                        </tr>
                        <tr>
                            <td>"IBAN:"</td>
                            <td>{payment.iban}</td>
                        </tr>
                        <tr>
                            <td>"SWIFT code:"</td>
                            <td>{payment.swift_code}</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
