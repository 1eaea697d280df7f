use super::super::view_model::InvoiceEditVm;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use contracts::shared::company_profile::CompanyProfile;
use contracts::shared::date_format::{format_iso, format_long};
use leptos::prelude::*;

/// Шапка: реквизиты компании, номер счёта, даты
#[component]
pub fn HeaderSection(vm: InvoiceEditVm, profile: CompanyProfile) -> impl IntoView {
    let invoice_number = vm
        .invoice_id
        .as_ref()
        .map(|id| format!("#{}", id))
        .unwrap_or_default();
    let issue = vm.issue_date;
    let due = vm.due_date;
    let due_warning = vm.due_precedes_issue();
    let vm_issue = vm.clone();
    let vm_due = vm;

    view! {
        <div class="invoice-edit__header">
            <div class="invoice-edit__company">
                <div class="invoice-edit__logo">
                    <span class="invoice-edit__logo-mark"></span>
                    <h4 class="invoice-edit__template-name">{profile.template_name}</h4>
                </div>
                {profile
                    .address_lines
                    .into_iter()
                    .map(|line| view! { <p class="invoice-edit__address-line">{line}</p> })
                    .collect_view()}
                <p class="invoice-edit__phones">{profile.phones}</p>
            </div>

            <div class="invoice-edit__meta">
                <div class="invoice-edit__meta-row">
                    <h4>"Invoice"</h4>
                    <span class="invoice-edit__number">{invoice_number}</span>
                </div>
                <div class="invoice-edit__meta-row">
                    <label for="invoice-issue-date">"Date Issued:"</label>
                    <DateInput
                        id="invoice-issue-date"
                        value=Signal::derive(move || format_iso(issue.get()))
                        on_change=move |value: String| vm_issue.set_issue_date(&value)
                    />
                    <span class="invoice-edit__date-text">{move || format_long(issue.get())}</span>
                </div>
                <div class="invoice-edit__meta-row">
                    <label for="invoice-due-date">"Due Date:"</label>
                    <DateInput
                        id="invoice-due-date"
                        value=Signal::derive(move || format_iso(due.get()))
                        on_change=move |value: String| vm_due.set_due_date(&value)
                    />
                    <span class="invoice-edit__date-text">{move || format_long(due.get())}</span>
                </div>
                {move || {
                    due_warning
                        .get()
                        .then(|| {
                            view! {
                                <div class="invoice-edit__hint">
                                    {icon("alert")}
                                    <span>"Due date is earlier than the issue date"</span>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
