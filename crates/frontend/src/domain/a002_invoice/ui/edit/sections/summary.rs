use super::super::view_model::InvoiceEditVm;
use crate::shared::components::amount_input::AmountInput;
use crate::shared::components::ui::Textarea;
use crate::shared::money::{format_money, format_percent};
use leptos::prelude::*;
use thaw::*;

/// Продавец, благодарность, итоги и примечание
#[component]
pub fn SummarySection(vm: InvoiceEditVm) -> impl IntoView {
    let totals = vm.totals();
    let initial = vm.adjustments.get_untracked();
    let note = vm.note;
    let vm_discount = vm.clone();
    let vm_tax = vm.clone();

    view! {
        <div class="invoice-edit__summary">
            <div class="invoice-edit__salesperson">
                <div class="form__group">
                    <label class="form__label">"Salesperson:"</label>
                    <Input value=vm.salesperson />
                </div>
                <div class="form__group">
                    <Input value=vm.thanks_note />
                </div>
            </div>

            <div class="invoice-edit__totals">
                <div class="invoice-edit__totals-row">
                    <span>"Subtotal:"</span>
                    <span>{move || format_money(totals.get().subtotal)}</span>
                </div>
                <div class="invoice-edit__totals-row">
                    <label for="invoice-discount">"Discount:"</label>
                    <AmountInput
                        id="invoice-discount"
                        initial=initial.discount()
                        on_change=move |value| vm_discount.set_discount(value)
                    />
                </div>
                <div class="invoice-edit__totals-row">
                    <label for="invoice-tax-rate">"Tax rate (%):"</label>
                    <AmountInput
                        id="invoice-tax-rate"
                        initial=initial.tax_rate()
                        on_change=move |value| vm_tax.set_tax_rate(value)
                    />
                </div>
                <div class="invoice-edit__totals-row">
                    <span>{move || format!("Tax ({}):", format_percent(totals.get().tax_rate))}</span>
                    <span>{move || format_money(totals.get().tax)}</span>
                </div>
                <hr />
                <div class="invoice-edit__totals-row invoice-edit__totals-row--total">
                    <span>"Total:"</span>
                    <span>{move || format_money(totals.get().total)}</span>
                </div>
            </div>
        </div>

        <div class="invoice-edit__note">
            <Textarea
                label="Note:"
                id="invoice-note"
                initial=note.get_untracked()
                rows=2
                on_input=Callback::new(move |value: String| note.set(value))
            />
        </div>
    }
}
