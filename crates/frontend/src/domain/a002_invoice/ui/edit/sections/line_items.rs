use super::super::view_model::InvoiceEditVm;
use crate::shared::components::amount_input::AmountInput;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::money::format_money;
use contracts::domain::a002_invoice::line_item::{CatalogItem, LineItemId};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LineItemsSection(vm: InvoiceEditVm) -> impl IntoView {
    let items = vm.items;
    let vm_rows = vm.clone();
    let vm_add = vm;

    view! {
        <div class="invoice-edit__items">
            <div class="invoice-edit__items-head">
                <span>"Item"</span>
                <span>"Cost"</span>
                <span>"Hours"</span>
                <span>"Price"</span>
            </div>
            <For
                each=move || items.with(|i| i.ids())
                key=|id| *id
                children=move |id| view! { <LineItemRow vm=vm_rows.clone() id=id /> }
            />
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| {
                    vm_add.add_item();
                }
            >
                {icon("plus")}
                " Add Item"
            </Button>
        </div>
    }
}

/// Одна строка; числовые поля получают значение только при создании строки
#[component]
fn LineItemRow(vm: InvoiceEditVm, id: LineItemId) -> impl IntoView {
    let items = vm.items;
    let Some(initial) = items.with_untracked(|i| i.get(id).cloned()) else {
        return ().into_any();
    };

    let item_value = Signal::derive(move || {
        items.with(|i| i.get(id).map(|r| r.item.as_str().to_string()).unwrap_or_default())
    });
    let price = move || items.with(|i| i.get(id).map(|r| r.price()).unwrap_or(0.0));
    let catalog = Signal::derive(|| {
        CatalogItem::all()
            .iter()
            .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
            .collect::<Vec<_>>()
    });

    let vm_item = vm.clone();
    let vm_desc = vm.clone();
    let vm_cost = vm.clone();
    let vm_hours = vm.clone();
    let vm_remove = vm;

    view! {
        <div class="invoice-edit__item-row">
            <div class="invoice-edit__item-main">
                <Select
                    value=item_value
                    options=catalog
                    on_change=Callback::new(move |value: String| {
                        if let Some(catalog_item) = CatalogItem::from_str(&value) {
                            vm_item.update_item(id, |r| r.item = catalog_item);
                        }
                    })
                />
                <Textarea
                    initial=initial.description.clone()
                    rows=2
                    on_input=Callback::new(move |value: String| {
                        vm_desc.update_item(id, move |r| r.description = value);
                    })
                />
            </div>
            <div class="invoice-edit__item-amount">
                <AmountInput
                    initial=initial.unit_cost()
                    on_change=move |value| vm_cost.update_item(id, |r| r.set_unit_cost(value))
                />
            </div>
            <div class="invoice-edit__item-amount">
                <AmountInput
                    initial=initial.hours()
                    on_change=move |value| vm_hours.update_item(id, |r| r.set_hours(value))
                />
            </div>
            <div class="invoice-edit__item-price">{move || format_money(price())}</div>
            <button
                class="invoice-edit__item-remove"
                title="Remove item"
                on:click=move |_| vm_remove.remove_item(id)
            >
                {icon("x")}
            </button>
        </div>
    }
    .into_any()
}
