use leptos::prelude::*;

/// Select component with a placeholder option for an empty list
#[component]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled option shown when `options` is empty
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let is_empty = move || options.with(|o| o.is_empty());

    view! {
        <div class="form__group">
            <select
                id=select_id
                class="form__select"
                disabled=is_empty
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || {
                    if is_empty() {
                        empty_text
                            .get()
                            .map(|text| view! { <option value="" selected=true disabled=true>{text}</option> })
                    } else {
                        None
                    }
                }}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
