use leptos::prelude::*;

/// Textarea component with label support.
///
/// The text is seeded once from `initial`; after that the element owns it and
/// reports edits through `on_input`.
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Initial text
    #[prop(into)]
    initial: String,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(2);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                rows=textarea_rows
                prop:value=initial
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
