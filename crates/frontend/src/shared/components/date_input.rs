use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser automatically displays dates in locale format
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format).
    /// Returns `false` when the value was rejected; the field then shows `value` again
    on_change: impl Fn(String) -> bool + 'static,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            id=id
            class="form__input form__input--date"
            prop:value=value
            on:change=move |ev| {
                if !on_change(event_target_value(&ev)) {
                    // сигнал не изменился, поэтому prop:value сам не перерисуется
                    event_target::<web_sys::HtmlInputElement>(&ev).set_value(&value.get_untracked());
                }
            }
        />
    }
}
