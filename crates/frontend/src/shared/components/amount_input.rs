use contracts::domain::a002_invoice::line_item::parse_amount;
use leptos::prelude::*;

/// Числовое поле для неотрицательных сумм.
///
/// Значение задаётся один раз при монтировании; дальше поле живёт само,
/// чтобы не перетирать ввод пользователя ("1." и т.п.).
#[component]
pub fn AmountInput(
    initial: f64,
    /// Callback with the parsed, non-negative value
    on_change: impl Fn(f64) + 'static,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="number"
            id=id
            class="form__input form__input--number"
            min="0"
            step="any"
            prop:value=initial.to_string()
            on:input=move |ev| {
                on_change(parse_amount(&event_target_value(&ev)));
            }
        />
    }
}
