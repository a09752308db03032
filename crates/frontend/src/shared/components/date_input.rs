use crate::shared::date_utils::{format_input_date, parse_input_date};
use chrono::NaiveDate;
use leptos::prelude::*;

/// DateInput component with native date picker
#[component]
pub fn DateInput(
    /// Selected date; `None` shows an empty picker
    value: RwSignal<Option<NaiveDate>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=move || format_input_date(value.get())
            on:input=move |ev| value.set(parse_input_date(&event_target_value(&ev)))
            disabled=move || disabled.get().unwrap_or(false)
        />
    }
}
