//! Start date picker bounded by the observed data.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date input for the "from" end of the filter. The upper end is always the
/// latest data date.
#[component]
pub fn DateFromPicker() -> Element {
    let mut state = use_context::<AppState>();
    let value = (state.date_from)();
    let min = (state.min_date)();
    let max = (state.max_date)();

    let on_change = move |evt: Event<FormData>| {
        state.date_from.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Fecha desde: "
                input {
                    r#type: "date",
                    value: "{value}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_change,
                }
            }
        }
    }
}
