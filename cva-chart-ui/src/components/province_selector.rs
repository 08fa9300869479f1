//! Dropdown selector for choosing a province.

use crate::state::AppState;
use dioxus::prelude::*;

/// Province dropdown selector.
/// Reads the provinces on offer from AppState and updates `province` on change.
#[component]
pub fn ProvinceSelector() -> Element {
    let mut state = use_context::<AppState>();
    let provinces = state.provinces.read().clone();
    let selected = (state.province)();

    let on_change = move |evt: Event<FormData>| {
        state.province.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "province-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Seleccione una provincia: "
            }
            select {
                id: "province-select",
                onchange: on_change,
                for province in provinces.iter() {
                    option {
                        value: "{province}",
                        selected: *province == selected,
                        "{province}"
                    }
                }
            }
        }
    }
}
