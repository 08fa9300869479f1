//! Toggle between the mobile and desktop layouts.

use crate::state::AppState;
use cva_chart::layout::DeviceProfile;
use dioxus::prelude::*;

/// Device profile selector.
/// Unknown values leave the current profile in place.
#[component]
pub fn DeviceToggle() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.device)();
    let options: Vec<(&str, &str, bool)> = DeviceProfile::ALL
        .iter()
        .map(|p| (p.key(), p.label(), *p == current))
        .collect();

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<DeviceProfile>() {
            Ok(profile) => state.device.set(profile),
            Err(e) => log::warn!("{}", e),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "device-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Dispositivo: "
            }
            select {
                id: "device-select",
                onchange: on_change,
                for (key, label, is_current) in options {
                    option {
                        value: "{key}",
                        selected: is_current,
                        "{label}"
                    }
                }
            }
        }
    }
}
