//! Dropdown selector for the displayed metric.

use crate::state::AppState;
use dioxus::prelude::*;

/// Metric dropdown, populated from the distinct metrics in the data.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let metrics = state.metrics.read().clone();
    let selected = (state.metric)();

    let on_change = move |evt: Event<FormData>| {
        state.metric.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Medida: "
            }
            select {
                id: "metric-select",
                onchange: on_change,
                for metric in metrics.iter() {
                    option {
                        value: "{metric}",
                        selected: *metric == selected,
                        "{metric}"
                    }
                }
            }
        }
    }
}
