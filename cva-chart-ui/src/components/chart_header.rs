//! Section header naming the region view and the selected metric.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Region view, e.g. "Andalucía" or "Provincias"
    pub title: String,
    /// Selected metric, appended to the title
    #[props(default = String::new())]
    pub metric: String,
}

/// Header for chart sections: "<title>: <metric>".
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            h2 {
                style: "margin: 0; font-size: 20px;",
                if props.metric.is_empty() {
                    "{props.title}"
                } else {
                    "{props.title}: {props.metric}"
                }
            }
        }
    }
}
