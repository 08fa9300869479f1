//! Banner for a dashboard that cannot show any data.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What the reader can do about it
    pub hint: Option<String>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px 0; padding-left: 12px; border-left: 3px solid #C62828; color: #444;",
            p {
                style: "margin: 0 0 4px 0; font-weight: bold; color: #C62828;",
                "No se pudieron cargar los datos"
            }
            p { style: "margin: 0; font-size: 13px;", "{props.message}" }
            if let Some(hint) = props.hint {
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px;",
                    code { "{hint}" }
                }
            }
        }
    }
}
