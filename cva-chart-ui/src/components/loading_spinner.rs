//! Placeholder while the embedded snapshot is parsed.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Cargando datos...".to_string())]
    pub message: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        p {
            style: "margin: 24px 0; font-size: 13px; color: #444;",
            "{props.message}"
        }
    }
}
