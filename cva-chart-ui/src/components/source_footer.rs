//! Footer crediting the data source.

use cva_badea::{SOURCE_NAME, SOURCE_URL};
use dioxus::prelude::*;

#[component]
pub fn SourceFooter() -> Element {
    rsx! {
        blockquote {
            style: "margin: 24px 0 0 0; padding-left: 12px; border-left: 3px solid #ccc; color: #444;",
            "Fuente de Datos: "
            a { href: SOURCE_URL, "{SOURCE_NAME}" }
        }
    }
}
