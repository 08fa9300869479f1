//! Latest data date and capture time.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn DataFreshness() -> Element {
    let state = use_context::<AppState>();
    let max_date = (state.max_date)();
    let fetched_at = (state.fetched_at)();

    rsx! {
        p {
            style: "margin: 4px 0; font-size: 13px; color: #444;",
            "Última fecha de datos: "
            code { "{max_date}" }
            br {}
            "Datos descargados: {fetched_at}"
        }
    }
}
