//! Mount point for one vega-embed chart.

use cva_chart::page::NO_DATA_MESSAGE;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id vega-embed renders into
    pub id: String,
    /// Minimum height in pixels, taken from the active layout
    #[props(default = 400)]
    pub min_height: u32,
    /// The current filter left no rows for this chart
    #[props(default = false)]
    pub empty: bool,
}

/// Chart mount point. An empty selection still renders the (empty) chart
/// so its axes stay visible; a note is laid over it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let border = if props.empty { "1px dashed #ccc" } else { "none" };
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; overflow-x: auto; border: {}; border-radius: 4px;",
        props.min_height, border
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
            if props.empty {
                p {
                    style: "position: absolute; top: 8px; left: 12px; margin: 0; font-size: 13px; color: #444;",
                    em { "{NO_DATA_MESSAGE}" }
                }
            }
        }
    }
}
