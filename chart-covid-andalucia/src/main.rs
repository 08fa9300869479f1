//! COVID-19 in Andalucía
//!
//! Bar charts of one metric over time for the whole territory, for every
//! province as a grid of small charts, and (desktop layout only) for a
//! single chosen province. The controls pick the device layout, the start
//! date and the metric.
//!
//! Data flow:
//! 1. `cva-cli fetch` downloads and normalizes the BADEA feed into
//!    `fixtures/observations.csv`.
//! 2. `build.rs` copies that snapshot into `OUT_DIR` and `include_str!`
//!    embeds it into the WASM binary.
//! 3. On mount the snapshot is parsed and the initial selection applied.
//! 4. Whenever a control changes, `Dashboard::build` re-runs filter, views
//!    and chart specs and the charts are re-embedded with vega-embed.

use cva_badea::snapshot::Snapshot;
use cva_chart::dashboard::Dashboard;
use cva_chart_ui::components::{
    ChartContainer, ChartHeader, DataFreshness, DateFromPicker, DeviceToggle, ErrorDisplay,
    LoadingSpinner, MetricSelector, ProvinceSelector, SourceFooter,
};
use cva_chart_ui::js_bridge;
use cva_chart_ui::state::AppState;
use dioxus::prelude::*;

/// Normalized snapshot of the feed.
const OBSERVATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/observations.csv"));

/// Chart container DOM element IDs used by vega-embed to render into.
const TERRITORY_CHART_ID: &str = "territory-chart";
const PROVINCE_CHART_ID: &str = "province-chart";
const PROVINCES_CHART_ID: &str = "provinces-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-andalucia-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded snapshot on mount
    use_effect(move || {
        js_bridge::init_charts();
        if OBSERVATIONS_CSV.is_empty() {
            state
                .error_msg
                .set(Some("No data snapshot was embedded".to_string()));
            state.loading.set(false);
            return;
        }
        match Snapshot::from_csv(OBSERVATIONS_CSV) {
            Ok(snapshot) => {
                log::info!("Loaded {} observations", snapshot.table.len());
                state.load_snapshot(snapshot);
            }
            Err(e) => {
                log::error!("Failed to load snapshot: {}", e);
                state.error_msg.set(Some(e.to_string()));
                state.loading.set(false);
            }
        }
    });

    // Re-render charts whenever any control changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let Some(selection) = state.selection() else {
            log::warn!("Ignoring unparseable start date {:?}", (state.date_from)());
            return;
        };
        let dashboard = match &*state.table.read() {
            Some(table) => Dashboard::build(table, &selection),
            None => return,
        };

        js_bridge::render_vega_chart(TERRITORY_CHART_ID, &dashboard.territory);
        js_bridge::render_vega_chart(PROVINCES_CHART_ID, &dashboard.provinces);
        match &dashboard.province {
            Some((_, chart)) => js_bridge::render_vega_chart(PROVINCE_CHART_ID, chart),
            None => js_bridge::destroy_chart(PROVINCE_CHART_ID),
        }

        let no_data = dashboard.filtered_rows == 0;
        if *state.no_data.peek() != no_data {
            state.no_data.set(no_data);
        }

        // Offer only provinces present after filtering
        if *state.provinces.peek() != dashboard.province_options {
            state.provinces.set(dashboard.province_options.clone());
        }
        if let Some((name, _)) = &dashboard.province {
            if *state.province.peek() != *name {
                state.province.set(name.clone());
            }
        }
    });

    let device = (state.device)();
    let layout = device.layout();
    let metric = (state.metric)();
    let no_data = (state.no_data)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 { style: "margin: 0 0 8px 0;", "Covid-19: Andalucía" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    hint: "cva-cli fetch -o fixtures/observations.csv && dx build".to_string(),
                }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                    DeviceToggle {}
                    DateFromPicker {}
                    MetricSelector {}
                }
                DataFreshness {}

                ChartHeader { title: "Andalucía".to_string(), metric: metric.clone() }
                ChartContainer {
                    id: TERRITORY_CHART_ID.to_string(),
                    empty: no_data,
                    min_height: layout.chart_height,
                }

                if layout.show_single_province {
                    ChartHeader { title: "Provincia Única".to_string(), metric: metric.clone() }
                    ProvinceSelector {}
                    ChartContainer {
                        id: PROVINCE_CHART_ID.to_string(),
                    empty: no_data,
                        min_height: layout.chart_height,
                    }
                }

                ChartHeader { title: "Provincias".to_string(), metric: metric.clone() }
                ChartContainer {
                    id: PROVINCES_CHART_ID.to_string(),
                    empty: no_data,
                    min_height: layout.facet_height,
                }
            }

            SourceFooter {}
        }
    }
}
