//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cva_badea::observation::ObservationTable;
use cva_badea::snapshot::Snapshot;
use cva_chart::dashboard::Selection;
use cva_chart::layout::DeviceProfile;
use cva_utils::dates::{format_date, parse_date};
use dioxus::prelude::*;

/// Shared application state for all CVA chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Normalized observations (None until loaded)
    pub table: Signal<Option<ObservationTable>>,
    /// When the embedded data was captured (YYYY-MM-DD HH:MM)
    pub fetched_at: Signal<String>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Selected device profile
    pub device: Signal<DeviceProfile>,
    /// Start date for filtering (YYYY-MM-DD, as used by HTML date inputs)
    pub date_from: Signal<String>,
    /// Earliest date the picker allows
    pub min_date: Signal<String>,
    /// Latest date the picker allows, also the latest data date
    pub max_date: Signal<String>,
    /// Currently selected metric
    pub metric: Signal<String>,
    /// Available metrics
    pub metrics: Signal<Vec<String>>,
    /// Currently selected province for the detail chart
    pub province: Signal<String>,
    /// Provinces offered by the selector
    pub provinces: Signal<Vec<String>>,
    /// The date and metric filter left nothing to chart
    pub no_data: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            fetched_at: Signal::new(String::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            device: Signal::new(DeviceProfile::default()),
            date_from: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            metric: Signal::new(String::new()),
            metrics: Signal::new(Vec::new()),
            province: Signal::new(String::new()),
            provinces: Signal::new(Vec::new()),
            no_data: Signal::new(false),
        }
    }

    /// Populate the state from a snapshot, applying the initial selection.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        let table = snapshot.table;
        let Some(selection) = Selection::initial(&table) else {
            self.error_msg
                .set(Some("The embedded snapshot holds no observations".to_string()));
            self.loading.set(false);
            return;
        };
        if let Some((min, max)) = table.date_bounds() {
            self.min_date.set(format_date(&min));
            self.max_date.set(format_date(&max));
        }
        self.fetched_at
            .set(snapshot.fetched_at.format("%Y-%m-%d %H:%M").to_string());
        self.metrics.set(table.metrics());
        self.date_from.set(format_date(&selection.date_from));
        self.metric.set(selection.metric);
        self.device.set(selection.device);
        self.province.set(selection.province.unwrap_or_default());
        self.table.set(Some(table));
        self.loading.set(false);
    }

    /// The current selection, or `None` while the date input is unparseable.
    pub fn selection(&self) -> Option<Selection> {
        let date_from = parse_date(&(self.date_from)()).ok()?;
        let province = (self.province)();
        Some(Selection {
            date_from,
            metric: (self.metric)(),
            device: (self.device)(),
            province: if province.is_empty() { None } else { Some(province) },
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
