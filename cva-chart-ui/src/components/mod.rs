//! Reusable Dioxus RSX components for CVA chart apps.

mod chart_container;
mod chart_header;
mod data_freshness;
mod date_from_picker;
mod device_toggle;
mod error_display;
mod loading_spinner;
mod metric_selector;
mod province_selector;
mod source_footer;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use data_freshness::DataFreshness;
pub use date_from_picker::DateFromPicker;
pub use device_toggle::DeviceToggle;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use province_selector::ProvinceSelector;
pub use source_footer::SourceFooter;
