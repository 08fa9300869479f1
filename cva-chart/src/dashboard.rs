//! The user's selection and the filter -> view -> chart run it drives.

use crate::layout::{DeviceProfile, Layout};
use crate::spec::{province_chart, provinces_chart, territory_chart};
use chrono::NaiveDate;
use cva_badea::observation::ObservationTable;
use cva_data::filter::filter;
use cva_data::views::{all_provinces, province_names, single_province, whole_territory};
use log::warn;
use serde_json::Value;

/// Start date offered before the user picks one: 1 August 2020.
pub const DEFAULT_DATE_FROM: (i32, u32, u32) = (2020, 8, 1);
/// Position of the initially selected metric among the distinct metrics.
pub const DEFAULT_METRIC_INDEX: usize = 1;
/// Position of the initially selected province among the distinct provinces.
pub const DEFAULT_PROVINCE_INDEX: usize = 3;

/// What the presentation layer currently has selected. The pipeline only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub date_from: NaiveDate,
    pub metric: String,
    pub device: DeviceProfile,
    pub province: Option<String>,
}

impl Selection {
    /// The selection shown on first load, or `None` for an empty table.
    pub fn initial(table: &ObservationTable) -> Option<Selection> {
        let (min, max) = table.date_bounds()?;
        let (y, m, d) = DEFAULT_DATE_FROM;
        let date_from = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap_or(min)
            .clamp(min, max);
        let metric = pick_default(table.metrics(), DEFAULT_METRIC_INDEX)?;
        let province = pick_default(province_names(table), DEFAULT_PROVINCE_INDEX);
        Some(Selection {
            date_from,
            metric,
            device: DeviceProfile::default(),
            province,
        })
    }
}

/// The element at `index`, falling back to the first one.
fn pick_default(mut options: Vec<String>, index: usize) -> Option<String> {
    if index < options.len() {
        Some(options.swap_remove(index))
    } else {
        options.into_iter().next()
    }
}

/// Everything needed to draw one dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub metric: String,
    pub layout: Layout,
    /// Latest date in the unfiltered data
    pub last_data_date: Option<NaiveDate>,
    /// Rows left after the date and metric filter
    pub filtered_rows: usize,
    pub territory: Value,
    pub provinces: Value,
    /// Name and chart of the detail province, when the layout shows one
    pub province: Option<(String, Value)>,
    /// Province names the selector may offer
    pub province_options: Vec<String>,
}

impl Dashboard {
    pub fn build(table: &ObservationTable, selection: &Selection) -> Dashboard {
        let layout = *selection.device.layout();
        let metric = selection.metric.as_str();

        let filtered = filter(table, selection.date_from, metric);
        let territory = whole_territory(&filtered);
        let provinces = all_provinces(&filtered);
        let province_options = province_names(&filtered);

        let province = if layout.show_single_province {
            resolve_province(selection.province.as_deref(), &province_options).and_then(|name| {
                match single_province(&filtered, &name) {
                    Ok(rows) => {
                        let chart = province_chart(&rows, metric, &name, &layout);
                        Some((name, chart))
                    }
                    Err(e) => {
                        warn!("{}", e);
                        None
                    }
                }
            })
        } else {
            None
        };

        Dashboard {
            metric: metric.to_string(),
            layout,
            last_data_date: table.date_bounds().map(|(_, max)| max),
            filtered_rows: filtered.len(),
            territory: territory_chart(&territory, metric, &layout),
            provinces: provinces_chart(&provinces, metric, &layout),
            province,
            province_options,
        }
    }
}

/// The selected province if it is on offer, otherwise the default one.
fn resolve_province(selected: Option<&str>, options: &[String]) -> Option<String> {
    match selected {
        Some(name) if options.iter().any(|o| o == name) => Some(name.to_string()),
        _ => pick_default(options.to_vec(), DEFAULT_PROVINCE_INDEX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cva_badea::observation::Observation;
    use cva_badea::region::PROVINCES;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table() -> ObservationTable {
        let mut rows = Vec::new();
        for day in [date(2020, 7, 30), date(2020, 8, 2), date(2020, 8, 3)] {
            for metric in ["Confirmados PCR/TA", "Hospitalizados"] {
                rows.push(Observation::new("Andalucía", metric, day, 80));
                for province in PROVINCES {
                    rows.push(Observation::new(province, metric, day, 10));
                }
            }
        }
        ObservationTable::new(rows)
    }

    #[test]
    fn test_initial_selection() {
        let selection = Selection::initial(&table()).unwrap();
        assert_eq!(selection.date_from, date(2020, 8, 1));
        assert_eq!(selection.metric, "Hospitalizados");
        assert_eq!(selection.device, DeviceProfile::Desktop);
        assert_eq!(selection.province.as_deref(), Some("Granada"));
    }

    #[test]
    fn test_initial_date_is_clamped_to_data() {
        let table = ObservationTable::new(vec![Observation::new(
            "Andalucía",
            "Casos",
            date(2021, 3, 15),
            42,
        )]);
        let selection = Selection::initial(&table).unwrap();
        assert_eq!(selection.date_from, date(2021, 3, 15));
        assert_eq!(selection.metric, "Casos");
        assert_eq!(selection.province, None);
        assert_eq!(Selection::initial(&ObservationTable::default()), None);
    }

    #[test]
    fn test_desktop_dashboard() {
        let table = table();
        let mut selection = Selection::initial(&table).unwrap();
        selection.province = Some("Sevilla".to_string());
        let dashboard = Dashboard::build(&table, &selection);

        assert_eq!(dashboard.last_data_date, Some(date(2020, 8, 3)));
        assert_eq!(dashboard.province_options.len(), 8);
        // two days from 1 August onwards, one metric
        assert_eq!(dashboard.territory["data"]["values"].as_array().unwrap().len(), 2);
        assert_eq!(dashboard.provinces["data"]["values"].as_array().unwrap().len(), 16);

        let (name, chart) = dashboard.province.unwrap();
        assert_eq!(name, "Sevilla");
        assert_eq!(chart["data"]["values"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_mobile_dashboard_has_no_detail_chart() {
        let table = table();
        let mut selection = Selection::initial(&table).unwrap();
        selection.device = DeviceProfile::Mobile;
        let dashboard = Dashboard::build(&table, &selection);
        assert!(dashboard.province.is_none());
        assert_eq!(dashboard.provinces["columns"], 1);
    }

    #[test]
    fn test_unknown_province_falls_back_to_default() {
        let table = table();
        let mut selection = Selection::initial(&table).unwrap();
        selection.province = Some("Madrid".to_string());
        let dashboard = Dashboard::build(&table, &selection);
        assert_eq!(dashboard.province.unwrap().0, "Granada");
    }

    #[test]
    fn test_selection_past_the_data_renders_empty_charts() {
        let table = table();
        let mut selection = Selection::initial(&table).unwrap();
        selection.date_from = date(2021, 1, 1);
        let dashboard = Dashboard::build(&table, &selection);
        assert_eq!(dashboard.territory["data"]["values"], serde_json::json!([]));
        assert_eq!(dashboard.filtered_rows, 0);
        assert!(dashboard.province_options.is_empty());
        assert!(dashboard.province.is_none());
    }
}
