//! Vega-Lite specifications for the dashboard's bar charts.
//!
//! All three charts share one encoding: date on x (temporal), value on y
//! (quantitative, titled with the metric) and a region/date/value tooltip.
//! Vega-Lite aggregates and orders by date itself, so rows are passed in
//! table order.

use crate::layout::Layout;
use cva_badea::observation::ObservationTable;
use cva_utils::dates::format_date;
use serde::Serialize;
use serde_json::{json, Value};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

pub const REGION_FIELD: &str = "Territorio";
pub const DATE_FIELD: &str = "fecha";
pub const VALUE_FIELD: &str = "Valor";

/// Tooltip date format, e.g. "Mon 15 Mar 2021".
pub const TOOLTIP_DATE_FORMAT: &str = "%a %d %b %Y";
pub const TOOLTIP_VALUE_FORMAT: &str = ".0f";

/// One inline data value as Vega-Lite sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum<'a> {
    #[serde(rename = "Territorio")]
    pub region: &'a str,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "Valor")]
    pub value: i64,
}

fn data_values(table: &ObservationTable) -> Value {
    let values: Vec<ChartDatum> = table
        .iter()
        .map(|o| ChartDatum {
            region: &o.region,
            date: format_date(&o.date),
            value: o.value,
        })
        .collect();
    json!({ "values": values })
}

/// Bar mark plus the shared x/y/tooltip encoding.
fn bar_encoding(metric: &str, region_title: &str) -> Value {
    json!({
        "x": { "field": DATE_FIELD, "type": "temporal", "title": "Fecha" },
        "y": { "field": VALUE_FIELD, "type": "quantitative", "title": metric },
        "tooltip": [
            { "field": REGION_FIELD, "type": "ordinal", "title": region_title },
            {
                "field": DATE_FIELD,
                "type": "temporal",
                "title": "Fecha",
                "format": TOOLTIP_DATE_FORMAT
            },
            {
                "field": VALUE_FIELD,
                "type": "quantitative",
                "title": metric,
                "format": TOOLTIP_VALUE_FORMAT
            }
        ]
    })
}

/// Bar chart of the aggregate region.
pub fn territory_chart(table: &ObservationTable, metric: &str, layout: &Layout) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "data": data_values(table),
        "mark": "bar",
        "encoding": bar_encoding(metric, "Territorio"),
        "width": layout.chart_width,
        "height": layout.chart_height
    })
}

/// Grid of small bar charts, one per province, sharing axes and encoding.
pub fn provinces_chart(table: &ObservationTable, metric: &str, layout: &Layout) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "data": data_values(table),
        "facet": {
            "field": REGION_FIELD,
            "type": "ordinal",
            "title": null,
            "header": { "labelFontSize": layout.facet_label_font_size }
        },
        "columns": layout.facet_columns,
        "spec": {
            "mark": "bar",
            "encoding": bar_encoding(metric, "Provincia"),
            "width": layout.facet_width,
            "height": layout.facet_height
        }
    })
}

/// Detail bar chart of one province, titled with its name.
pub fn province_chart(
    table: &ObservationTable,
    metric: &str,
    province: &str,
    layout: &Layout,
) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "data": data_values(table),
        "title": province,
        "mark": "bar",
        "encoding": bar_encoding(metric, "Provincia"),
        "width": layout.chart_width,
        "height": layout.chart_height,
        "config": { "title": { "fontSize": layout.title_font_size } }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DESKTOP_LAYOUT, MOBILE_LAYOUT};
    use chrono::NaiveDate;
    use cva_badea::observation::Observation;

    fn table() -> ObservationTable {
        ObservationTable::new(vec![
            Observation::new(
                "Sevilla",
                "Casos",
                NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
                20,
            ),
            Observation::new(
                "Málaga",
                "Casos",
                NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
                30,
            ),
        ])
    }

    #[test]
    fn test_territory_chart_encoding() {
        let spec = territory_chart(&table(), "Casos", &DESKTOP_LAYOUT);
        assert_eq!(spec["mark"], "bar");
        assert_eq!(spec["width"], 680);
        assert_eq!(spec["height"], 400);
        assert_eq!(spec["encoding"]["x"]["type"], "temporal");
        assert_eq!(spec["encoding"]["y"]["type"], "quantitative");
        assert_eq!(spec["encoding"]["y"]["title"], "Casos");

        let tooltip = spec["encoding"]["tooltip"].as_array().unwrap();
        assert_eq!(tooltip.len(), 3);
        assert_eq!(tooltip[0]["field"], "Territorio");
        assert_eq!(tooltip[1]["format"], "%a %d %b %Y");
        assert_eq!(tooltip[2]["format"], ".0f");
        assert_eq!(tooltip[2]["title"], "Casos");
    }

    #[test]
    fn test_data_values_use_iso_dates() {
        let spec = territory_chart(&table(), "Casos", &DESKTOP_LAYOUT);
        assert_eq!(
            spec["data"]["values"][0],
            json!({ "Territorio": "Sevilla", "fecha": "2021-03-15", "Valor": 20 })
        );
    }

    #[test]
    fn test_provinces_chart_facets_by_region() {
        let desktop = provinces_chart(&table(), "Casos", &DESKTOP_LAYOUT);
        assert_eq!(desktop["facet"]["field"], "Territorio");
        assert_eq!(desktop["facet"]["title"], Value::Null);
        assert_eq!(desktop["facet"]["header"]["labelFontSize"], 20);
        assert_eq!(desktop["columns"], 2);
        assert_eq!(desktop["spec"]["width"], 300);
        assert_eq!(desktop["spec"]["encoding"]["tooltip"][0]["title"], "Provincia");

        let mobile = provinces_chart(&table(), "Casos", &MOBILE_LAYOUT);
        assert_eq!(mobile["columns"], 1);
    }

    #[test]
    fn test_province_chart_is_titled() {
        let spec = province_chart(&table(), "Casos", "Sevilla", &DESKTOP_LAYOUT);
        assert_eq!(spec["title"], "Sevilla");
        assert_eq!(spec["config"]["title"]["fontSize"], 24);
    }

    #[test]
    fn test_empty_table_gives_empty_chart() {
        let spec = territory_chart(&ObservationTable::default(), "Casos", &MOBILE_LAYOUT);
        assert_eq!(spec["data"]["values"], json!([]));
        assert_eq!(spec["mark"], "bar");
    }
}
