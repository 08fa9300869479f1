//! Standalone HTML page for a built [`Dashboard`].
//!
//! The page pulls Vega, Vega-Lite and vega-embed from a CDN and embeds each
//! chart spec inline. Every piece of text from the data is escaped.

use crate::dashboard::Dashboard;
use chrono::{DateTime, Local};
use cva_badea::{SOURCE_NAME, SOURCE_URL};
use cva_utils::dates::format_date;
use serde_json::Value;
use std::fmt::Write as _;

pub const PAGE_TITLE: &str = "Covid-19: Andalucía";

/// Shown when the date and metric filter leaves nothing to chart.
pub const NO_DATA_MESSAGE: &str = "Sin datos para la fecha y medida elegidas";

const VEGA_SCRIPTS: [&str; 3] = [
    "https://cdn.jsdelivr.net/npm/vega@5",
    "https://cdn.jsdelivr.net/npm/vega-lite@5",
    "https://cdn.jsdelivr.net/npm/vega-embed@6",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Escape text for HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize JSON so it can sit inside a `<script>` element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Render the whole page.
///
/// `fetched_at` is when the feed was captured, `rendered_at` when this page
/// was produced.
pub fn render_page(
    dashboard: &Dashboard,
    fetched_at: DateTime<Local>,
    rendered_at: DateTime<Local>,
) -> String {
    let metric = escape_html(&dashboard.metric);
    let last_data_date = dashboard
        .last_data_date
        .map(|d| format_date(&d))
        .unwrap_or_else(|| "-".to_string());

    let mut charts: Vec<(&str, String, &Value)> = vec![(
        "chart-territory",
        format!("Andalucía: {}", metric),
        &dashboard.territory,
    )];
    if let Some((name, chart)) = &dashboard.province {
        charts.push((
            "chart-province",
            format!("Provincia Única: {} ({})", metric, escape_html(name)),
            chart,
        ));
    }
    charts.push((
        "chart-provinces",
        format!("Provincias: {}", metric),
        &dashboard.provinces,
    ));

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(PAGE_TITLE));
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    for src in VEGA_SCRIPTS {
        let _ = writeln!(html, "<script src=\"{}\"></script>", src);
    }
    html.push_str("</head>\n<body style=\"font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; padding: 16px;\">\n");

    let _ = writeln!(html, "<h1>{}</h1>", escape_html(PAGE_TITLE));
    let _ = writeln!(
        html,
        "<p>Última fecha de datos: <code>{}</code><br>Datos descargados: {}<br>Página generada: {}</p>",
        last_data_date,
        fetched_at.format(TIMESTAMP_FORMAT),
        rendered_at.format(TIMESTAMP_FORMAT)
    );

    if dashboard.filtered_rows == 0 {
        let _ = writeln!(html, "<p><em>{}</em></p>", escape_html(NO_DATA_MESSAGE));
    }

    for (id, heading, _) in &charts {
        let _ = writeln!(html, "<h2>{}</h2>\n<div id=\"{}\"></div>", heading, id);
    }

    let _ = writeln!(
        html,
        "<blockquote><h4>Fuente de Datos: <a href=\"{}\">{}</a></h4></blockquote>",
        escape_html(SOURCE_URL),
        escape_html(SOURCE_NAME)
    );

    html.push_str("<script>\n");
    for (id, _, spec) in &charts {
        let _ = writeln!(
            html,
            "vegaEmbed('#{}', {}, {{ actions: false }}).catch(console.error);",
            id,
            script_json(spec)
        );
    }
    html.push_str("</script>\n</body>\n</html>\n");
    html
}
