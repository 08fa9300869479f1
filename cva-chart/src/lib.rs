//! Chart rendering for the Andalucía COVID-19 dashboard.
//!
//! This crate provides:
//! - `layout`: device profiles and the layout record each one maps to
//! - `spec`: Vega-Lite bar chart specifications built from observation tables
//! - `dashboard`: the user selection and the filter -> view -> chart run
//! - `page`: a standalone HTML page embedding the charts with `vega-embed`

pub mod dashboard;
pub mod layout;
pub mod page;
pub mod spec;
