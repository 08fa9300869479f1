//! Shared Dioxus components and Vega-Lite bridge for CVA chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that load Vega and call `vegaEmbed` via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
