//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Vega, Vega-Lite and vega-embed are injected as script tags at startup by
//! `assets/js/vega-loader.js`. Charts are Vega-Lite specs built in Rust and
//! handed to `vegaEmbed` as JSON.

static VEGA_LOADER_JS: &str = include_str!("../assets/js/vega-loader.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CVA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Start loading the Vega scripts. Safe to call more than once.
pub fn init_charts() {
    call_js(VEGA_LOADER_JS);
}

/// Render a Vega-Lite spec into the element with id `container_id`.
///
/// Uses a polling loop to wait for the Vega scripts and the container DOM
/// element to exist before rendering.
pub fn render_vega_chart(container_id: &str, spec: &serde_json::Value) {
    // JSON is valid JS; only a literal "</" could end an enclosing script tag
    let spec_js = spec.to_string().replace("</", "<\\/");
    call_js(&format!(
        r#"
        (function() {{
            var spec = {spec_js};
            var poll = setInterval(function() {{
                if (window.__cvaVegaReady &&
                    typeof window.vegaEmbed !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    window.vegaEmbed('#{container_id}', spec, {{ actions: false }})
                        .catch(function(e) {{ console.error('[CVA] vegaEmbed error:', e); }});
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}
