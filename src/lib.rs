//! Denoising comparison page — in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Web Worker
//! bridge to call. Uses `matchit` for URL routing. The worker keeps the
//! module alive, so the current selection survives between requests for the
//! lifetime of the page.

use wasm_bindgen::prelude::*;

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod render;
pub mod routes;
pub mod selection;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method ("GET" or "POST")
/// * `path`   — URL path (e.g., "/api/compare/metrics")
/// * `query`  — Query string (e.g., "?category=min")
/// * `body`   — Request body (form data or JSON). Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM. The
/// `state` and `asset` routes return JSON and a bare path respectively.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/compare", "view").ok();
    router.insert("/api/compare/slider", "slider").ok();
    router.insert("/api/compare/metrics", "metrics").ok();
    router.insert("/api/compare/asset", "asset").ok();
    router.insert("/api/compare/state", "state").ok();
    router.insert("/api/compare/category", "category").ok();
    router.insert("/api/compare/left", "left").ok();
    router.insert("/api/compare/right", "right").ok();
    router.insert("/api/compare/reset", "reset").ok();
    router.insert("/api/compare/config", "config").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("view", "GET") => routes::compare::handle_view_get(query),
            ("slider", "GET") => routes::compare::handle_slider_get(query),
            ("metrics", "GET") => routes::compare::handle_metrics_get(query),
            ("asset", "GET") => routes::compare::handle_asset_get(query),
            ("state", "GET") => routes::compare::handle_state_get(query),
            ("config", "GET") => routes::compare::handle_config_get(query),

            ("category", "POST") => routes::compare::handle_category_post(body),
            ("left", "POST") => routes::compare::handle_left_post(body),
            ("right", "POST") => routes::compare::handle_right_post(body),
            ("reset", "POST") => routes::compare::handle_reset_post(body),
            ("config", "POST") => routes::compare::handle_config_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-compare-red">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-compare-red">405 — method not allowed</span>"#.to_string()
}
