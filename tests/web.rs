//! Browser smoke test: `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use denoise_compare::handle_request;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn view_renders_in_browser() {
    let html = handle_request("GET", "/api/compare", "", "");
    assert!(html.contains("average_noisy.jpg"));
}

#[wasm_bindgen_test]
fn category_change_updates_metrics() {
    let html = handle_request("POST", "/api/compare/category", "", "value=min");
    assert!(html.contains("32.33"));
    handle_request("POST", "/api/compare/reset", "", "");
}
