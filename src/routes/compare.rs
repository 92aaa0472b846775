//! `/api/compare/*` routes — selection changes and the fragments derived
//! from them.
//!
//! Every setter returns the full re-rendered view so HTMX can replace
//! `#compare-view` in one swap.

use crate::assets::asset_path;
use crate::config::{self, with_config};
use crate::error::{CompareError, Result};
use crate::metrics::metrics_for;
use crate::render;
use crate::routes::util::{get_param, parse_form_body, parse_query};
use crate::selection::snapshot::Comparison;
use crate::selection::state::{self, Selection, Side};

fn error_fragment(err: &CompareError) -> String {
    format!(
        r#"<span class="text-compare-red">{}</span>"#,
        render::escape_html(&err.to_string())
    )
}

fn comparison(selection: Selection) -> Comparison {
    with_config(|c| Comparison::derive(selection, &c.layout()))
}

fn render_view_for(selection: Selection) -> String {
    let cmp = comparison(selection);
    with_config(|c| render::render_view(&cmp, c))
}

/// Pull `value` out of a setter body.
fn form_value(body: &str) -> Result<String> {
    let params = parse_form_body(body);
    match get_param(&params, "value") {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(CompareError::MissingParam("value")),
    }
}

fn apply<F>(body: &str, setter: F) -> String
where
    F: FnOnce(&str) -> Result<Selection>,
{
    match form_value(body).and_then(|v| setter(&v)) {
        Ok(selection) => render_view_for(selection),
        Err(e) => error_fragment(&e),
    }
}

// ── GET /api/compare ───────────────────────────────────────────────

/// Handle GET /api/compare
/// Returns the full comparison view for the current selection.
pub fn handle_view_get(_query: &str) -> String {
    render_view_for(state::current())
}

// ── GET /api/compare/slider ────────────────────────────────────────

pub fn handle_slider_get(_query: &str) -> String {
    let cmp = comparison(state::current());
    with_config(|c| render::render_slider(&cmp, c))
}

// ── GET /api/compare/metrics ───────────────────────────────────────

/// Handle GET /api/compare/metrics?category={id}
/// Without `category` the current selection's category is used. Ids that are
/// not in the metrics table produce an empty table body.
pub fn handle_metrics_get(query: &str) -> String {
    let params = parse_query(query);
    match get_param(&params, "category") {
        Some(id) if !id.is_empty() => render::render_metrics_table(metrics_for(id)),
        _ => render::render_metrics_table(comparison(state::current()).metrics),
    }
}

// ── GET /api/compare/asset ─────────────────────────────────────────

/// Handle GET /api/compare/asset?category={id}&method={id}
/// Returns the bare image path. Ids are not checked against the catalogs.
pub fn handle_asset_get(query: &str) -> String {
    let params = parse_query(query);
    let current = state::current();
    let category = get_param(&params, "category")
        .filter(|s| !s.is_empty())
        .unwrap_or(current.category.id());
    let method = match get_param(&params, "method").filter(|s| !s.is_empty()) {
        Some(m) => m,
        None => {
            let side = match get_param(&params, "side") {
                Some("right") => Side::Right,
                _ => Side::Left,
            };
            current.method(side).id()
        }
    };
    with_config(|c| asset_path(&c.layout(), category, method))
}

// ── GET /api/compare/state ─────────────────────────────────────────

/// Handle GET /api/compare/state
/// JSON: the selection plus both derived image paths.
pub fn handle_state_get(_query: &str) -> String {
    let cmp = comparison(state::current());
    serde_json::to_string(&cmp.to_state()).unwrap_or_else(|_| "{}".to_string())
}

// ── POST /api/compare/{category,left,right} ────────────────────────

/// Handle POST /api/compare/category with body `value={categoryId}`.
pub fn handle_category_post(body: &str) -> String {
    apply(body, state::set_category)
}

pub fn handle_left_post(body: &str) -> String {
    apply(body, state::set_left_method)
}

pub fn handle_right_post(body: &str) -> String {
    apply(body, state::set_right_method)
}

// ── POST /api/compare/reset ────────────────────────────────────────

pub fn handle_reset_post(_body: &str) -> String {
    render_view_for(state::reset_selection())
}

// ── GET /api/compare/config ────────────────────────────────────────

/// Handle GET /api/compare/config
/// Returns the active view config as JSON.
pub fn handle_config_get(_query: &str) -> String {
    config::export_config_json()
}

// ── POST /api/compare/config ───────────────────────────────────────

/// Handle POST /api/compare/config
/// Body is a JSON `ViewConfig`; omitted fields take their defaults.
pub fn handle_config_post(body: &str) -> String {
    match config::configure_json(body) {
        Ok(()) => r#"<span class="text-emerald-600">View config updated.</span>"#.to_string(),
        Err(e) => error_fragment(&e),
    }
}
