//! HTML fragments for the comparison view.
//!
//! Everything here is a pure function of a `Comparison` snapshot plus the
//! view config. HTMX swaps the whole `#compare-view` element after every
//! selector change, so the slider and the metrics table can never disagree
//! about which selection they show.

use crate::catalog::{CATEGORIES, Category, METHODS, Method};
use crate::config::ViewConfig;
use crate::metrics::MetricRecord;
use crate::selection::snapshot::Comparison;
use crate::selection::state::Side;

/// Escape text for use inside HTML content or a double-quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const SELECT_CLASS: &str =
    "border rounded px-2 py-1 bg-white text-sm border-black focus:border-compare-red";

fn select_open(route: &str, label: &str) -> String {
    format!(
        r##"<select name="value" aria-label="{label}" hx-post="{route}" hx-trigger="change" hx-target="#compare-view" hx-swap="outerHTML" class="{SELECT_CLASS}">"##,
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    let sel = if selected { " selected" } else { "" };
    format!(r#"<option value="{value}"{sel}>{label}</option>"#)
}

/// Noise category selector.
pub fn render_category_select(current: Category) -> String {
    let mut html = select_open("/api/compare/category", "Noise level");
    for (c, label) in CATEGORIES {
        html.push_str(&option(c.id(), label, c == current));
    }
    html.push_str("</select>");
    html
}

/// Method selector for one side of the slider.
pub fn render_method_select(side: Side, current: Method) -> String {
    let (route, aria) = match side {
        Side::Left => ("/api/compare/left", "Left image method"),
        Side::Right => ("/api/compare/right", "Right image method"),
    };
    let mut html = select_open(route, aria);
    for (m, label) in METHODS {
        html.push_str(&option(m.id(), label, m == current));
    }
    html.push_str("</select>");
    html
}

/// Metrics table. An empty row slice renders a table with an empty body.
pub fn render_metrics_table(rows: &[MetricRecord]) -> String {
    let mut html = String::with_capacity(256 + rows.len() * 192);
    html.push_str(
        r#"<table id="compare-metrics" class="table-auto border border-black border-collapse mt-4">"#,
    );
    html.push_str(r#"<thead><tr>"#);
    for head in ["Method", "PSNR", "SSIM"] {
        html.push_str(&format!(
            r#"<th scope="col" class="border border-black">{head}</th>"#
        ));
    }
    html.push_str(r#"</tr></thead><tbody>"#);
    for r in rows {
        html.push_str(&format!(
            r#"<tr class="border border-black"><th scope="row" class="border border-black px-2">{}</th><td class="border border-black px-2">{}</td><td class="border border-black px-2">{}</td></tr>"#,
            r.method, r.psnr, r.ssim
        ));
    }
    html.push_str(r#"</tbody></table>"#);
    html
}

fn render_image(path: &str, method: Method, extra: &str) -> String {
    // A missing file only marks its own <img>; the other side keeps rendering.
    format!(
        r#"<img src="{src}" alt="{alt}" draggable="false" class="absolute inset-0 w-full h-full object-contain" onerror="this.classList.add('compare-missing')"{extra}>"#,
        src = escape_html(path),
        alt = method.id(),
    )
}

/// Before/after slider. The left image is revealed from the left edge up to
/// the divider, the right image fills the rest.
pub fn render_slider(cmp: &Comparison, config: &ViewConfig) -> String {
    let start = config.slider_start.min(100);
    let mut html = String::with_capacity(1536);

    html.push_str(&format!(
        r#"<div id="compare-slider" class="relative w-full overflow-hidden select-none" style="height:{}" x-data="{{ pos: {start} }}">"#,
        escape_html(&config.slider_height),
    ));
    html.push_str(&render_image(
        cmp.path(Side::Right),
        cmp.selection.right_method,
        "",
    ));
    html.push_str(&render_image(
        cmp.path(Side::Left),
        cmp.selection.left_method,
        &format!(
            r#" style="clip-path: inset(0 {}% 0 0)" :style="`clip-path: inset(0 ${{100 - pos}}% 0 0)`""#,
            100 - start
        ),
    ));
    html.push_str(&format!(
        r#"<div class="absolute inset-y-0 w-0.5 bg-white shadow pointer-events-none" style="left:{start}%" :style="`left: ${{pos}}%`"></div>"#,
    ));
    html.push_str(&format!(
        r#"<input type="range" min="0" max="100" value="{start}" x-model.number="pos" aria-label="Comparison divider" class="absolute inset-0 w-full h-full opacity-0 cursor-ew-resize">"#,
    ));
    html.push_str("</div>");
    html
}

/// The complete comparison view: selectors, metrics table and slider.
pub fn render_view(cmp: &Comparison, config: &ViewConfig) -> String {
    let mut html = String::with_capacity(8192);

    html.push_str(r#"<div id="compare-view" class="relative min-h-screen">"#);

    // Side column: category + metrics
    html.push_str(r#"<aside class="absolute top-0 left-0 h-screen">"#);
    html.push_str(r#"<div class="h-full flex flex-col justify-center px-8">"#);
    html.push_str(&render_category_select(cmp.selection.category));
    html.push_str(&render_metrics_table(cmp.metrics));
    html.push_str("</div></aside>");

    // Main column: title, method pickers, slider
    html.push_str(r#"<main class="flex flex-col items-center py-8">"#);
    html.push_str(&format!(
        r#"<h1 class="text-4xl font-bold mb-4" title="{}">{}</h1>"#,
        escape_html(&config.description),
        escape_html(&config.title),
    ));
    html.push_str(r#"<div class="flex gap-x-4 mb-4">"#);
    html.push_str(&render_method_select(Side::Left, cmp.selection.left_method));
    html.push_str(&render_method_select(Side::Right, cmp.selection.right_method));
    html.push_str("</div>");
    html.push_str(&render_slider(cmp, config));
    html.push_str("</main></div>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetLayout;
    use crate::metrics::metrics_for;
    use crate::selection::state::Selection;

    fn default_cmp() -> Comparison {
        Comparison::derive(Selection::default(), &AssetLayout::DEFAULT)
    }

    #[test]
    fn escape_html_works() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn category_select_marks_current() {
        let html = render_category_select(Category::Min);
        assert!(html.contains(r#"<option value="min" selected>Minimum</option>"#));
        assert!(html.contains(r#"<option value="max">Maximum</option>"#));
        assert_eq!(html.matches("<option").count(), 3);
        assert!(html.contains(r#"hx-post="/api/compare/category""#));
    }

    #[test]
    fn method_select_lists_catalog() {
        let html = render_method_select(Side::Right, Method::UformerTuned);
        assert_eq!(html.matches("<option").count(), 9);
        assert!(html.contains(r#"<option value="uformer-tuned" selected>Uformer Tuned</option>"#));
        assert!(html.contains(r#"hx-post="/api/compare/right""#));
        assert_eq!(html.matches(" selected").count(), 1);
    }

    #[test]
    fn metrics_table_rows() {
        let html = render_metrics_table(metrics_for("min"));
        assert_eq!(html.matches("<tr class=").count(), 8);
        assert!(html.contains(r#"Baseline</th><td class="border border-black px-2">32.33</td><td class="border border-black px-2">0.829</td>"#));
    }

    #[test]
    fn metrics_table_empty_body() {
        let html = render_metrics_table(&[]);
        assert!(html.contains("<tbody></tbody>"));
        assert!(html.contains("PSNR"));
    }

    #[test]
    fn slider_has_both_images() {
        let html = render_slider(&default_cmp(), &ViewConfig::default());
        assert!(html.contains(r#"src="/pengcit/comparison/average_noisy.jpg" alt="noisy""#));
        assert!(html.contains(r#"src="/pengcit/comparison/average_uformer-tuned.jpg" alt="uformer-tuned""#));
        assert!(html.contains("height:80vh"));
        assert!(html.contains("{ pos: 50 }"));
        assert_eq!(html.matches("onerror=").count(), 2);
    }

    #[test]
    fn slider_start_position() {
        let config = ViewConfig {
            slider_start: 30,
            ..ViewConfig::default()
        };
        let html = render_slider(&default_cmp(), &config);
        assert!(html.contains("inset(0 70% 0 0)"));
        assert!(html.contains(r#"value="30""#));
    }

    #[test]
    fn view_contains_all_parts() {
        let html = render_view(&default_cmp(), &ViewConfig::default());
        assert!(html.starts_with(r#"<div id="compare-view""#));
        assert!(html.contains("Doki-Doki Denoising"));
        assert_eq!(html.matches("<select").count(), 3);
        assert!(html.contains(r#"id="compare-metrics""#));
        assert!(html.contains(r#"id="compare-slider""#));
        assert!(html.contains("37.19"));
    }

    #[test]
    fn view_escapes_config_text() {
        let config = ViewConfig {
            title: "<script>x</script>".to_string(),
            ..ViewConfig::default()
        };
        let html = render_view(&default_cmp(), &config);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
