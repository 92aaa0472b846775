//! Derived comparison output for one selection.
//!
//! Both image paths and the metrics rows are computed together from a single
//! `Selection` value; nothing here is stored between requests.

use serde::Serialize;

use crate::assets::AssetLayout;
use crate::metrics::{MetricRecord, metrics_for_category};
use crate::selection::state::{Selection, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub selection: Selection,
    pub left_path: String,
    pub right_path: String,
    pub metrics: &'static [MetricRecord],
}

impl Comparison {
    pub fn derive(selection: Selection, layout: &AssetLayout<'_>) -> Self {
        Self {
            selection,
            left_path: layout.path(selection.category, selection.left_method),
            right_path: layout.path(selection.category, selection.right_method),
            metrics: metrics_for_category(selection.category),
        }
    }

    pub fn path(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_path,
            Side::Right => &self.right_path,
        }
    }

    pub fn to_state(&self) -> ComparisonState<'_> {
        ComparisonState {
            selection: &self.selection,
            left_path: &self.left_path,
            right_path: &self.right_path,
        }
    }
}

/// JSON shape returned by `GET /api/compare/state`.
#[derive(Debug, Serialize)]
pub struct ComparisonState<'a> {
    #[serde(flatten)]
    pub selection: &'a Selection,
    pub left_path: &'a str,
    pub right_path: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Method};

    #[test]
    fn derive_default() {
        let c = Comparison::derive(Selection::default(), &AssetLayout::DEFAULT);
        assert_eq!(c.left_path, "/pengcit/comparison/average_noisy.jpg");
        assert_eq!(c.right_path, "/pengcit/comparison/average_uformer-tuned.jpg");
        assert_eq!(c.metrics.len(), 8);
        assert_eq!(c.metrics[0].ssim, "-");
    }

    #[test]
    fn derive_max_guided_vs_restormer() {
        let sel = Selection::default()
            .with_category(Category::Max)
            .with_method(Side::Left, Method::Guided)
            .with_method(Side::Right, Method::RestormerTuned);
        let c = Comparison::derive(sel, &AssetLayout::DEFAULT);
        assert_eq!(c.path(Side::Left), "/pengcit/comparison/max_guided.jpg");
        assert_eq!(c.path(Side::Right), "/pengcit/comparison/max_restormer-tuned.jpg");
        assert_eq!(c.metrics[0].psnr, "41.00");
    }

    #[test]
    fn state_json_flattens_selection() {
        let c = Comparison::derive(Selection::default(), &AssetLayout::DEFAULT);
        let json = serde_json::to_string(&c.to_state()).unwrap();
        assert!(json.contains(r#""category":"average""#));
        assert!(json.contains(r#""left_method":"noisy""#));
        assert!(json.contains(r#""right_path":"/pengcit/comparison/average_uformer-tuned.jpg""#));
    }
}
