//! Precomputed PSNR / SSIM table, keyed by noise category.
//!
//! Values are kept as display strings and rendered verbatim.

use crate::catalog::Category;

/// SSIM value shown where the metric was not measured.
pub const SSIM_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRecord {
    /// Display name of the method (not a catalog id).
    pub method: &'static str,
    pub psnr: &'static str,
    /// Decimal string or [`SSIM_PLACEHOLDER`].
    pub ssim: &'static str,
}

impl MetricRecord {
    pub fn has_ssim(&self) -> bool {
        self.ssim != SSIM_PLACEHOLDER
    }
}

const fn rec(method: &'static str, psnr: &'static str, ssim: &'static str) -> MetricRecord {
    MetricRecord { method, psnr, ssim }
}

const MIN: [MetricRecord; 8] = [
    rec("Baseline", "32.33", "0.829"),
    rec("Bilateral", "32.40", "0.884"),
    rec("NLMeans", "32.76", "0.888"),
    rec("Guided", "32.92", "0.898"),
    rec("Uformer Baseline", "32.11", "0.916"),
    rec("Uformer Tuned", "33.61", "0.922"),
    rec("Restormer Baseline", "32.73", "0.919"),
    rec("Restormer Tuned", "33.57", "0.921"),
];

const AVERAGE: [MetricRecord; 8] = [
    rec("Baseline", "36.68", SSIM_PLACEHOLDER),
    rec("Bilateral", "35.90", SSIM_PLACEHOLDER),
    rec("NLMeans", "35.96", SSIM_PLACEHOLDER),
    rec("Guided", "37.19", SSIM_PLACEHOLDER),
    rec("Uformer Baseline", "38.08", SSIM_PLACEHOLDER),
    rec("Uformer Tuned", "37.91", SSIM_PLACEHOLDER),
    rec("Restormer Baseline", "38.02", SSIM_PLACEHOLDER),
    rec("Restormer Tuned", "38.16", SSIM_PLACEHOLDER),
];

const MAX: [MetricRecord; 8] = [
    rec("Baseline", "41.00", "0.970"),
    rec("Bilateral", "41.84", "0.985"),
    rec("NLMeans", "42.03", "0.982"),
    rec("Guided", "42.84", "0.983"),
    rec("Uformer Baseline", "43.34", "0.984"),
    rec("Uformer Tuned", "44.58", "0.989"),
    rec("Restormer Baseline", "43.49", "0.984"),
    rec("Restormer Tuned", "44.49", "0.989"),
];

/// Metrics table as `(category id, rows)`.
pub static METRICS: [(&str, &[MetricRecord]); 3] =
    [("min", &MIN), ("average", &AVERAGE), ("max", &MAX)];

/// Rows for a category id. Ids missing from the table yield an empty slice.
pub fn metrics_for(category_id: &str) -> &'static [MetricRecord] {
    match METRICS.iter().find(|(id, _)| *id == category_id) {
        Some((_, rows)) => *rows,
        None => {
            tracing::warn!(category = category_id, "no metrics for category, showing empty table");
            &[]
        }
    }
}

pub fn metrics_for_category(category: Category) -> &'static [MetricRecord] {
    metrics_for(category.id())
}
