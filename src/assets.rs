//! Asset path resolution for comparison images.
//!
//! Images are pre-generated as `{base}/{category}_{method}.{ext}`. Ids are
//! interpolated as given; a pair with no file behind it simply renders as a
//! broken image on that side of the slider.

use crate::catalog::{Category, Method};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLayout<'a> {
    pub base: &'a str,
    pub ext: &'a str,
}

impl AssetLayout<'static> {
    pub const DEFAULT: AssetLayout<'static> = AssetLayout {
        base: "/pengcit/comparison",
        ext: "jpg",
    };
}

impl AssetLayout<'_> {
    pub fn path(&self, category: Category, method: Method) -> String {
        asset_path(self, category.id(), method.id())
    }
}

/// Build the image path for raw category / method ids.
pub fn asset_path(layout: &AssetLayout<'_>, category_id: &str, method_id: &str) -> String {
    format!(
        "{}/{}_{}.{}",
        layout.base, category_id, method_id, layout.ext
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CATEGORIES, METHODS};

    #[test]
    fn default_layout_path() {
        let p = AssetLayout::DEFAULT.path(Category::Average, Method::Noisy);
        assert_eq!(p, "/pengcit/comparison/average_noisy.jpg");
    }

    #[test]
    fn every_pair_is_distinct_and_contains_ids() {
        let mut seen = std::collections::HashSet::new();
        for (c, _) in CATEGORIES {
            for (m, _) in METHODS {
                let p = AssetLayout::DEFAULT.path(c, m);
                assert!(p.contains(c.id()));
                assert!(p.contains(m.id()));
                assert_eq!(p, AssetLayout::DEFAULT.path(c, m));
                assert!(seen.insert(p));
            }
        }
        assert_eq!(seen.len(), 27);
    }

    #[test]
    fn raw_ids_are_not_validated() {
        let layout = AssetLayout { base: "/img", ext: "png" };
        assert_eq!(asset_path(&layout, "medium", "median"), "/img/medium_median.png");
    }

    #[test]
    fn max_restormer_tuned() {
        let p = AssetLayout::DEFAULT.path(Category::Max, Method::RestormerTuned);
        assert_eq!(p, "/pengcit/comparison/max_restormer-tuned.jpg");
    }
}
