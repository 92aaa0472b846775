//! Method and noise-category catalogs.
//!
//! Both catalogs are fixed at build time. Order matters: it is the order the
//! selectors list their options in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Target,
    Noisy,
    Nlmeans,
    Guided,
    Bilateral,
    UformerBaseline,
    UformerTuned,
    RestormerBaseline,
    RestormerTuned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Min,
    Average,
    Max,
}

/// Selectable denoising methods as `(method, display label)`.
pub const METHODS: [(Method, &str); 9] = [
    (Method::Target, "Mean"),
    (Method::Noisy, "Noisy"),
    (Method::Nlmeans, "NLMeans"),
    (Method::Guided, "Guided Filter"),
    (Method::Bilateral, "Bilateral Filter"),
    (Method::UformerBaseline, "Uformer Baseline"),
    (Method::UformerTuned, "Uformer Tuned"),
    (Method::RestormerBaseline, "Restormer Baseline"),
    (Method::RestormerTuned, "Restormer Tuned"),
];

/// Noise-level buckets as `(category, display label)`.
pub const CATEGORIES: [(Category, &str); 3] = [
    (Category::Min, "Minimum"),
    (Category::Average, "Average"),
    (Category::Max, "Maximum"),
];

impl Method {
    /// Identifier used in asset file names and form values.
    pub fn id(self) -> &'static str {
        match self {
            Method::Target => "target",
            Method::Noisy => "noisy",
            Method::Nlmeans => "nlmeans",
            Method::Guided => "guided",
            Method::Bilateral => "bilateral",
            Method::UformerBaseline => "uformer-baseline",
            Method::UformerTuned => "uformer-tuned",
            Method::RestormerBaseline => "restormer-baseline",
            Method::RestormerTuned => "restormer-tuned",
        }
    }

    pub fn label(self) -> &'static str {
        METHODS
            .iter()
            .find(|(m, _)| *m == self)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.id())
    }
}

impl Category {
    pub fn id(self) -> &'static str {
        match self {
            Category::Min => "min",
            Category::Average => "average",
            Category::Max => "max",
        }
    }

    pub fn label(self) -> &'static str {
        CATEGORIES
            .iter()
            .find(|(c, _)| *c == self)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.id())
    }
}

/// Look up a method by its catalog id. Ids are matched exactly after trimming.
pub fn parse_method(s: &str) -> Option<Method> {
    let id = s.trim();
    METHODS.iter().map(|(m, _)| *m).find(|m| m.id() == id)
}

pub fn parse_category(s: &str) -> Option<Category> {
    let id = s.trim();
    CATEGORIES.iter().map(|(c, _)| *c).find(|c| c.id() == id)
}
