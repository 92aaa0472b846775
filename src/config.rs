//! View configuration — asset location and page presentation settings.
//!
//! Kept in its own `thread_local!` next to the selection. The host page may
//! replace it once at startup by posting JSON to `/api/compare/config`; any
//! field left out of the JSON keeps its default.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use crate::assets::AssetLayout;
use crate::error::{CompareError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Directory the comparison images are served from (no trailing slash).
    pub asset_base: String,
    /// Image file extension, without the dot.
    pub asset_ext: String,
    /// CSS height of the comparison slider.
    pub slider_height: String,
    /// Initial divider position in percent (0–100).
    pub slider_start: u8,
    pub title: String,
    pub description: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            asset_base: "/pengcit/comparison".to_string(),
            asset_ext: "jpg".to_string(),
            slider_height: "80vh".to_string(),
            slider_start: 50,
            title: "Doki-Doki Denoising".to_string(),
            description:
                "Image Denoising Comparison using various conventional and deep learning methods"
                    .to_string(),
        }
    }
}

impl ViewConfig {
    pub fn layout(&self) -> AssetLayout<'_> {
        AssetLayout {
            base: &self.asset_base,
            ext: &self.asset_ext,
        }
    }
}

thread_local! {
    static CONFIG: RefCell<ViewConfig> = RefCell::new(ViewConfig::default());
}

/// Execute a closure with read access to the view config.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&ViewConfig) -> R,
{
    CONFIG.with(|c| f(&c.borrow()))
}

pub fn replace_config(new_config: ViewConfig) {
    CONFIG.with(|c| {
        *c.borrow_mut() = new_config;
    });
}

/// Parse and install a config from JSON. On error the current config is kept.
pub fn configure_json(json: &str) -> Result<()> {
    let mut config: ViewConfig =
        serde_json::from_str(json).map_err(|e| CompareError::InvalidConfig(e.to_string()))?;
    config.slider_start = config.slider_start.min(100);
    while config.asset_base.ends_with('/') {
        config.asset_base.pop();
    }
    tracing::debug!(?config, "view config replaced");
    replace_config(config);
    Ok(())
}

pub fn export_config_json() -> String {
    with_config(|c| serde_json::to_string(c).unwrap_or_else(|_| "{}".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        replace_config(ViewConfig::default());
        with_config(|c| {
            assert_eq!(c.asset_base, "/pengcit/comparison");
            assert_eq!(c.asset_ext, "jpg");
            assert_eq!(c.slider_height, "80vh");
            assert_eq!(c.slider_start, 50);
        });
    }

    #[test]
    fn partial_json_keeps_defaults() {
        configure_json(r#"{"asset_base":"/img/","asset_ext":"png"}"#).unwrap();
        with_config(|c| {
            assert_eq!(c.asset_base, "/img");
            assert_eq!(c.asset_ext, "png");
            assert_eq!(c.slider_height, "80vh");
        });
        replace_config(ViewConfig::default());
    }

    #[test]
    fn slider_start_is_clamped() {
        configure_json(r#"{"slider_start":250}"#).unwrap();
        with_config(|c| assert_eq!(c.slider_start, 100));
        replace_config(ViewConfig::default());
    }

    #[test]
    fn invalid_json_keeps_previous_config() {
        replace_config(ViewConfig::default());
        let err = configure_json("not json {{").unwrap_err();
        assert!(matches!(err, CompareError::InvalidConfig(_)));
        with_config(|c| assert_eq!(*c, ViewConfig::default()));
    }

    #[test]
    fn export_contains_fields() {
        let json = export_config_json();
        assert!(json.contains("asset_base"));
        assert!(json.contains("80vh"));
    }
}
