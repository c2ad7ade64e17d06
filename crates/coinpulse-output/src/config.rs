//! Renderer configuration.

use serde::{Deserialize, Serialize};

/// One-time renderer configuration.
///
/// Passed by value into every chart call instead of mutating process-wide
/// plotting state, so two charts with different settings can coexist in a
/// single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Font family used for captions and labels.
    pub font_family: String,

    /// Caption font size in points.
    pub title_font_size: u32,

    /// Axis and slice label font size in points.
    pub label_font_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            font_family: "sans-serif".to_string(),
            title_font_size: 28,
            label_font_size: 18,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sane() {
        let config = RenderConfig::default();
        assert!(config.width > 0 && config.height > 0);
        assert_eq!(config.font_family, "sans-serif");
    }
}
