//! Page-level tuning values injected through [`crate::PageHostServices`].

use serde::{Deserialize, Serialize};

/// Default scroll offset (px) past which the navigation bar switches to its condensed state.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;
/// Default fraction of an element that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
/// Default fraction of the carousel's visible width moved by one scroll action.
pub const DEFAULT_CAROUSEL_PAGE_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Interaction tuning for the landing page.
pub struct PageConfig {
    /// Window scroll offset (px) that must be exceeded for the navbar "scrolled" state.
    pub scroll_threshold_px: f64,
    /// Intersection ratio in `0.0..=1.0` required to reveal an element.
    pub reveal_threshold: f64,
    /// Share of the carousel viewport width moved per scroll action.
    pub carousel_page_fraction: f64,
    /// Whether programmatic scrolling uses smooth behavior.
    pub smooth_scrolling: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            carousel_page_fraction: DEFAULT_CAROUSEL_PAGE_FRACTION,
            smooth_scrolling: true,
        }
    }
}

impl PageConfig {
    /// Returns the reveal threshold clamped into the range accepted by intersection observers.
    pub fn clamped_reveal_threshold(&self) -> f64 {
        if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{"scroll_threshold_px":24.0}"#).expect("parse config");
        assert_eq!(
            config,
            PageConfig {
                scroll_threshold_px: 24.0,
                ..PageConfig::default()
            }
        );
    }

    #[test]
    fn reveal_threshold_is_clamped() {
        let config = PageConfig {
            reveal_threshold: 3.0,
            ..PageConfig::default()
        };
        assert_eq!(config.clamped_reveal_threshold(), 1.0);

        let config = PageConfig {
            reveal_threshold: f64::NAN,
            ..PageConfig::default()
        };
        assert_eq!(config.clamped_reveal_threshold(), DEFAULT_REVEAL_THRESHOLD);
    }
}
