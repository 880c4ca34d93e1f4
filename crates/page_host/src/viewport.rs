//! Viewport-intersection sample models shared by the reveal registry and browser observers.

use serde::{Deserialize, Serialize};

/// DOM attribute carrying the [`RevealKey`] of an observed element.
pub const REVEAL_KEY_ATTRIBUTE: &str = "data-reveal-key";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identity of one element registered for reveal-on-scroll.
pub struct RevealKey(pub u64);

impl RevealKey {
    /// Returns the attribute value used to tag the element in the DOM.
    pub fn attribute_value(self) -> String {
        self.0.to_string()
    }

    /// Parses an attribute value written by [`RevealKey::attribute_value`].
    pub fn from_attribute_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// One intersection observation for a registered element.
pub struct ViewportSample {
    /// Element the sample belongs to.
    pub key: RevealKey,
    /// Visible share of the element in `0.0..=1.0`.
    pub ratio: f64,
    /// Whether the host reports the element as intersecting the viewport.
    pub intersecting: bool,
}

/// Returns whether a sample is visible enough to reveal its element.
pub fn reveal_threshold_reached(sample: &ViewportSample, threshold: f64) -> bool {
    sample.intersecting && sample.ratio >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ratio: f64, intersecting: bool) -> ViewportSample {
        ViewportSample {
            key: RevealKey(1),
            ratio,
            intersecting,
        }
    }

    #[test]
    fn threshold_requires_intersection_and_ratio() {
        assert!(reveal_threshold_reached(&sample(0.1, true), 0.1));
        assert!(!reveal_threshold_reached(&sample(0.0999999, true), 0.1));
        assert!(!reveal_threshold_reached(&sample(0.05, true), 0.1));
        assert!(!reveal_threshold_reached(&sample(0.5, false), 0.1));
    }

    #[test]
    fn reveal_key_attribute_round_trip() {
        assert_eq!(
            RevealKey::from_attribute_value(&RevealKey(42).attribute_value()),
            Some(RevealKey(42))
        );
        assert_eq!(RevealKey::from_attribute_value("nope"), None);
    }
}
