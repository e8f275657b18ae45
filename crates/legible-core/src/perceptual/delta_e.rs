//! ΔE as Euclidean distance in OKLab.
//!
//! Raw distances are normalized against the black↔white distance so that
//! the result lands roughly in `[0, 1]`, then bucketed:
//!
//! ```text
//! normalized <  0.05 → VerySimilar  (fails)
//! normalized <  0.2  → Similar      (warning, fails)
//! otherwise          → Distinct     (passes)
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::color_management::oklch::rgb_to_oklch;

/// Upper bound of the "very similar" bucket.
pub const VERY_SIMILAR_THRESHOLD: f64 = 0.05;
/// Upper bound of the "similar" bucket; also the distinctness pass mark.
pub const SIMILAR_THRESHOLD: f64 = 0.2;

/// Euclidean distance between two colors in OKLab.
pub fn delta_e_oklch(a: Rgb, b: Rgb) -> f64 {
    let a = rgb_to_oklch(a).to_oklab();
    let b = rgb_to_oklch(b).to_oklab();
    a.distance(b)
}

/// ΔE between black and white, the normalization reference.
///
/// Falls back to 1 if the reference distance is not positive.
pub fn reference_delta_e() -> f64 {
    let max = delta_e_oklch(Rgb::BLACK, Rgb::WHITE);
    if max > 0.0 { max } else { 1.0 }
}

/// Qualitative bucket for a normalized ΔE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeltaLabel {
    VerySimilar,
    Similar,
    Distinct,
}

impl DeltaLabel {
    pub fn classify(normalized: f64) -> Self {
        if normalized < VERY_SIMILAR_THRESHOLD {
            Self::VerySimilar
        } else if normalized < SIMILAR_THRESHOLD {
            Self::Similar
        } else {
            Self::Distinct
        }
    }

    /// Human-readable label for UI badges.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VerySimilar => "Very similar",
            Self::Similar => "Similar",
            Self::Distinct => "Distinct",
        }
    }
}

/// Raw and normalized ΔE for a pair, with its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaE {
    pub value: f64,
    pub normalized: f64,
    pub label: DeltaLabel,
}

impl DeltaE {
    pub fn between(a: Rgb, b: Rgb) -> Self {
        Self::from_value(delta_e_oklch(a, b))
    }

    pub fn from_value(value: f64) -> Self {
        let normalized = value / reference_delta_e();
        Self {
            value,
            normalized,
            label: DeltaLabel::classify(normalized),
        }
    }

    /// Distinct enough to tell apart without relying on contrast alone.
    pub fn passes(&self) -> bool {
        self.normalized >= SIMILAR_THRESHOLD
    }
}

/// Calibration pairs shown next to a pair's ΔE.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaReferences {
    #[serde(rename = "deltaBW")]
    pub black_white: f64,
    #[serde(rename = "deltaBG")]
    pub blue_green: f64,
    #[serde(rename = "deltaBWNorm")]
    pub black_white_normalized: f64,
    #[serde(rename = "deltaBGNorm")]
    pub blue_green_normalized: f64,
}

impl DeltaReferences {
    pub fn compute() -> Self {
        let max = reference_delta_e();
        let black_white = delta_e_oklch(Rgb::BLACK, Rgb::WHITE);
        let blue_green = delta_e_oklch(Rgb::new(0, 0, 255), Rgb::new(0, 255, 0));
        Self {
            black_white,
            blue_green,
            black_white_normalized: black_white / max,
            blue_green_normalized: blue_green / max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_delta_identical_is_zero() {
        for rgb in [Rgb::BLACK, Rgb::WHITE, Rgb::new(10, 200, 30)] {
            assert!(delta_e_oklch(rgb, rgb).abs() < EPSILON);
        }
    }

    #[test]
    fn test_delta_is_symmetric() {
        let a = Rgb::new(200, 30, 30);
        let b = Rgb::new(30, 30, 200);
        assert!((delta_e_oklch(a, b) - delta_e_oklch(b, a)).abs() < EPSILON);
    }

    #[test]
    fn test_black_white_reference_is_unit_lightness() {
        // Both are achromatic, so the distance is the lightness gap.
        assert!((reference_delta_e() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_label_buckets() {
        assert_eq!(DeltaLabel::classify(0.0), DeltaLabel::VerySimilar);
        assert_eq!(DeltaLabel::classify(0.049), DeltaLabel::VerySimilar);
        assert_eq!(DeltaLabel::classify(0.05), DeltaLabel::Similar);
        assert_eq!(DeltaLabel::classify(0.199), DeltaLabel::Similar);
        assert_eq!(DeltaLabel::classify(0.2), DeltaLabel::Distinct);
    }

    #[test]
    fn test_black_white_is_distinct() {
        let d = DeltaE::between(Rgb::BLACK, Rgb::WHITE);
        assert!((d.normalized - 1.0).abs() < EPSILON);
        assert_eq!(d.label, DeltaLabel::Distinct);
        assert!(d.passes());
    }

    #[test]
    fn test_near_duplicate_fails() {
        let d = DeltaE::between(Rgb::new(100, 100, 100), Rgb::new(102, 100, 100));
        assert_eq!(d.label, DeltaLabel::VerySimilar);
        assert!(!d.passes());
    }

    #[test]
    fn test_references_normalize_black_white_to_one() {
        let refs = DeltaReferences::compute();
        assert!((refs.black_white_normalized - 1.0).abs() < EPSILON);
        assert!(refs.blue_green > 0.0);
        assert!(refs.blue_green_normalized > SIMILAR_THRESHOLD);
    }
}
