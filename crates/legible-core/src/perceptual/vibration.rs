//! Chromatic vibration heuristic.
//!
//! Two saturated colors with a moderate-to-opposite hue separation tend to
//! "vibrate" at their shared edge. Close hues do not. This is an empirical
//! flag, not a calibrated perceptual model.

use crate::color::Rgb;
use crate::color_management::oklch::{Oklch, rgb_to_oklch};

/// Both colors need more chroma than this.
pub const CHROMA_VIBRATION_THRESHOLD: f64 = 0.15;
/// Smallest hue separation that vibrates, in degrees.
pub const CHROMA_VIBRATION_MIN_HUE: f64 = 30.0;
/// Largest hue separation that vibrates; complementary pairs included.
pub const CHROMA_VIBRATION_MAX_HUE: f64 = 180.0;

/// Smaller angle between two hues, in `[0, 180]` for hues in `[0, 360)`.
pub fn hue_difference(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

impl Oklch {
    /// Whether this color and `other` form a vibrating pair.
    pub fn vibrates_with(&self, other: &Self) -> bool {
        if self.c <= CHROMA_VIBRATION_THRESHOLD || other.c <= CHROMA_VIBRATION_THRESHOLD {
            return false;
        }
        let diff = hue_difference(self.h, other.h);
        (CHROMA_VIBRATION_MIN_HUE..=CHROMA_VIBRATION_MAX_HUE).contains(&diff)
    }
}

/// Flag saturated pairs whose hues sit 30°–180° apart.
pub fn check_chromatic_vibration(a: Rgb, b: Rgb) -> bool {
    rgb_to_oklch(a).vibrates_with(&rgb_to_oklch(b))
}
