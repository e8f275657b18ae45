//! Individual pipeline stages.
//!
//! Every stage maps fractional channels on the `0..=255` scale to the same
//! scale, clamps its output, and is skipped entirely at its identity
//! parameter.

use crate::visual::deficiency::{Deficiency, simulate_deficiency_channels};

/// Mid-gray pivot for the contrast stretch.
const CONTRAST_PIVOT: f64 = 128.0;

/// One step of the visual adjustment pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Display gamma.
    Gamma(f64),
    /// Contrast stretch around mid-gray.
    Contrast(f64),
    /// Color vision deficiency simulation at a strength in `0..=1`.
    Deficiency(Deficiency, f64),
}

impl Stage {
    pub fn apply(self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Gamma(gamma) => apply_gamma(rgb, gamma),
            Self::Contrast(contrast) => apply_contrast(rgb, contrast),
            Self::Deficiency(deficiency, strength) => {
                simulate_deficiency_channels(rgb, deficiency, strength)
            }
        }
    }

    /// Whether this stage leaves every input unchanged.
    pub fn is_identity(self) -> bool {
        match self {
            Self::Gamma(gamma) => gamma_is_passthrough(gamma),
            Self::Contrast(contrast) => contrast_is_passthrough(contrast),
            Self::Deficiency(_, strength) => strength.is_nan() || strength <= 0.0,
        }
    }
}

pub(crate) fn clamp_channel(v: f64) -> f64 {
    v.clamp(0.0, 255.0)
}

fn gamma_is_passthrough(gamma: f64) -> bool {
    gamma == 1.0 || !gamma.is_finite() || gamma <= 0.0
}

fn contrast_is_passthrough(contrast: f64) -> bool {
    contrast == 1.0 || !contrast.is_finite()
}

/// Apply display gamma.
///
/// ```text
/// out = 255 × (in / 255) ^ (1 / gamma)
/// ```
///
/// `gamma = 1.0` produces no change. Non-positive and non-finite gamma are a
/// pass-through.
pub fn apply_gamma(rgb: [f64; 3], gamma: f64) -> [f64; 3] {
    if gamma_is_passthrough(gamma) {
        return rgb;
    }
    rgb.map(|v| clamp_channel((v / 255.0).powf(1.0 / gamma) * 255.0))
}

/// Apply a linear contrast stretch around mid-gray.
///
/// ```text
/// out = (in − 128) × contrast + 128
/// ```
///
/// `contrast = 1.0` produces no change. `contrast = 0.0` collapses every
/// channel to 128. Negative values invert around the pivot before clamping.
pub fn apply_contrast(rgb: [f64; 3], contrast: f64) -> [f64; 3] {
    if contrast_is_passthrough(contrast) {
        return rgb;
    }
    rgb.map(|v| clamp_channel((v - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT))
}
