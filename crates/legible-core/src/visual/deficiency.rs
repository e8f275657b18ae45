//! Color vision deficiency simulation.
//!
//! Each deficiency is approximated by a fixed 3x3 matrix applied directly to
//! encoded sRGB channels. The simulated color is blended with the input by
//! the stage strength, so `0` leaves the input alone and `1` gives the full
//! matrix transform.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::color_management::color_space::ColorMatrix;
use crate::visual::stages::clamp_channel;

/// Reduced red cone response.
const PROTANOPIA: ColorMatrix = ColorMatrix([
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
]);

/// Reduced green cone response.
const DEUTERANOPIA: ColorMatrix = ColorMatrix([
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
]);

/// Reduced blue cone response.
const TRITANOPIA: ColorMatrix = ColorMatrix([
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
]);

/// Simulated color vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl Deficiency {
    /// All deficiencies in pipeline order.
    pub const ALL: [Self; 3] = [Self::Protanopia, Self::Deuteranopia, Self::Tritanopia];

    pub const fn matrix(self) -> &'static ColorMatrix {
        match self {
            Self::Protanopia => &PROTANOPIA,
            Self::Deuteranopia => &DEUTERANOPIA,
            Self::Tritanopia => &TRITANOPIA,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
        }
    }
}

/// Blend `rgb` toward its simulated appearance on the `0..=255` scale.
///
/// ```text
/// sim = clamp(M × in)
/// out = clamp(in × (1 − strength) + sim × strength)
/// ```
///
/// Skipped when `strength <= 0` (or NaN).
pub fn simulate_deficiency_channels(
    rgb: [f64; 3],
    deficiency: Deficiency,
    strength: f64,
) -> [f64; 3] {
    if strength.is_nan() || strength <= 0.0 {
        return rgb;
    }
    let simulated = deficiency.matrix().apply(rgb).map(clamp_channel);

    let mut out = [0.0_f64; 3];
    for c in 0..3 {
        out[c] = clamp_channel(rgb[c] * (1.0 - strength) + simulated[c] * strength);
    }
    out
}

/// Simulate a deficiency on an 8-bit color.
pub fn simulate_color_deficiency(rgb: Rgb, deficiency: Deficiency, strength: f64) -> Rgb {
    Rgb::from_channels(simulate_deficiency_channels(
        rgb.to_channels(),
        deficiency,
        strength,
    ))
}
