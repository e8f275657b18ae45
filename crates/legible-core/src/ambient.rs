//! Worst-case contrast under ambient and display variation.
//!
//! Each preset is a partial viewing condition, resolved against the identity
//! defaults, applied to both colors, and scored with the WCAG contrast ratio.
//! The result is the minimum over all presets, never an average.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::contrast::luminance::calculate_contrast;
use crate::visual::params::PartialVisualConfig;
use crate::visual::pipeline::apply_visual_config;

/// Worst-case contrast needed to call a pair robust.
pub const AMBIENT_PASS_THRESHOLD: f64 = 3.0;

/// Dim/washed-out display, punchy display, and slight glare.
///
/// A preset with `contrast = 0` is deliberately absent: it flattens every
/// pair to a ratio of 1 and says nothing about the pair itself.
pub const DEFAULT_AMBIENT_PRESETS: [PartialVisualConfig; 3] = [
    PartialVisualConfig::display(0.8, 0.8),
    PartialVisualConfig::display(1.2, 1.2),
    PartialVisualConfig::display(1.0, 0.9),
];

/// Lowest contrast found and the preset that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbientResult {
    pub worst_contrast: f64,
    /// `None` when no presets were evaluated.
    pub worst_variant: Option<PartialVisualConfig>,
}

impl AmbientResult {
    pub fn passes(&self) -> bool {
        self.worst_contrast >= AMBIENT_PASS_THRESHOLD
    }
}

/// Find the preset under which `fg` on `bg` has the least contrast.
///
/// Ties keep the earliest preset. With no presets the unmodified contrast is
/// returned and `worst_variant` is `None`.
pub fn evaluate_ambient_variants(
    fg: Rgb,
    bg: Rgb,
    presets: &[PartialVisualConfig],
) -> AmbientResult {
    let mut worst = AmbientResult {
        worst_contrast: calculate_contrast(fg, bg),
        worst_variant: None,
    };
    if presets.is_empty() {
        return worst;
    }

    worst.worst_contrast = f64::INFINITY;
    for preset in presets {
        let config = preset.resolve();
        let contrast = calculate_contrast(
            apply_visual_config(fg, Some(&config)),
            apply_visual_config(bg, Some(&config)),
        );
        if contrast < worst.worst_contrast {
            worst.worst_contrast = contrast;
            worst.worst_variant = Some(*preset);
        }
    }

    tracing::trace!(
        worst_contrast = worst.worst_contrast,
        presets = presets.len(),
        "ambient evaluation finished"
    );
    worst
}
