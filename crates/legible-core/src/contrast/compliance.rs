//! WCAG 2.x pass/fail buckets.
//!
//! Text contrast is graded AA/AAA for normal and large text. Non-text
//! elements (UI component boundaries) and icons use a single 3:1 threshold.
//! Checks on the unmodified pair and on the visually simulated pair are
//! reported side by side and never merged.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::contrast::luminance::calculate_contrast;
use crate::visual::params::VisualConfig;
use crate::visual::pipeline::apply_visual_config;

/// AA, normal text (SC 1.4.3).
pub const AA_NORMAL_THRESHOLD: f64 = 4.5;
/// AA, large text (SC 1.4.3).
pub const AA_LARGE_THRESHOLD: f64 = 3.0;
/// AAA, normal text (SC 1.4.6).
pub const AAA_NORMAL_THRESHOLD: f64 = 7.0;
/// AAA, large text (SC 1.4.6).
pub const AAA_LARGE_THRESHOLD: f64 = 4.5;

/// Non-text contrast (SC 1.4.11).
pub const NON_TEXT_CONTRAST_THRESHOLD: f64 = 3.0;
/// Icons and graphical objects. Same rule as non-text, kept separate for
/// call-site clarity.
pub const ICON_CONTRAST_THRESHOLD: f64 = 3.0;

/// Pass flags for one conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCompliance {
    pub normal: bool,
    pub large: bool,
}

/// Contrast ratio with its AA/AAA classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastVerdict {
    pub contrast: f64,
    pub aa: TextCompliance,
    pub aaa: TextCompliance,
}

impl ContrastVerdict {
    pub fn from_contrast(contrast: f64) -> Self {
        Self {
            contrast,
            aa: TextCompliance {
                normal: contrast >= AA_NORMAL_THRESHOLD,
                large: contrast >= AA_LARGE_THRESHOLD,
            },
            aaa: TextCompliance {
                normal: contrast >= AAA_NORMAL_THRESHOLD,
                large: contrast >= AAA_LARGE_THRESHOLD,
            },
        }
    }

    pub fn for_pair(fg: Rgb, bg: Rgb) -> Self {
        Self::from_contrast(calculate_contrast(fg, bg))
    }
}

/// Whether a non-text element meets `threshold` against its neighbor.
pub fn check_non_text_contrast(fg: Rgb, bg: Rgb, threshold: f64) -> bool {
    calculate_contrast(fg, bg) >= threshold
}

/// Whether an icon meets `threshold` against its background.
pub fn check_icon_contrast(fg: Rgb, bg: Rgb, threshold: f64) -> bool {
    calculate_contrast(fg, bg) >= threshold
}

/// Original and simulated contrast for a pair under one viewing condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub original_contrast: f64,
    pub simulated_contrast: f64,
    /// Simulated contrast meets the caller's threshold.
    pub simulated_pass: bool,
    #[serde(rename = "simulatedPassAA")]
    pub simulated_pass_aa: bool,
    #[serde(rename = "simulatedPassAAA")]
    pub simulated_pass_aaa: bool,
}

/// Run both colors through `config` and grade the simulated contrast.
///
/// Without a config the simulated values equal the original ones.
pub fn simulate_and_check(
    fg: Rgb,
    bg: Rgb,
    config: Option<&VisualConfig>,
    threshold: f64,
) -> SimulationSummary {
    let original_contrast = calculate_contrast(fg, bg);
    let simulated_contrast = match config {
        Some(config) => calculate_contrast(
            apply_visual_config(fg, Some(config)),
            apply_visual_config(bg, Some(config)),
        ),
        None => original_contrast,
    };

    SimulationSummary {
        original_contrast,
        simulated_contrast,
        simulated_pass: simulated_contrast >= threshold,
        simulated_pass_aa: simulated_contrast >= AA_NORMAL_THRESHOLD,
        simulated_pass_aaa: simulated_contrast >= AAA_NORMAL_THRESHOLD,
    }
}
