//! Legible Core: color science for accessibility checks.
//!
//! This crate contains the OKLCH/sRGB conversions, WCAG luminance and
//! contrast math, the visual adjustment pipeline (gamma, contrast, color
//! vision deficiency simulation), perceptual difference metrics and the
//! compliance classification built on top of them. Every operation is a pure
//! function over value inputs. No I/O.

pub mod ambient;
pub mod analysis;
pub mod color;
pub mod color_management;
pub mod contrast;
pub mod error;
pub mod perceptual;
pub mod visual;

// Re-exports for convenience.
pub use ambient::{AmbientResult, DEFAULT_AMBIENT_PRESETS, evaluate_ambient_variants};
pub use analysis::{PairReport, analyze_grid};
pub use color::{Color, Rgb};
pub use color_management::oklch::{Oklab, Oklch, oklch_to_rgb, rgb_to_oklch};
pub use contrast::compliance::{
    ContrastVerdict, ICON_CONTRAST_THRESHOLD, NON_TEXT_CONTRAST_THRESHOLD, SimulationSummary,
    check_icon_contrast, check_non_text_contrast, simulate_and_check,
};
pub use contrast::luminance::{calculate_contrast, relative_luminance};
pub use error::{Error, Result};
pub use perceptual::delta_e::{DeltaE, DeltaLabel, delta_e_oklch};
pub use perceptual::vibration::check_chromatic_vibration;
pub use visual::deficiency::{Deficiency, simulate_color_deficiency};
pub use visual::params::{PartialVisualConfig, VisualConfig};
pub use visual::pipeline::apply_visual_config;
