//! WCAG 2.x relative luminance and contrast ratio.

use crate::color::Rgb;
use crate::color_management::transfer::{TransferFunction, WcagTransfer};

/// Rec. 709 luminance weights.
const LUMA_REC709: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Flare term added to both luminances in the contrast ratio.
const FLARE: f64 = 0.05;

/// Relative luminance of an sRGB color, in `[0, 1]`.
///
/// ```text
/// L = 0.2126 × R_lin + 0.7152 × G_lin + 0.0722 × B_lin
/// ```
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = rgb.to_unit().map(|v| WcagTransfer.to_linear(v));
    linear
        .iter()
        .zip(LUMA_REC709)
        .map(|(channel, weight)| channel * weight)
        .sum()
}

/// WCAG contrast ratio in `[1, 21]`. Symmetric in its arguments.
///
/// ```text
/// ratio = (L_lighter + 0.05) / (L_darker + 0.05)
/// ```
pub fn calculate_contrast(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}
