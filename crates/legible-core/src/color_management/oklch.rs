//! OKLCH ↔ 8-bit sRGB conversion.
//!
//! ```text
//!   OKLCH ──polar→cartesian──→ OKLab ──M2⁻¹──→ L'M'S' ──cube──→ LMS
//!         ──M1⁻¹──→ linear sRGB ──OETF──→ clamp [0,1] ──×255, round──→ Rgb
//! ```
//!
//! The inverse path linearizes with the sRGB EOTF, takes cube roots in LMS
//! and converts the OKLab result back to polar form. Chroma outside the sRGB
//! gamut is clipped per channel; there is no gamut mapping.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::color_management::color_space::{
    LINEAR_SRGB_FROM_LMS, LMS_FROM_LINEAR_SRGB, LMS_PRIME_FROM_OKLAB, OKLAB_FROM_LMS_PRIME,
};
use crate::color_management::transfer::{SrgbTransfer, TransferFunction};

/// Polar OKLab: lightness, chroma, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Cartesian OKLab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// `a = c·cos(h)`, `b = c·sin(h)`.
    pub fn to_oklab(self) -> Oklab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Oklab {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        self.to_oklab().to_rgb()
    }
}

impl Oklab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Polar form with hue normalized into `[0, 360)`.
    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let mut h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        // A tiny negative angle can round up to exactly 360 above.
        if h >= 360.0 {
            h -= 360.0;
        }
        Oklch { l: self.l, c, h }
    }

    /// Euclidean distance in OKLab.
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Linear-light sRGB, unclamped.
    pub fn to_linear_srgb(self) -> [f64; 3] {
        let lms = LMS_PRIME_FROM_OKLAB
            .apply([self.l, self.a, self.b])
            .map(|v| v * v * v);
        LINEAR_SRGB_FROM_LMS.apply(lms)
    }

    /// Linear-light sRGB to OKLab.
    pub fn from_linear_srgb(linear: [f64; 3]) -> Self {
        let lms = LMS_FROM_LINEAR_SRGB.apply(linear).map(f64::cbrt);
        let [l, a, b] = OKLAB_FROM_LMS_PRIME.apply(lms);
        Self { l, a, b }
    }

    pub fn to_rgb(self) -> Rgb {
        let encoded = self
            .to_linear_srgb()
            .map(|v| SrgbTransfer.to_encoded(v).clamp(0.0, 1.0) * 255.0);
        Rgb::from_channels(encoded)
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_linear_srgb(rgb.to_unit().map(|v| SrgbTransfer.to_linear(v)))
    }
}

/// Convert OKLCH (hue in degrees) to 8-bit sRGB, clipping out-of-gamut
/// channels.
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> Rgb {
    Oklch::new(l, c, h).to_rgb()
}

/// Convert 8-bit sRGB to OKLCH with hue in `[0, 360)`.
///
/// Achromatic inputs have near-zero chroma and an arbitrary hue.
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    Oklab::from_rgb(rgb).to_oklch()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    fn assert_within_one(a: Rgb, b: Rgb) {
        let (a, b) = (a.to_channels(), b.to_channels());
        for i in 0..3 {
            assert!(
                (a[i] - b[i]).abs() <= 1.0,
                "channel {i}: {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn test_black_and_white_endpoints() {
        assert_eq!(oklch_to_rgb(0.0, 0.0, 0.0), Rgb::BLACK);
        assert_eq!(oklch_to_rgb(1.0, 0.0, 0.0), Rgb::WHITE);
    }

    #[test]
    fn test_white_has_unit_lightness_and_no_chroma() {
        let white = rgb_to_oklch(Rgb::WHITE);
        assert!((white.l - 1.0).abs() < EPSILON);
        assert!(white.c < EPSILON);
    }

    #[test]
    fn test_primary_red_known_values() {
        // Reference: oklch(62.8% 0.2577 29.23) for #ff0000
        let red = rgb_to_oklch(Rgb::new(255, 0, 0));
        assert!((red.l - 0.628).abs() < 1e-3, "l = {}", red.l);
        assert!((red.c - 0.2577).abs() < 1e-3, "c = {}", red.c);
        assert!((red.h - 29.23).abs() < 0.1, "h = {}", red.h);
    }

    #[test]
    fn test_hue_is_normalized() {
        // Blue sits at a negative atan2 angle before normalization.
        let blue = rgb_to_oklch(Rgb::new(0, 0, 255));
        assert!((0.0..360.0).contains(&blue.h));
        assert!((blue.h - 264.05).abs() < 0.1, "h = {}", blue.h);
    }

    #[test]
    fn test_out_of_gamut_chroma_clips() {
        let rgb = oklch_to_rgb(0.7, 0.4, 150.0);
        // No panic, and the clipped color is still a saturated green.
        assert!(rgb.g > rgb.r && rgb.g > rgb.b);
    }

    #[test]
    fn test_hue_wraps_modulo_360() {
        assert_eq!(oklch_to_rgb(0.6, 0.1, 30.0), oklch_to_rgb(0.6, 0.1, 390.0));
    }

    #[test]
    fn test_roundtrip_primaries_and_secondaries() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(12, 34, 56),
        ] {
            let lch = rgb_to_oklch(rgb);
            assert_within_one(oklch_to_rgb(lch.l, lch.c, lch.h), rgb);
        }
    }

    #[test]
    fn test_oklab_distance_to_self_is_zero() {
        let lab = Oklab::from_rgb(Rgb::new(40, 120, 200));
        assert_eq!(lab.distance(lab), 0.0);
    }
}
