//! Color records supplied by callers and the 8-bit sRGB value type.

use serde::{Deserialize, Serialize};

use crate::color_management::oklch::{Oklch, oklch_to_rgb};
use crate::error::{Error, Result, ensure_finite};

/// An 8-bit sRGB triple.
///
/// Always produced by clamping a computed floating value to `[0, 255]` and
/// rounding to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from fractional channels on the `0..=255` scale.
    ///
    /// Values are clamped, then rounded half away from zero. NaN maps to 0.
    pub fn from_channels(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(|v| v.clamp(0.0, 255.0).round() as u8);
        Self { r, g, b }
    }

    /// Channels as floats on the `0..=255` scale.
    pub fn to_channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Channels normalized to `0..=1`.
    pub fn to_unit(self) -> [f64; 3] {
        self.to_channels().map(|v| v / 255.0)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` string.
    pub fn to_css(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// A named OKLCH color as kept by the palette owner.
///
/// Alpha only matters for compositing when the color is displayed; none of
/// the contrast math reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: u32,
    pub name: String,
    /// Lightness, nominally `0..=1`.
    pub l: f64,
    /// Chroma, nominally `0..=0.4`.
    pub c: f64,
    /// Hue in degrees.
    pub h: f64,
    /// Opacity in `0..=1`. Absent means opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub fn new(id: u32, name: impl Into<String>, l: f64, c: f64, h: f64) -> Self {
        Self {
            id,
            name: name.into(),
            l,
            c,
            h,
            a: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = Some(alpha);
        self
    }

    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }

    pub fn oklch(&self) -> Oklch {
        Oklch::new(self.l, self.c, self.h)
    }

    /// Display color, clipped into the sRGB gamut.
    pub fn rgb(&self) -> Rgb {
        oklch_to_rgb(self.l, self.c, self.h)
    }

    /// Reject non-finite components and alpha outside `0..=1`.
    ///
    /// Out-of-range but finite `l`/`c`/`h` are accepted; the converter clips
    /// them.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("l", self.l)?;
        ensure_finite("c", self.c)?;
        ensure_finite("h", self.h)?;
        if let Some(a) = self.a {
            ensure_finite("a", a)?;
            if !(0.0..=1.0).contains(&a) {
                return Err(Error::AlphaOutOfRange(a));
            }
        }
        Ok(())
    }
}
