//! Transfer function (OETF/EOTF) implementations for sRGB encodings.
//!
//! Transfer functions convert between non-linear (encoded) and linear light
//! values. Two variants of the sRGB curve are in use: the IEC 61966-2-1
//! breakpoint for color space conversion, and the older breakpoint that WCAG
//! 2.x specifies for relative luminance.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        if encoded <= 0.04045 {
            encoded / 12.92
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4)
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        if linear <= 0.0031308 {
            linear * 12.92
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        }
    }
}

// ---------------------------------------------------------------------------
// WCAG 2.x relative luminance curve
// ---------------------------------------------------------------------------

/// sRGB curve with the 0.03928 breakpoint from the WCAG 2.x definition of
/// relative luminance.
///
/// ```text
/// to_linear:   V <= 0.03928 → V / 12.92
///              V >  0.03928 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <= 0.03928 / 12.92 → L × 12.92
///              otherwise           → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WcagTransfer;

impl WcagTransfer {
    const CUT_ENCODED: f64 = 0.03928;
    const CUT_LINEAR: f64 = Self::CUT_ENCODED / 12.92;
}

impl TransferFunction for WcagTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        if encoded <= Self::CUT_ENCODED {
            encoded / 12.92
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4)
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        if linear <= Self::CUT_LINEAR {
            linear * 12.92
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        }
    }
}
