//! 3x3 matrix transforms and the OKLab basis tables.
//!
//! # Reference
//! Björn Ottosson, "A perceptual color space for image processing" (2020)

use glam::{DMat3, DVec3};

/// A row-major 3x3 color matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    /// Returns the identity matrix (no-op transform).
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Apply this matrix to a triple.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        (self.to_mat3() * DVec3::from_array(v)).to_array()
    }

    /// The matrix as a column-major `glam` matrix.
    pub fn to_mat3(&self) -> DMat3 {
        DMat3::from_cols_array_2d(&self.0).transpose()
    }
}

/// Linear sRGB to LMS cone response.
pub const LMS_FROM_LINEAR_SRGB: ColorMatrix = ColorMatrix([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted LMS (`L'M'S'`) to OKLab.
pub const OKLAB_FROM_LMS_PRIME: ColorMatrix = ColorMatrix([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// OKLab to cube-rooted LMS (`L'M'S'`).
pub const LMS_PRIME_FROM_OKLAB: ColorMatrix = ColorMatrix([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS cone response to linear sRGB.
pub const LINEAR_SRGB_FROM_LMS: ColorMatrix = ColorMatrix([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);
