//! Perceptual difference metrics in OKLab.

pub mod delta_e;
pub mod vibration;
