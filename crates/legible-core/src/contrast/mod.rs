//! WCAG luminance, contrast ratio and pass/fail classification.

pub mod compliance;
pub mod luminance;
