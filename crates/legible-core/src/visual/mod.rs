//! Visual adjustment pipeline: simulated viewing conditions.
//!
//! ```text
//!   Rgb ──→ Gamma ──→ Contrast ──→ Protanopia ──→ Deuteranopia ──→ Tritanopia ──→ round ──→ Rgb
//! ```

pub mod deficiency;
pub mod params;
pub mod pipeline;
pub mod stages;
