//! Color management: matrices, transfer functions and the OKLCH converter.

pub mod color_space;
pub mod oklch;
pub mod transfer;
