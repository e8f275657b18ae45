//! Viewing-condition parameters.
//!
//! `VisualConfig` is the fully populated form the pipeline reads.
//! `PartialVisualConfig` is what presets and user input usually provide; it is
//! resolved against the identity defaults before anything runs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ensure_finite};
use crate::visual::deficiency::Deficiency;
use crate::visual::stages::Stage;

/// A single simulated viewing condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// Display gamma. 1.0 = neutral. Non-positive values are a pass-through.
    pub gamma: f64,
    /// Contrast stretch around mid-gray. 1.0 = neutral, 0.0 = flat gray.
    pub contrast: f64,
    /// Protanopia simulation strength in `0..=1`.
    pub protanopia: f64,
    /// Deuteranopia simulation strength in `0..=1`.
    pub deuteranopia: f64,
    /// Tritanopia simulation strength in `0..=1`.
    pub tritanopia: f64,
}

impl VisualConfig {
    /// Produces an identity (no-op) condition.
    pub const IDENTITY: Self = Self {
        gamma: 1.0,
        contrast: 1.0,
        protanopia: 0.0,
        deuteranopia: 0.0,
        tritanopia: 0.0,
    };

    /// Strength configured for one deficiency.
    pub const fn deficiency_strength(&self, deficiency: Deficiency) -> f64 {
        match deficiency {
            Deficiency::Protanopia => self.protanopia,
            Deficiency::Deuteranopia => self.deuteranopia,
            Deficiency::Tritanopia => self.tritanopia,
        }
    }

    /// The pipeline stages in application order.
    pub const fn stages(&self) -> [Stage; 5] {
        [
            Stage::Gamma(self.gamma),
            Stage::Contrast(self.contrast),
            Stage::Deficiency(Deficiency::Protanopia, self.protanopia),
            Stage::Deficiency(Deficiency::Deuteranopia, self.deuteranopia),
            Stage::Deficiency(Deficiency::Tritanopia, self.tritanopia),
        ]
    }

    /// True when every stage is a no-op.
    pub fn is_identity(&self) -> bool {
        self.stages().iter().all(|stage| stage.is_identity())
    }

    /// Reject non-finite parameters.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("gamma", self.gamma)?;
        ensure_finite("contrast", self.contrast)?;
        ensure_finite("protanopia", self.protanopia)?;
        ensure_finite("deuteranopia", self.deuteranopia)?;
        ensure_finite("tritanopia", self.tritanopia)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A viewing condition with any subset of parameters set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialVisualConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protanopia: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deuteranopia: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tritanopia: Option<f64>,
}

impl PartialVisualConfig {
    /// A gamma/contrast shift, the usual shape of an ambient preset.
    pub const fn display(gamma: f64, contrast: f64) -> Self {
        Self {
            gamma: Some(gamma),
            contrast: Some(contrast),
            protanopia: None,
            deuteranopia: None,
            tritanopia: None,
        }
    }

    /// Fill unset fields from the identity condition.
    pub fn resolve(&self) -> VisualConfig {
        let id = VisualConfig::IDENTITY;
        VisualConfig {
            gamma: self.gamma.unwrap_or(id.gamma),
            contrast: self.contrast.unwrap_or(id.contrast),
            protanopia: self.protanopia.unwrap_or(id.protanopia),
            deuteranopia: self.deuteranopia.unwrap_or(id.deuteranopia),
            tritanopia: self.tritanopia.unwrap_or(id.tritanopia),
        }
    }

    /// Reject non-finite values among the fields that are set.
    pub fn validate(&self) -> Result<()> {
        self.resolve().validate()
    }
}

impl From<VisualConfig> for PartialVisualConfig {
    fn from(config: VisualConfig) -> Self {
        Self {
            gamma: Some(config.gamma),
            contrast: Some(config.contrast),
            protanopia: Some(config.protanopia),
            deuteranopia: Some(config.deuteranopia),
            tritanopia: Some(config.tritanopia),
        }
    }
}
