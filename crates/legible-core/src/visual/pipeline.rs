//! Full pipeline evaluation for a single color.

use crate::color::Rgb;
use crate::visual::params::VisualConfig;

/// Apply a viewing condition to one color.
///
/// Runs the stages from [`VisualConfig::stages`] in order:
/// 1. Gamma
/// 2. Contrast
/// 3. Protanopia
/// 4. Deuteranopia
/// 5. Tritanopia
///
/// Intermediate values stay fractional; the result is rounded once at the
/// end. An absent config is the identity.
pub fn apply_visual_config(rgb: Rgb, config: Option<&VisualConfig>) -> Rgb {
    let Some(config) = config else {
        return rgb;
    };
    let channels = config
        .stages()
        .into_iter()
        .fold(rgb.to_channels(), |acc, stage| stage.apply(acc));
    Rgb::from_channels(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::deficiency::{Deficiency, simulate_color_deficiency};
    use crate::visual::stages::{apply_contrast, apply_gamma};

    #[test]
    fn test_none_is_identity() {
        let rgb = Rgb::new(12, 200, 99);
        assert_eq!(apply_visual_config(rgb, None), rgb);
    }

    #[test]
    fn test_identity_config_is_exact() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let rgb = Rgb::new(r, g, b);
                    assert_eq!(apply_visual_config(rgb, Some(&VisualConfig::IDENTITY)), rgb);
                }
            }
        }
    }

    #[test]
    fn test_single_deficiency_matches_direct_simulation() {
        let rgb = Rgb::new(220, 40, 90);
        let config = VisualConfig {
            deuteranopia: 0.6,
            ..VisualConfig::default()
        };
        assert_eq!(
            apply_visual_config(rgb, Some(&config)),
            simulate_color_deficiency(rgb, Deficiency::Deuteranopia, 0.6)
        );
    }

    #[test]
    fn test_gamma_runs_before_contrast() {
        let rgb = Rgb::new(64, 64, 64);
        let config = VisualConfig {
            gamma: 2.0,
            contrast: 1.5,
            ..VisualConfig::default()
        };
        let expected = Rgb::from_channels(apply_contrast(apply_gamma(rgb.to_channels(), 2.0), 1.5));
        let reversed = Rgb::from_channels(apply_gamma(apply_contrast(rgb.to_channels(), 1.5), 2.0));
        assert_eq!(apply_visual_config(rgb, Some(&config)), expected);
        assert_ne!(expected, reversed);
    }

    #[test]
    fn test_flat_contrast_yields_mid_gray() {
        let config = VisualConfig {
            contrast: 0.0,
            ..VisualConfig::default()
        };
        assert_eq!(
            apply_visual_config(Rgb::new(3, 140, 255), Some(&config)),
            Rgb::new(128, 128, 128)
        );
    }
}
