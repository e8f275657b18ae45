//! Everything shown for one foreground/background pair.
//!
//! `PairReport` bundles the converter, contrast, simulation, perceptual and
//! ambient results for a pair so callers can recompute it on every input
//! change and render it without further interpretation.

use serde::{Deserialize, Serialize};

use crate::ambient::{AmbientResult, DEFAULT_AMBIENT_PRESETS, evaluate_ambient_variants};
use crate::color::{Color, Rgb};
use crate::contrast::compliance::{
    ContrastVerdict, ICON_CONTRAST_THRESHOLD, NON_TEXT_CONTRAST_THRESHOLD, SimulationSummary,
    check_icon_contrast, check_non_text_contrast, simulate_and_check,
};
use crate::contrast::luminance::calculate_contrast;
use crate::perceptual::delta_e::{DeltaE, DeltaReferences};
use crate::perceptual::vibration::check_chromatic_vibration;
use crate::visual::params::VisualConfig;
use crate::visual::pipeline::apply_visual_config;

/// Analysis of a foreground color over a background color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    pub foreground_id: u32,
    pub background_id: u32,
    pub fg_rgb: Rgb,
    pub bg_rgb: Rgb,
    /// Colors after the viewing condition.
    pub fg_adj: Rgb,
    pub bg_adj: Rgb,
    /// Hex of the unadjusted colors.
    pub fg_hex: String,
    pub bg_hex: String,
    /// CSS of the adjusted colors, with each color's alpha.
    pub fg_css: String,
    pub bg_css: String,
    /// Grading of the unadjusted contrast.
    pub compliance: ContrastVerdict,
    pub contrast_original: f64,
    pub contrast_simulated: f64,
    pub non_text_original: bool,
    pub non_text_simulated: bool,
    pub icon_original: bool,
    pub icon_simulated: bool,
    pub simulated_summary: SimulationSummary,
    pub delta: DeltaE,
    pub delta_pass: bool,
    pub chromatic_vibration: bool,
    pub ambient: AmbientResult,
    pub ambient_pass: bool,
    pub examples: DeltaReferences,
}

impl PairReport {
    pub fn analyze(fg: &Color, bg: &Color, config: Option<&VisualConfig>) -> Self {
        let fg_rgb = fg.rgb();
        let bg_rgb = bg.rgb();
        let fg_adj = apply_visual_config(fg_rgb, config);
        let bg_adj = apply_visual_config(bg_rgb, config);

        let contrast_original = calculate_contrast(fg_rgb, bg_rgb);
        let contrast_simulated = calculate_contrast(fg_adj, bg_adj);

        let delta = DeltaE::between(fg_rgb, bg_rgb);
        let ambient = evaluate_ambient_variants(fg_rgb, bg_rgb, &DEFAULT_AMBIENT_PRESETS);

        tracing::debug!(
            fg = fg.id,
            bg = bg.id,
            contrast_original,
            contrast_simulated,
            worst_ambient = ambient.worst_contrast,
            "analyzed pair"
        );

        Self {
            foreground_id: fg.id,
            background_id: bg.id,
            fg_rgb,
            bg_rgb,
            fg_adj,
            bg_adj,
            fg_hex: fg_rgb.to_hex(),
            bg_hex: bg_rgb.to_hex(),
            fg_css: fg_adj.to_css(fg.alpha()),
            bg_css: bg_adj.to_css(bg.alpha()),
            compliance: ContrastVerdict::from_contrast(contrast_original),
            contrast_original,
            contrast_simulated,
            non_text_original: check_non_text_contrast(fg_rgb, bg_rgb, NON_TEXT_CONTRAST_THRESHOLD),
            non_text_simulated: check_non_text_contrast(fg_adj, bg_adj, NON_TEXT_CONTRAST_THRESHOLD),
            icon_original: check_icon_contrast(fg_rgb, bg_rgb, ICON_CONTRAST_THRESHOLD),
            icon_simulated: check_icon_contrast(fg_adj, bg_adj, ICON_CONTRAST_THRESHOLD),
            simulated_summary: simulate_and_check(
                fg_rgb,
                bg_rgb,
                config,
                NON_TEXT_CONTRAST_THRESHOLD,
            ),
            delta_pass: delta.passes(),
            delta,
            chromatic_vibration: check_chromatic_vibration(fg_rgb, bg_rgb),
            ambient_pass: ambient.passes(),
            ambient,
            examples: DeltaReferences::compute(),
        }
    }
}

/// One report per foreground × background combination, foreground-major.
pub fn analyze_grid(
    foregrounds: &[Color],
    backgrounds: &[Color],
    config: Option<&VisualConfig>,
) -> Vec<PairReport> {
    tracing::debug!(
        foregrounds = foregrounds.len(),
        backgrounds = backgrounds.len(),
        "analyzing contrast grid"
    );
    foregrounds
        .iter()
        .flat_map(|fg| {
            backgrounds
                .iter()
                .map(move |bg| PairReport::analyze(fg, bg, config))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_blue() -> Color {
        Color::new(1, "Dark Blue", 0.3, 0.1, 250.0)
    }

    fn light_gray() -> Color {
        Color::new(1, "Light Gray", 0.95, 0.02, 250.0)
    }

    #[test]
    fn test_default_pair_passes_aa_normal() {
        let report = PairReport::analyze(&dark_blue(), &light_gray(), None);
        assert!(report.compliance.aa.normal, "contrast = {}", report.contrast_original);
        assert!(report.non_text_original && report.icon_original);
        assert!(report.ambient_pass);
        assert!(report.delta_pass);
    }

    #[test]
    fn test_without_config_adjusted_equals_original() {
        let report = PairReport::analyze(&dark_blue(), &light_gray(), None);
        assert_eq!(report.fg_adj, report.fg_rgb);
        assert_eq!(report.bg_adj, report.bg_rgb);
        assert_eq!(report.contrast_original, report.contrast_simulated);
        assert_eq!(report.non_text_original, report.non_text_simulated);
    }

    #[test]
    fn test_original_and_simulated_are_reported_separately() {
        let flat = VisualConfig {
            contrast: 0.0,
            ..VisualConfig::default()
        };
        let report = PairReport::analyze(&dark_blue(), &light_gray(), Some(&flat));
        assert!(report.non_text_original);
        assert!(!report.non_text_simulated);
        assert!(report.icon_original);
        assert!(!report.icon_simulated);
        assert_eq!(report.contrast_simulated, 1.0);
    }

    #[test]
    fn test_css_uses_adjusted_color_and_alpha() {
        let fg = dark_blue().with_alpha(0.5);
        let report = PairReport::analyze(&fg, &light_gray(), None);
        assert_eq!(report.fg_css, report.fg_adj.to_css(0.5));
        assert!(report.fg_css.ends_with(", 0.5)"));
        assert_eq!(report.fg_hex, report.fg_rgb.to_hex());
    }

    #[test]
    fn test_grid_is_foreground_major() {
        let fgs = [dark_blue(), Color::new(2, "Black", 0.0, 0.0, 0.0)];
        let bgs = [
            light_gray(),
            Color::new(3, "White", 1.0, 0.0, 0.0),
            Color::new(4, "Cream", 0.97, 0.03, 90.0),
        ];
        let reports = analyze_grid(&fgs, &bgs, None);
        assert_eq!(reports.len(), 6);
        let order: Vec<(u32, u32)> = reports
            .iter()
            .map(|r| (r.foreground_id, r.background_id))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 3), (1, 4), (2, 1), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_grid_with_empty_side_is_empty() {
        assert!(analyze_grid(&[dark_blue()], &[], None).is_empty());
    }
}
