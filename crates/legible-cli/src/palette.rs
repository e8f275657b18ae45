//! Palette files: the foreground and background lists plus an optional
//! viewing condition.

use std::path::Path;

use legible_core::{Color, PartialVisualConfig, VisualConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub foregrounds: Vec<Color>,
    pub backgrounds: Vec<Color>,
    /// Partial fields are filled from the identity condition.
    #[serde(default)]
    pub visual_config: Option<PartialVisualConfig>,
}

impl Palette {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let palette = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            foregrounds = palette.foregrounds.len(),
            backgrounds = palette.backgrounds.len(),
            "loaded palette"
        );
        Ok(palette)
    }

    pub fn from_json(text: &str) -> Result<Self, CliError> {
        let palette: Self = serde_json::from_str(text)?;
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if self.foregrounds.is_empty() || self.backgrounds.is_empty() {
            return Err(CliError::EmptyPalette);
        }
        for color in self.foregrounds.iter().chain(&self.backgrounds) {
            color
                .validate()
                .map_err(|source| CliError::InvalidColor {
                    name: color.name.clone(),
                    source,
                })?;
        }
        if let Some(config) = &self.visual_config {
            config.validate().map_err(CliError::InvalidConfig)?;
        }
        Ok(())
    }

    /// The resolved viewing condition, if any was given.
    pub fn resolved_config(&self) -> Option<VisualConfig> {
        self.visual_config.as_ref().map(PartialVisualConfig::resolve)
    }
}

impl Default for Palette {
    /// The application's starting pair: Dark Blue on Light Gray.
    fn default() -> Self {
        Self {
            foregrounds: vec![Color::new(1, "Dark Blue", 0.3, 0.1, 250.0)],
            backgrounds: vec![Color::new(1, "Light Gray", 0.95, 0.02, 250.0)],
            visual_config: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_palette() {
        let palette = Palette::from_json(
            r#"{
                "foregrounds": [{"id": 1, "name": "Ink", "l": 0.2, "c": 0.0, "h": 0}],
                "backgrounds": [{"id": 2, "name": "Paper", "l": 0.98, "c": 0.01, "h": 90, "a": 0.9}]
            }"#,
        )
        .unwrap();
        assert_eq!(palette.foregrounds[0].name, "Ink");
        assert_eq!(palette.backgrounds[0].a, Some(0.9));
        assert!(palette.resolved_config().is_none());
    }

    #[test]
    fn test_partial_visual_config_is_resolved() {
        let palette = Palette::from_json(
            r#"{
                "foregrounds": [{"id": 1, "name": "Ink", "l": 0.2, "c": 0.0, "h": 0}],
                "backgrounds": [{"id": 2, "name": "Paper", "l": 0.98, "c": 0.01, "h": 90}],
                "visualConfig": {"protanopia": 1}
            }"#,
        )
        .unwrap();
        let config = palette.resolved_config().unwrap();
        assert_eq!(config.protanopia, 1.0);
        assert_eq!(config.gamma, 1.0);
    }

    #[test]
    fn test_empty_side_is_rejected() {
        let err = Palette::from_json(
            r#"{"foregrounds": [], "backgrounds": [{"id": 2, "name": "Paper", "l": 0.98, "c": 0.01, "h": 90}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::EmptyPalette));
    }

    #[test]
    fn test_alpha_out_of_range_names_the_color() {
        let err = Palette::from_json(
            r#"{
                "foregrounds": [{"id": 1, "name": "Ghost", "l": 0.2, "c": 0.0, "h": 0, "a": 2}],
                "backgrounds": [{"id": 2, "name": "Paper", "l": 0.98, "c": 0.01, "h": 90}]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidColor { ref name, .. } if name == "Ghost"));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        assert!(matches!(
            Palette::from_json("{not json"),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = Palette::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_default_is_the_starting_pair() {
        let palette = Palette::default();
        assert!(palette.validate().is_ok());
        assert_eq!(palette.foregrounds[0].name, "Dark Blue");
    }
}
