//! Stylesheet system for diagram colours
//!
//! The renderer refers to colours by token (`triangle`, `label-unknown`, ...)
//! and emits them as CSS custom properties, so a diagram can be re-themed by
//! loading a different TOML stylesheet.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping colour tokens to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Colour mappings: token name -> CSS colour
    pub colors: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette: blue outline, black marker and labels, red unknown side
const DEFAULT_PALETTE: &str = r##"
[colors]
triangle = "#0000ff"
right-angle = "#000000"
label = "#000000"
label-unknown = "#ff0000"
font-family = "sans-serif"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    ///
    /// Tokens missing from `content` are filled in from the default palette.
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        let mut colors = default_colors();
        colors.extend(parsed.colors);

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors,
        })
    }

    /// Resolve a colour token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }
}

fn default_colors() -> BTreeMap<String, String> {
    toml::from_str::<TomlStylesheet>(DEFAULT_PALETTE)
        .expect("Default palette should be valid TOML")
        .colors
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            colors: default_colors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        for token in ["triangle", "right-angle", "label", "label-unknown"] {
            assert!(stylesheet.colors.contains_key(token), "missing {token}");
        }
    }

    #[test]
    fn test_default_palette_parses() {
        let colors = default_colors();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors["font-family"], "sans-serif");
    }

    #[test]
    fn test_resolve_existing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("triangle"), Some("#0000ff"));
        assert_eq!(stylesheet.resolve("label-unknown"), Some("#ff0000"));
    }

    #[test]
    fn test_resolve_missing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Chalkboard"
description = "Light lines on dark green"

[colors]
triangle = "#ffffff"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Chalkboard".to_string()));
        assert_eq!(
            stylesheet.description,
            Some("Light lines on dark green".to_string())
        );
        assert_eq!(stylesheet.resolve("triangle"), Some("#ffffff"));
        // untouched tokens keep their defaults
        assert_eq!(stylesheet.resolve("label-unknown"), Some("#ff0000"));
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let toml_str = r##"
[colors]
label = "#111111"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, None);
        assert_eq!(stylesheet.resolve("label"), Some("#111111"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }
}
