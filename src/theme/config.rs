//! Loading a theme and its defaults from YAML or JSON.
//!
//! A config file holds both halves of a bound resolver set:
//!
//! ```yaml
//! theme:
//!   grid: 8
//!   colors:
//!     brand: red
//!   sizes:
//!     m-18: 18
//!   fonts:
//!     mono:
//!       regular: monospace 500
//! defaults:
//!   color: brand
//!   font: mono
//!   weight: regular
//!   sizes: { font: m-18, px: m-18, py: m-18, radius: m-18 }
//! ```
//!
//! The format is picked from the file extension: `.yaml`/`.yml` or `.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults::Defaults;
use super::theme::Theme;
use crate::error::ConfigError;

/// A theme paired with its defaults, as stored in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub defaults: Defaults,
}

impl ThemeConfig {
    pub fn new(theme: Theme, defaults: Defaults) -> Self {
        Self { theme, defaults }
    }

    /// Parses a config from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a config from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads and parses a config file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions,
    /// [`ConfigError::Read`] if the file cannot be read, and a YAML or JSON
    /// error if the content is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading theme config");
        parse(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
theme:
  grid: 8
  colors:
    brand: red
    world: black
  sizes:
    s-10: 12
    m-18: 18
  fonts:
    mono:
      regular: monospace 500
defaults:
  color: brand
  font: mono
  weight: regular
  sizes:
    font: m-18
    px: m-18
    py: s-10
    radius: s-10
  shadow:
    color: brand
    radius: 6.27
"#;

    #[test]
    fn test_from_yaml_ignores_unknown_default_keys() {
        let config = ThemeConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(config.theme.color("world"), Ok("black"));
        assert_eq!(config.theme.size("s-10"), Ok(12.0));
        assert_eq!(config.defaults.sizes.py, "s-10");
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "theme": {
                "grid": 4,
                "colors": { "brand": "#f00" },
                "sizes": { "m": 16 },
                "fonts": { "sans": { "bold": "sans-serif 700" } }
            },
            "defaults": {
                "color": "brand",
                "font": "sans",
                "weight": "bold",
                "sizes": { "font": "m", "px": "m", "py": "m", "radius": "m" }
            }
        });
        let config = ThemeConfig::from_json_str(&json.to_string()).unwrap();
        assert_eq!(config.theme.grid(), 4.0);
        assert_eq!(config.theme.font("sans", "bold"), Ok("sans-serif 700"));
    }

    #[test]
    fn test_missing_grid_is_error() {
        let result = ThemeConfig::from_yaml_str("theme: {}\ndefaults: {}\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_round_trip_preserves_theme() {
        let config = ThemeConfig::from_yaml_str(YAML).unwrap();
        let text = serde_yaml::to_string(&config).unwrap();
        let again = ThemeConfig::from_yaml_str(&text).unwrap();
        assert_eq!(config, again);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ThemeConfig::from_path("theme.toml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }
}
