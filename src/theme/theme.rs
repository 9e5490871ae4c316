//! Theme struct holding named colors, sizes and fonts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// The named design tokens styles are resolved against.
///
/// A theme maps color names to CSS color values, size names to pixel
/// magnitudes, and font families to per-weight font descriptors. The `grid`
/// unit is the base step used by spacers.
///
/// # Example
///
/// ```rust
/// use turbo_props::Theme;
///
/// let theme = Theme::new(8.0)
///     .add_color("brand", "red")
///     .add_size("s-10", 12.0)
///     .add_font("mono", "regular", "monospace 500")
///     .add_font("mono", "bold", "monospace 700");
///
/// assert_eq!(theme.color("brand").unwrap(), "red");
/// assert_eq!(theme.size("s-10").unwrap(), 12.0);
/// assert_eq!(theme.font("mono", "bold").unwrap(), "monospace 700");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    colors: BTreeMap<String, String>,
    #[serde(default)]
    sizes: BTreeMap<String, f64>,
    #[serde(default)]
    fonts: BTreeMap<String, BTreeMap<String, String>>,
    grid: f64,
}

impl Theme {
    /// Creates an empty theme with the given grid unit.
    pub fn new(grid: f64) -> Self {
        Self {
            colors: BTreeMap::new(),
            sizes: BTreeMap::new(),
            fonts: BTreeMap::new(),
            grid,
        }
    }

    /// Adds a named color, returning an updated theme for chaining.
    pub fn add_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    /// Adds a named size in pixels, returning an updated theme for chaining.
    pub fn add_size(mut self, name: impl Into<String>, value: f64) -> Self {
        self.sizes.insert(name.into(), value);
        self
    }

    /// Adds a font descriptor for a family and weight.
    ///
    /// The descriptor is emitted verbatim after the font size in the `font`
    /// shorthand, so it usually carries the family and numeric weight
    /// (`"monospace 500"`).
    pub fn add_font(
        mut self,
        family: impl Into<String>,
        weight: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        self.fonts
            .entry(family.into())
            .or_default()
            .insert(weight.into(), descriptor.into());
        self
    }

    /// Looks up a color by name.
    pub fn color(&self, name: &str) -> Result<&str, LookupError> {
        self.colors
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownColor {
                name: name.to_string(),
            })
    }

    /// Looks up a size by name.
    pub fn size(&self, name: &str) -> Result<f64, LookupError> {
        self.sizes
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownSize {
                name: name.to_string(),
            })
    }

    /// Looks up the descriptor for a font family and weight.
    pub fn font(&self, family: &str, weight: &str) -> Result<&str, LookupError> {
        let weights = self
            .fonts
            .get(family)
            .ok_or_else(|| LookupError::UnknownFont {
                family: family.to_string(),
            })?;
        weights
            .get(weight)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownWeight {
                family: family.to_string(),
                weight: weight.to_string(),
            })
    }

    /// The base spacing unit in pixels.
    pub fn grid(&self) -> f64 {
        self.grid
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    pub fn sizes(&self) -> &BTreeMap<String, f64> {
        &self.sizes
    }

    pub fn fonts(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.fonts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Theme {
        Theme::new(8.0)
            .add_color("brand", "red")
            .add_color("world", "black")
            .add_size("s-10", 12.0)
            .add_font("mono", "light", "monospace 300")
            .add_font("mono", "regular", "monospace 500")
    }

    #[test]
    fn test_theme_add_color() {
        let theme = sample();
        assert_eq!(theme.color("world"), Ok("black"));
        assert_eq!(theme.colors().len(), 2);
    }

    #[test]
    fn test_theme_add_color_overwrites() {
        let theme = sample().add_color("brand", "blue");
        assert_eq!(theme.color("brand"), Ok("blue"));
    }

    #[test]
    fn test_theme_unknown_color() {
        let err = sample().color("nope").unwrap_err();
        assert_eq!(
            err,
            LookupError::UnknownColor {
                name: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_theme_size_lookup() {
        let theme = sample();
        assert_eq!(theme.size("s-10"), Ok(12.0));
        assert!(theme.size("m-18").is_err());
    }

    #[test]
    fn test_theme_font_two_level_lookup() {
        let theme = sample();
        assert_eq!(theme.font("mono", "light"), Ok("monospace 300"));
        assert_eq!(
            theme.font("serif", "light"),
            Err(LookupError::UnknownFont {
                family: "serif".to_string()
            })
        );
        assert_eq!(
            theme.font("mono", "bold"),
            Err(LookupError::UnknownWeight {
                family: "mono".to_string(),
                weight: "bold".to_string()
            })
        );
    }

    #[test]
    fn test_theme_grid() {
        assert_eq!(sample().grid(), 8.0);
    }
}
