//! Error types for theme lookups, configuration and CSS parsing.

use std::path::PathBuf;

use thiserror::Error;

/// A prop or default named something the theme does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No color with this name in `theme.colors`
    #[error("unknown color '{name}'")]
    UnknownColor { name: String },
    /// No size with this name in `theme.sizes`
    #[error("unknown size '{name}'")]
    UnknownSize { name: String },
    /// No font family with this name in `theme.fonts`
    #[error("unknown font family '{family}'")]
    UnknownFont { family: String },
    /// The family exists but has no such weight
    #[error("font family '{family}' has no weight '{weight}'")]
    UnknownWeight { family: String, weight: String },
    /// `SizeProp::Default` given to a prop family without a defaults entry
    #[error("{family} has no default size")]
    NoDefaultSize { family: &'static str },
}

/// Error returned when a theme and defaults cannot be bound together.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A default names something missing from the theme.
    #[error("invalid default {field}: {source}")]
    Default {
        field: &'static str,
        #[source]
        source: LookupError,
    },

    /// The grid unit must be a finite, non-negative number.
    #[error("invalid grid unit {0}")]
    InvalidGrid(f64),

    /// Theme sizes must be finite numbers.
    #[error("invalid size '{name}': {value}")]
    InvalidSize { name: String, value: f64 },

    /// Failed to read a config file from disk.
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file extension is not one of `.yaml`, `.yml` or `.json`.
    #[error("unsupported config format '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when CSS declaration text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid CSS at {line}:{column}: {message}")]
pub struct CssError {
    /// 1-based line of the offending declaration
    pub line: u32,
    /// 1-based column of the offending declaration
    pub column: u32,
    pub message: String,
}
