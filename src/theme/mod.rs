//! Theme configuration for resolving styles.
//!
//! This module provides:
//!
//! - [`Theme`]: named colors, sizes and font descriptors plus a grid unit
//! - [`Defaults`]: fallback names for under-specified props
//! - [`ThemeConfig`]: a theme and its defaults loaded from YAML or JSON
//!
//! Themes are plain values; binding one to its defaults happens in
//! [`TurboProps::new`](crate::TurboProps::new), which validates the pair.

mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod theme;

pub use config::ThemeConfig;
pub use defaults::{DefaultSizes, Defaults};
pub use theme::Theme;
