//! The bound resolver set.
//!
//! [`TurboProps`] owns a validated theme and its defaults. Every resolver is
//! a method taking per-element props and returning a [`StyleFragment`]:
//!
//! | Family | Entry points |
//! |--------|--------------|
//! | Common | [`TurboProps::base`] |
//! | Layout | [`TurboProps::base_layout`], [`TurboProps::base_row_layout`], [`TurboProps::base_column_layout`] |
//! | Typography | [`TurboProps::base_typography`] |
//! | Spacer | [`TurboProps::spacer`] |
//! | Divider | [`TurboProps::divider`] |
//!
//! Resolvers never mutate the bound set, so one instance can serve any
//! number of threads.

mod common;
mod divider;
mod layout;
mod spacer;
mod styled;
mod typography;

use tracing::{debug, warn};

use crate::error::{ConfigError, CssError, LookupError};
use crate::props::SizeProp;
use crate::style::StyleFragment;
use crate::theme::{Defaults, Theme, ThemeConfig};

pub use divider::Divider;
pub use spacer::Spacer;
pub use styled::{StyleRule, StyledComponent};

/// A theme and its defaults bound into a set of style resolvers.
///
/// # Example
///
/// ```rust
/// use turbo_props::{DefaultSizes, Defaults, Theme, TurboProps, TypographyProps};
///
/// let theme = Theme::new(8.0)
///     .add_color("brand", "red")
///     .add_size("m-18", 18.0)
///     .add_font("mono", "regular", "monospace 500");
/// let defaults = Defaults::new("brand", "mono", "regular", DefaultSizes::uniform("m-18"));
///
/// let tp = TurboProps::new(theme.clone(), defaults).unwrap();
/// assert_eq!(tp.theme(), &theme);
///
/// let text = tp.base_typography(&TypographyProps::new()).unwrap();
/// assert_eq!(text.get("color"), Some("red"));
/// assert_eq!(text.get("font"), Some("18px monospace 500"));
/// ```
#[derive(Debug, Clone)]
pub struct TurboProps {
    theme: Theme,
    defaults: Defaults,
    debug_outlines: bool,
}

impl TurboProps {
    /// Binds a theme to its defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGrid`] if the grid unit is negative or
    /// not finite, [`ConfigError::InvalidSize`] for a non-finite theme size,
    /// and [`ConfigError::Default`] if any default names a color, size, font
    /// family or weight the theme lacks.
    pub fn new(theme: Theme, defaults: Defaults) -> Result<Self, ConfigError> {
        let grid = theme.grid();
        if !grid.is_finite() || grid < 0.0 {
            return Err(ConfigError::InvalidGrid(grid));
        }
        if let Some((name, &value)) = theme.sizes().iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::InvalidSize {
                name: name.clone(),
                value,
            });
        }
        defaults.validate(&theme)?;

        debug!(
            colors = theme.colors().len(),
            sizes = theme.sizes().len(),
            fonts = theme.fonts().len(),
            grid,
            "bound theme to resolvers"
        );
        Ok(Self {
            theme,
            defaults,
            debug_outlines: false,
        })
    }

    /// Binds a loaded [`ThemeConfig`].
    pub fn from_config(config: ThemeConfig) -> Result<Self, ConfigError> {
        Self::new(config.theme, config.defaults)
    }

    /// Outlines every element as if it had its `debug` prop set.
    pub fn with_debug_outlines(mut self, enabled: bool) -> Self {
        self.debug_outlines = enabled;
        self
    }

    /// The bound theme, unchanged from the one passed to [`new`](Self::new).
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Accessor for the current theme from inside custom resolvers.
    pub fn use_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Builds a style fragment from literal declaration text.
    ///
    /// ```rust
    /// # use turbo_props::{DefaultSizes, Defaults, Theme, TurboProps};
    /// # let theme = Theme::new(8.0)
    /// #     .add_color("brand", "red")
    /// #     .add_size("m", 16.0)
    /// #     .add_font("mono", "regular", "monospace 500");
    /// # let tp = TurboProps::new(theme, Defaults::new("brand", "mono", "regular", DefaultSizes::uniform("m"))).unwrap();
    /// let fragment = tp.css("display: flex; overflow: scroll;").unwrap();
    /// assert_eq!(fragment.get("overflow"), Some("scroll"));
    /// ```
    pub fn css(&self, source: &str) -> Result<StyleFragment, CssError> {
        StyleFragment::parse(source)
    }

    /// Starts a styled component rendered under `selector`.
    pub fn styled<P>(&self, selector: impl Into<String>) -> StyledComponent<'_, P> {
        StyledComponent::new(self, selector.into())
    }

    /// Spacer resolvers.
    pub fn spacer(&self) -> Spacer<'_> {
        Spacer::new(self)
    }

    /// Divider resolvers.
    pub fn divider(&self) -> Divider<'_> {
        Divider::new(self)
    }

    fn lookup_color(&self, name: &str) -> Result<&str, LookupError> {
        self.theme
            .color(name)
            .inspect_err(|err| warn!(error = %err, "color lookup failed"))
    }

    fn lookup_size(&self, name: &str) -> Result<f64, LookupError> {
        self.theme
            .size(name)
            .inspect_err(|err| warn!(error = %err, "size lookup failed"))
    }

    fn lookup_font(&self, family: &str, weight: &str) -> Result<&str, LookupError> {
        self.theme
            .font(family, weight)
            .inspect_err(|err| warn!(error = %err, "font lookup failed"))
    }

    /// Resolves a size prop, looking up `default` for [`SizeProp::Default`].
    fn resolve_size(&self, prop: &SizeProp, default: &str) -> Result<f64, LookupError> {
        match prop {
            SizeProp::Default => self.lookup_size(default),
            SizeProp::Named(name) => self.lookup_size(name),
            SizeProp::Literal(value) => Ok(*value),
        }
    }

    /// Drops a [`SizeProp::Literal`] that is NaN or infinite; it counts as unset.
    fn finite_size(prop: Option<&SizeProp>) -> Option<&SizeProp> {
        prop.filter(|p| !matches!(p, SizeProp::Literal(v) if !v.is_finite()))
    }

    /// Appends the debug outline when the element or the whole set asks for it.
    fn debug_outline(
        &self,
        requested: bool,
        fragment: &mut StyleFragment,
    ) -> Result<(), LookupError> {
        if requested || self.debug_outlines {
            let color = self.lookup_color(&self.defaults.color)?;
            fragment.push("outline", format!("1px dashed {color}"));
        }
        Ok(())
    }
}

/// A number that renders as a CSS value; NaN and infinities count as unset.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Like [`finite`], with zero also counting as unset.
pub(crate) fn truthy(value: Option<f64>) -> Option<f64> {
    finite(value).filter(|v| *v != 0.0)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::theme::{DefaultSizes, Defaults, Theme};

    use super::TurboProps;

    pub(crate) fn theme() -> Theme {
        Theme::new(8.0)
            .add_color("brand", "red")
            .add_color("world", "black")
            .add_size("s-10", 12.0)
            .add_size("m-18", 18.0)
            .add_size("l-24", 24.0)
            .add_font("mono", "light", "monospace 300")
            .add_font("mono", "regular", "monospace 500")
            .add_font("mono", "bold", "monospace 700")
            .add_font("sans-serif", "light", "sans-serif 300")
            .add_font("sans-serif", "regular", "sans-serif 500")
            .add_font("sans-serif", "bold", "sans-serif 700")
    }

    pub(crate) fn defaults() -> Defaults {
        Defaults::new(
            "brand",
            "mono",
            "regular",
            DefaultSizes::new("m-18", "l-24", "m-18", "s-10"),
        )
    }

    pub(crate) fn turbo() -> TurboProps {
        TurboProps::new(theme(), defaults()).unwrap()
    }
}
