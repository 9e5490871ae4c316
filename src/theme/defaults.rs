//! Fallback names used when a prop is present but under-specified.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::theme::Theme;
use crate::error::{ConfigError, LookupError};

/// Default size names, one per size-like prop family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSizes {
    /// Font size used by typography when no `size` prop is given
    pub font: String,
    /// Horizontal padding for `px: SizeProp::Default`
    pub px: String,
    /// Vertical padding for `py: SizeProp::Default`
    pub py: String,
    /// Radius for `radius: SizeProp::Default`, halved when applied
    pub radius: String,
}

impl DefaultSizes {
    pub fn new(
        font: impl Into<String>,
        px: impl Into<String>,
        py: impl Into<String>,
        radius: impl Into<String>,
    ) -> Self {
        Self {
            font: font.into(),
            px: px.into(),
            py: py.into(),
            radius: radius.into(),
        }
    }

    /// Uses the same size name for every family.
    pub fn uniform(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name.clone(), name.clone(), name)
    }
}

/// Theme defaults: the color, font and size names substituted for
/// `SizeProp::Default` and for absent typography/divider props.
///
/// Config files may carry extra keys (such as a `shadow` block); they are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub color: String,
    pub font: String,
    pub weight: String,
    pub sizes: DefaultSizes,
}

impl Defaults {
    pub fn new(
        color: impl Into<String>,
        font: impl Into<String>,
        weight: impl Into<String>,
        sizes: DefaultSizes,
    ) -> Self {
        Self {
            color: color.into(),
            font: font.into(),
            weight: weight.into(),
            sizes,
        }
    }

    pub fn font_size(mut self, name: impl Into<String>) -> Self {
        self.sizes.font = name.into();
        self
    }

    pub fn px(mut self, name: impl Into<String>) -> Self {
        self.sizes.px = name.into();
        self
    }

    pub fn py(mut self, name: impl Into<String>) -> Self {
        self.sizes.py = name.into();
        self
    }

    pub fn radius(mut self, name: impl Into<String>) -> Self {
        self.sizes.radius = name.into();
        self
    }

    /// Checks that every default names something the theme defines.
    ///
    /// Called by [`TurboProps::new`](crate::TurboProps::new); the first
    /// missing name is reported along with the defaults field it came from.
    pub fn validate(&self, theme: &Theme) -> Result<(), ConfigError> {
        let checks: [(&'static str, Result<(), LookupError>); 6] = [
            ("color", theme.color(&self.color).map(drop)),
            ("font", theme.font(&self.font, &self.weight).map(drop)),
            ("sizes.font", theme.size(&self.sizes.font).map(drop)),
            ("sizes.px", theme.size(&self.sizes.px).map(drop)),
            ("sizes.py", theme.size(&self.sizes.py).map(drop)),
            ("sizes.radius", theme.size(&self.sizes.radius).map(drop)),
        ];

        for (field, check) in checks {
            if let Err(source) = check {
                warn!(field, error = %source, "default does not resolve against theme");
                return Err(ConfigError::Default { field, source });
            }
        }
        Ok(())
    }
}
