//! Spacer resolver.

use tracing::{trace, warn};

use super::{finite, truthy, TurboProps};
use crate::error::LookupError;
use crate::props::{FlexSpacerProps, SizeProp, SpacerProps};
use crate::style::{px, StyleFragment};

/// Spacer resolvers bound to a [`TurboProps`].
///
/// ```rust
/// # use turbo_props::{DefaultSizes, Defaults, Theme, TurboProps, SpacerProps};
/// # let theme = Theme::new(8.0)
/// #     .add_color("brand", "red")
/// #     .add_size("m", 16.0)
/// #     .add_font("mono", "regular", "monospace 500");
/// # let tp = TurboProps::new(theme, Defaults::new("brand", "mono", "regular", DefaultSizes::uniform("m"))).unwrap();
/// let gap = tp.spacer().horizontal(&SpacerProps::new().units(3.0)).unwrap();
/// assert_eq!(gap.get("width"), Some("24px"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Spacer<'a> {
    turbo: &'a TurboProps,
}

impl<'a> Spacer<'a> {
    pub(crate) fn new(turbo: &'a TurboProps) -> Self {
        Self { turbo }
    }

    /// A fixed-width gap.
    pub fn horizontal(&self, props: &SpacerProps) -> Result<StyleFragment, LookupError> {
        self.fixed("width", props)
    }

    /// A fixed-height gap.
    pub fn vertical(&self, props: &SpacerProps) -> Result<StyleFragment, LookupError> {
        self.fixed("height", props)
    }

    /// A gap that flexes. Without a grow or shrink factor it fills the
    /// available space. Factors of zero, NaN or infinity count as unset.
    pub fn flex(&self, props: &FlexSpacerProps) -> Result<StyleFragment, LookupError> {
        let grow = truthy(props.grow);
        let shrink = truthy(props.shrink);
        let mut fragment = StyleFragment::new();

        if grow.is_none() && shrink.is_none() {
            fragment.push("flex", "1");
        }
        if let Some(grow) = grow {
            fragment.push("flex-grow", grow.to_string());
        }
        if let Some(shrink) = shrink {
            fragment.push("flex-shrink", shrink.to_string());
        }
        self.turbo.debug_outline(props.debug, &mut fragment)?;

        trace!(declarations = fragment.len(), "resolved flex spacer");
        Ok(fragment)
    }

    fn fixed(&self, dimension: &str, props: &SpacerProps) -> Result<StyleFragment, LookupError> {
        let mut fragment = StyleFragment::new().declare(dimension, px(self.magnitude(props)?));
        self.turbo.debug_outline(props.debug, &mut fragment)?;

        trace!(dimension, "resolved spacer");
        Ok(fragment)
    }

    /// A given size wins over `units`. Non-finite literals and units count
    /// as unset; spacers have no defaults entry, so `SizeProp::Default` is
    /// an error.
    fn magnitude(&self, props: &SpacerProps) -> Result<f64, LookupError> {
        match TurboProps::finite_size(props.size.as_ref()) {
            Some(SizeProp::Literal(value)) => Ok(*value),
            Some(SizeProp::Named(name)) => self.turbo.lookup_size(name),
            Some(SizeProp::Default) => {
                let err = LookupError::NoDefaultSize { family: "spacer" };
                warn!(error = %err, "size lookup failed");
                Err(err)
            }
            None => Ok(self.turbo.theme.grid() * finite(props.units).unwrap_or(1.0)),
        }
    }
}
