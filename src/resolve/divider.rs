//! Divider resolver.

use super::{finite, TurboProps};
use crate::error::LookupError;
use crate::props::DividerProps;
use crate::style::{px, StyleFragment};

/// Divider resolvers bound to a [`TurboProps`].
#[derive(Debug, Clone, Copy)]
pub struct Divider<'a> {
    turbo: &'a TurboProps,
}

impl<'a> Divider<'a> {
    pub(crate) fn new(turbo: &'a TurboProps) -> Self {
        Self { turbo }
    }

    /// A rule along the bottom edge.
    pub fn horizontal(&self, props: &DividerProps) -> Result<StyleFragment, LookupError> {
        self.rule("border-bottom-width", props)
    }

    /// A rule along the right edge.
    pub fn vertical(&self, props: &DividerProps) -> Result<StyleFragment, LookupError> {
        self.rule("border-right-width", props)
    }

    /// A NaN or infinite `line_width` falls back to 1px.
    fn rule(&self, edge: &str, props: &DividerProps) -> Result<StyleFragment, LookupError> {
        let color = props
            .color
            .as_deref()
            .unwrap_or(&self.turbo.defaults.color);
        let color = self.turbo.lookup_color(color)?;

        Ok(StyleFragment::new()
            .declare("border-color", color)
            .declare(edge, px(finite(props.line_width).unwrap_or(1.0))))
    }
}
