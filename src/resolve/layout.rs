//! Layout resolver: flex alignment plus row and column variants.

use tracing::trace;

use super::{truthy, TurboProps};
use crate::error::LookupError;
use crate::props::{FlexAlign, FlexJustify, LayoutProps, Toggle};
use crate::style::{px, StyleFragment};

/// Picks the keyword for an align/justify prop.
///
/// An explicit keyword wins; otherwise the prop being on, or `center` being
/// set, means `center`.
fn flex_keyword<T>(
    prop: Option<&Toggle<T>>,
    center: bool,
    as_str: fn(&T) -> &'static str,
) -> Option<&'static str> {
    match prop {
        Some(Toggle::Value(value)) => Some(as_str(value)),
        Some(Toggle::On) => Some("center"),
        None if center => Some("center"),
        None => None,
    }
}

impl TurboProps {
    /// Resolves the common props plus `align-items` and `justify-content`.
    pub fn base_layout(&self, props: &LayoutProps) -> Result<StyleFragment, LookupError> {
        let mut fragment = self.base(&props.common)?;
        let center = props.common.center;

        if let Some(align) = flex_keyword(props.align.as_ref(), center, FlexAlign::as_str) {
            fragment.push("align-items", align);
        }
        if let Some(justify) = flex_keyword(props.justify.as_ref(), center, FlexJustify::as_str) {
            fragment.push("justify-content", justify);
        }

        trace!(declarations = fragment.len(), "resolved layout props");
        Ok(fragment)
    }

    /// Row direction, plus a fixed height when `size` is set.
    ///
    /// A `size` of zero, NaN or infinity emits no height.
    pub fn base_row_layout(&self, props: &LayoutProps) -> StyleFragment {
        let direction = if props.reverse { "row-reverse" } else { "row" };
        directional(direction, "height", props.size)
    }

    /// Column direction, plus a fixed width when `size` is set.
    pub fn base_column_layout(&self, props: &LayoutProps) -> StyleFragment {
        let direction = if props.reverse {
            "column-reverse"
        } else {
            "column"
        };
        directional(direction, "width", props.size)
    }

    /// [`base_layout`](Self::base_layout) followed by the row variant.
    pub fn row_layout(&self, props: &LayoutProps) -> Result<StyleFragment, LookupError> {
        Ok(self.base_layout(props)?.then(self.base_row_layout(props)))
    }

    /// [`base_layout`](Self::base_layout) followed by the column variant.
    pub fn column_layout(&self, props: &LayoutProps) -> Result<StyleFragment, LookupError> {
        Ok(self.base_layout(props)?.then(self.base_column_layout(props)))
    }
}

fn directional(direction: &str, cross_axis: &str, size: Option<f64>) -> StyleFragment {
    let mut fragment = StyleFragment::new().declare("flex-direction", direction);
    if let Some(size) = truthy(size) {
        fragment.push(cross_axis, px(size));
    }
    fragment
}
