//! Common resolver: background, grow, padding, positioning, radius, border.

use tracing::trace;

use super::{finite, truthy, TurboProps};
use crate::error::LookupError;
use crate::props::{CommonProps, SizeProp};
use crate::style::{px, StyleFragment};

impl TurboProps {
    /// Resolves the props shared by layouts and typography.
    ///
    /// Each prop contributes its declarations independently, in this order:
    /// `background-color`, `flex`, `padding`, `position` and offsets,
    /// `border-radius` with `overflow`, `border`, and the debug `outline`.
    /// Padding is always emitted, as `0px 0px` when neither axis is set.
    /// NaN or infinite literals count as unset.
    pub fn base(&self, props: &CommonProps) -> Result<StyleFragment, LookupError> {
        let mut fragment = StyleFragment::new();

        if let Some(bg) = &props.bg {
            fragment.push("background-color", self.lookup_color(bg)?);
        }

        if props.grow {
            fragment.push("flex", "1");
        }

        let padding_x = self.padding(props.px.as_ref(), &self.defaults.sizes.px)?;
        let padding_y = self.padding(props.py.as_ref(), &self.defaults.sizes.py)?;
        fragment.push("padding", format!("{} {}", px(padding_y), px(padding_x)));

        if let Some(absolute) = &props.absolute {
            fragment.push("position", "absolute");
            for (edge, offset) in absolute.offsets().entries() {
                if let Some(offset) = finite(offset) {
                    fragment.push(edge, px(offset));
                }
            }
        }

        if let Some(radius) = props.radius.as_ref() {
            if let Some(radius) = self.radius(radius)? {
                fragment.push("border-radius", px(radius));
                fragment.push("overflow", "hidden");
            }
        }

        if let Some(border) = props.border.as_ref().filter(|b| b.width.is_finite()) {
            let color = self.lookup_color(&border.color)?;
            fragment.push(
                "border",
                format!("{} {} {color}", px(border.width), border.style),
            );
        }

        self.debug_outline(props.debug, &mut fragment)?;

        trace!(declarations = fragment.len(), "resolved common props");
        Ok(fragment)
    }

    fn padding(&self, prop: Option<&SizeProp>, default: &str) -> Result<f64, LookupError> {
        match Self::finite_size(prop) {
            Some(prop) => self.resolve_size(prop, default),
            None => Ok(0.0),
        }
    }

    /// Theme radii are halved; a literal is used as-is and zero means none.
    fn radius(&self, prop: &SizeProp) -> Result<Option<f64>, LookupError> {
        if let Some(name) = prop.name(&self.defaults.sizes.radius) {
            return Ok(Some(self.lookup_size(name)? / 2.0));
        }
        Ok(match prop {
            SizeProp::Literal(value) => truthy(Some(*value)),
            _ => None,
        })
    }
}
