//! Typography resolver.

use tracing::trace;

use super::TurboProps;
use crate::error::LookupError;
use crate::props::{SizeProp, TypographyProps};
use crate::style::{px, StyleFragment};

impl TurboProps {
    /// Resolves common props plus `color`, the `font` shorthand and
    /// optional `text-align: center`.
    ///
    /// Color, size, family and weight each fall back to the bound defaults
    /// on their own, so `TypographyProps::new()` always resolves to the
    /// default text style. A NaN or infinite literal size falls back too.
    pub fn base_typography(&self, props: &TypographyProps) -> Result<StyleFragment, LookupError> {
        let mut fragment = self.base(&props.common)?;

        let color = props.color.as_deref().unwrap_or(&self.defaults.color);
        fragment.push("color", self.lookup_color(color)?);

        let size = Self::finite_size(props.size.as_ref()).unwrap_or(&SizeProp::Default);
        let size = self.resolve_size(size, &self.defaults.sizes.font)?;
        let family = props.family.as_deref().unwrap_or(&self.defaults.font);
        let weight = props.weight.as_deref().unwrap_or(&self.defaults.weight);
        let descriptor = self.lookup_font(family, weight)?;
        fragment.push("font", format!("{} {descriptor}", px(size)));

        if props.common.center {
            fragment.push("text-align", "center");
        }

        trace!(declarations = fragment.len(), "resolved typography props");
        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{defaults, theme, turbo};
    use crate::props::{CommonBuilder, SizeProp, TypographyProps};
    use crate::{LookupError, TurboProps};

    #[test]
    fn test_defaults_only() {
        let fragment = turbo().base_typography(&TypographyProps::new()).unwrap();
        assert_eq!(fragment.get("color"), Some("red"));
        assert_eq!(fragment.get("font"), Some("18px monospace 500"));
        assert!(!fragment.has("text-align"));
    }

    #[test]
    fn test_explicit_color() {
        let props = TypographyProps::new().color("world");
        let fragment = turbo().base_typography(&props).unwrap();
        assert_eq!(fragment.get("color"), Some("black"));
    }

    #[test]
    fn test_named_and_literal_size() {
        let tp = turbo();
        let named = tp
            .base_typography(&TypographyProps::new().size("l-24"))
            .unwrap();
        assert_eq!(named.get("font"), Some("24px monospace 500"));

        let literal = tp.base_typography(&TypographyProps::new().size(13)).unwrap();
        assert_eq!(literal.get("font"), Some("13px monospace 500"));

        let default = tp
            .base_typography(&TypographyProps::new().size(SizeProp::Default))
            .unwrap();
        assert_eq!(default.get("font"), Some("18px monospace 500"));
    }

    #[test]
    fn test_family_and_weight_fall_back_independently() {
        let tp = turbo();
        let family = tp
            .base_typography(&TypographyProps::new().family("sans-serif"))
            .unwrap();
        assert_eq!(family.get("font"), Some("18px sans-serif 500"));

        let weight = tp
            .base_typography(&TypographyProps::new().weight("bold"))
            .unwrap();
        assert_eq!(weight.get("font"), Some("18px monospace 700"));
    }

    #[test]
    fn test_changing_defaults_changes_descriptor() {
        let tp = TurboProps::new(theme(), defaults()).unwrap();
        let before = tp.base_typography(&TypographyProps::new()).unwrap();

        let mut changed = defaults();
        changed.weight = "light".to_string();
        let tp = TurboProps::new(theme(), changed).unwrap();
        let after = tp.base_typography(&TypographyProps::new()).unwrap();

        assert_eq!(before.get("font"), Some("18px monospace 500"));
        assert_eq!(after.get("font"), Some("18px monospace 300"));
    }

    #[test]
    fn test_center_aligns_text() {
        let fragment = turbo()
            .base_typography(&TypographyProps::new().center())
            .unwrap();
        assert_eq!(fragment.get("text-align"), Some("center"));
        assert!(!fragment.has("align-items"));
    }

    #[test]
    fn test_common_props_come_first() {
        let props = TypographyProps::new().bg("world");
        let fragment = turbo().base_typography(&props).unwrap();
        let order: Vec<_> = fragment.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(order, vec!["background-color", "padding", "color", "font"]);
    }

    #[test]
    fn test_unknown_weight_is_error() {
        let err = turbo()
            .base_typography(&TypographyProps::new().weight("black"))
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::UnknownWeight {
                family: "mono".to_string(),
                weight: "black".to_string()
            }
        );
    }

    #[test]
    fn test_non_finite_size_falls_back_to_default() {
        let props = TypographyProps::new().size(f64::NAN);
        let fragment = turbo().base_typography(&props).unwrap();
        assert_eq!(fragment.get("font"), Some("18px monospace 500"));
    }
}
