//! Binding resolvers to a selector.

use std::fmt;

use super::TurboProps;
use crate::error::LookupError;
use crate::style::StyleFragment;

type Resolver<'a, P> =
    Box<dyn Fn(&TurboProps, &P) -> Result<StyleFragment, LookupError> + Send + Sync + 'a>;

enum Part<'a, P> {
    Resolver(Resolver<'a, P>),
    Static(StyleFragment),
}

/// A component style: resolvers and static declarations applied in order
/// under one selector.
///
/// # Example
///
/// ```rust
/// use turbo_props::{CommonBuilder, DefaultSizes, Defaults, LayoutProps, Theme, TurboProps};
///
/// let theme = Theme::new(8.0)
///     .add_color("brand", "red")
///     .add_size("m", 16.0)
///     .add_font("mono", "regular", "monospace 500");
/// let tp = TurboProps::new(theme, Defaults::new("brand", "mono", "regular", DefaultSizes::uniform("m")))
///     .unwrap();
///
/// let row = tp
///     .styled::<LayoutProps>(".row")
///     .with_css(tp.css("display: flex;").unwrap())
///     .with(TurboProps::row_layout);
///
/// let rule = row.render(&LayoutProps::new().grow()).unwrap();
/// assert_eq!(
///     rule.to_string(),
///     ".row {\n  display: flex;\n  flex: 1;\n  padding: 0px 0px;\n  flex-direction: row;\n}"
/// );
/// ```
pub struct StyledComponent<'a, P> {
    turbo: &'a TurboProps,
    selector: String,
    parts: Vec<Part<'a, P>>,
}

impl<'a, P> StyledComponent<'a, P> {
    pub(crate) fn new(turbo: &'a TurboProps, selector: String) -> Self {
        Self {
            turbo,
            selector,
            parts: Vec::new(),
        }
    }

    /// Appends a resolver run against the props at render time.
    pub fn with<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&TurboProps, &P) -> Result<StyleFragment, LookupError> + Send + Sync + 'a,
    {
        self.parts.push(Part::Resolver(Box::new(resolver)));
        self
    }

    /// Appends declarations that do not depend on props.
    pub fn with_css(mut self, fragment: StyleFragment) -> Self {
        self.parts.push(Part::Static(fragment));
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Resolves every part for `props` and concatenates the results.
    pub fn fragment(&self, props: &P) -> Result<StyleFragment, LookupError> {
        let mut fragment = StyleFragment::new();
        for part in &self.parts {
            match part {
                Part::Resolver(resolve) => fragment.extend(resolve(self.turbo, props)?),
                Part::Static(declarations) => fragment.extend(declarations.iter().cloned()),
            }
        }
        Ok(fragment)
    }

    /// Resolves the component into a rule for `props`.
    pub fn render(&self, props: &P) -> Result<StyleRule, LookupError> {
        Ok(StyleRule {
            selector: self.selector.clone(),
            fragment: self.fragment(props)?,
        })
    }
}

impl<P> fmt::Debug for StyledComponent<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledComponent")
            .field("selector", &self.selector)
            .field("parts", &self.parts.len())
            .finish()
    }
}

/// A selector with its resolved declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub fragment: StyleFragment,
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.fragment {
            writeln!(f, "  {declaration}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::turbo;
    use super::*;
    use crate::props::{CommonBuilder, LayoutProps, TypographyProps};

    #[test]
    fn test_empty_component_renders_empty_rule() {
        let tp = turbo();
        let rule = tp.styled::<LayoutProps>(".empty").render(&LayoutProps::new()).unwrap();
        assert_eq!(rule.to_string(), ".empty {\n}");
    }

    #[test]
    fn test_parts_apply_in_order() {
        let tp = turbo();
        let column = tp
            .styled::<LayoutProps>(".column")
            .with(TurboProps::base_layout)
            .with(|tp, props| Ok(tp.base_column_layout(props)));

        let fragment = column.fragment(&LayoutProps::new().size(20.0)).unwrap();
        let order: Vec<_> = fragment.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(order, vec!["padding", "flex-direction", "width"]);
    }

    #[test]
    fn test_resolver_errors_propagate() {
        let tp = turbo();
        let text = tp
            .styled::<TypographyProps>("p")
            .with(TurboProps::base_typography);
        let err = text.render(&TypographyProps::new().color("plaid")).unwrap_err();
        assert!(matches!(err, LookupError::UnknownColor { .. }));
    }

    #[test]
    fn test_custom_resolver_reads_theme() {
        let tp = turbo();
        let card = tp.styled::<LayoutProps>(".card").with(|tp, _| {
            let gap = tp.use_theme().grid() * 2.0;
            Ok(StyleFragment::new().declare("gap", format!("{gap}px")))
        });
        let rule = card.render(&LayoutProps::new().grow()).unwrap();
        assert_eq!(rule.fragment.get("gap"), Some("16px"));
        assert_eq!(rule.selector, ".card");
    }

    #[test]
    fn test_component_is_reusable() {
        let tp = turbo();
        let layout = tp.styled::<LayoutProps>(".l").with(TurboProps::base_layout);
        let a = layout.render(&LayoutProps::new().bg("brand")).unwrap();
        let b = layout.render(&LayoutProps::new().bg("world")).unwrap();
        assert_eq!(a.fragment.get("background-color"), Some("red"));
        assert_eq!(b.fragment.get("background-color"), Some("black"));
    }
}
