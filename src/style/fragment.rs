//! Style fragments: ordered CSS declarations.

use std::fmt;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// The output of a resolver: declarations in emission order.
///
/// Fragments never deduplicate. When two declarations share a property the
/// later one wins in the cascade, and [`get`](Self::get) mirrors that by
/// returning the last value.
///
/// # Example
///
/// ```rust
/// use turbo_props::StyleFragment;
///
/// let fragment = StyleFragment::new()
///     .declare("flex", "1")
///     .declare("padding", "0px 0px");
///
/// assert_eq!(fragment.to_string(), "flex: 1;\npadding: 0px 0px;");
/// assert_eq!(fragment.get("flex"), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleFragment {
    declarations: Vec<Declaration>,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration, returning the fragment for chaining.
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    /// Appends a declaration in place.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration::new(property, value));
    }

    /// Appends every declaration of `other` after this fragment's own.
    pub fn then(mut self, other: StyleFragment) -> Self {
        self.declarations.extend(other.declarations);
        self
    }

    /// Returns the effective value of a property (the last one declared).
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn has(&self, property: &str) -> bool {
        self.declarations.iter().any(|d| d.property == property)
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{declaration}")?;
        }
        Ok(())
    }
}

impl FromIterator<Declaration> for StyleFragment {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Declaration> for StyleFragment {
    fn extend<I: IntoIterator<Item = Declaration>>(&mut self, iter: I) {
        self.declarations.extend(iter);
    }
}

impl IntoIterator for StyleFragment {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleFragment {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

/// Formats a pixel magnitude (`18` becomes `18px`, `6.5` becomes `6.5px`).
pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragment_renders_nothing() {
        let fragment = StyleFragment::new();
        assert!(fragment.is_empty());
        assert_eq!(fragment.to_string(), "");
    }

    #[test]
    fn test_get_returns_last_declaration() {
        let fragment = StyleFragment::new()
            .declare("flex", "1")
            .declare("flex", "2");
        assert_eq!(fragment.get("flex"), Some("2"));
        assert_eq!(fragment.len(), 2);
    }

    #[test]
    fn test_get_missing_property() {
        let fragment = StyleFragment::new().declare("flex", "1");
        assert_eq!(fragment.get("width"), None);
        assert!(!fragment.has("width"));
    }

    #[test]
    fn test_then_keeps_order() {
        let a = StyleFragment::new().declare("a", "1");
        let b = StyleFragment::new().declare("b", "2").declare("c", "3");
        let joined = a.then(b);
        let props: Vec<_> = joined.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(props, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collect_from_declarations() {
        let fragment: StyleFragment = vec![Declaration::new("width", "8px")]
            .into_iter()
            .collect();
        assert_eq!(fragment.to_string(), "width: 8px;");
    }

    #[test]
    fn test_px_formats_whole_and_fractional() {
        assert_eq!(px(18.0), "18px");
        assert_eq!(px(0.0), "0px");
        assert_eq!(px(6.5), "6.5px");
    }
}
