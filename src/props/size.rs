//! Tri-state size props and boolean-or-value toggles.

/// A size-like prop: the family default, a named theme size, or a literal
/// pixel value.
///
/// An absent prop is `None` at the props level; `SizeProp` only models the
/// three ways a present prop can be given.
///
/// ```rust
/// use turbo_props::SizeProp;
///
/// assert_eq!(SizeProp::from("m-18"), SizeProp::Named("m-18".to_string()));
/// assert_eq!(SizeProp::from(20), SizeProp::Literal(20.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SizeProp {
    /// Use the size named by the matching entry of `Defaults::sizes`
    Default,
    /// A size looked up in `theme.sizes`
    Named(String),
    /// A literal magnitude in pixels
    Literal(f64),
}

impl SizeProp {
    /// The theme size name this prop refers to, substituting `default` for
    /// [`SizeProp::Default`]. Literals have no name.
    pub fn name<'a>(&'a self, default: &'a str) -> Option<&'a str> {
        match self {
            SizeProp::Default => Some(default),
            SizeProp::Named(name) => Some(name.as_str()),
            SizeProp::Literal(_) => None,
        }
    }
}

impl From<&str> for SizeProp {
    fn from(name: &str) -> Self {
        SizeProp::Named(name.to_string())
    }
}

impl From<String> for SizeProp {
    fn from(name: String) -> Self {
        SizeProp::Named(name)
    }
}

impl From<f64> for SizeProp {
    fn from(value: f64) -> Self {
        SizeProp::Literal(value)
    }
}

impl From<i32> for SizeProp {
    fn from(value: i32) -> Self {
        SizeProp::Literal(f64::from(value))
    }
}

/// A prop that is either switched on (meaning "center") or set to an
/// explicit keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle<T> {
    On,
    Value(T),
}

impl<T> From<T> for Toggle<T> {
    fn from(value: T) -> Self {
        Toggle::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_substitutes_default() {
        assert_eq!(SizeProp::Default.name("m-18"), Some("m-18"));
        assert_eq!(SizeProp::from("s-10").name("m-18"), Some("s-10"));
        assert_eq!(SizeProp::Literal(4.0).name("m-18"), None);
    }

    #[test]
    fn test_from_numbers() {
        assert_eq!(SizeProp::from(2.5), SizeProp::Literal(2.5));
        assert_eq!(SizeProp::from(-3), SizeProp::Literal(-3.0));
    }

    #[test]
    fn test_toggle_from_value() {
        let toggle: Toggle<&str> = "flex-end".into();
        assert_eq!(toggle, Toggle::Value("flex-end"));
    }
}
