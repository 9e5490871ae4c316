//! Reading declaration text back into a [`StyleFragment`].

use cssparser::{Delimiter, ParseError, ParseErrorKind, Parser, ParserInput};

use super::fragment::{Declaration, StyleFragment};
use crate::error::CssError;

impl StyleFragment {
    /// Parses a block of `property: value;` declarations.
    ///
    /// Property names are lowercased; values are kept as written, minus
    /// surrounding whitespace. The trailing semicolon of the last
    /// declaration is optional and empty declarations (`;;`) are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turbo_props::StyleFragment;
    ///
    /// let fragment = StyleFragment::parse("display: flex; border: 1px solid rgb(0, 0, 0)").unwrap();
    /// assert_eq!(fragment.get("display"), Some("flex"));
    /// assert_eq!(fragment.get("border"), Some("1px solid rgb(0, 0, 0)"));
    /// ```
    pub fn parse(source: &str) -> Result<Self, CssError> {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let mut fragment = StyleFragment::new();

        while !parser.is_exhausted() {
            if parser.try_parse(|p| p.expect_semicolon()).is_ok() {
                continue;
            }
            let declaration = parser
                .parse_until_after(Delimiter::Semicolon, parse_declaration)
                .map_err(to_css_error)?;
            fragment.extend([declaration]);
        }

        Ok(fragment)
    }
}

fn parse_declaration<'i>(
    input: &mut Parser<'i, '_>,
) -> Result<Declaration, ParseError<'i, &'static str>> {
    let property = input.expect_ident()?.to_ascii_lowercase();
    input.expect_colon()?;

    let start = input.position();
    while input.next().is_ok() {}
    let value = input.slice_from(start).trim();
    if value.is_empty() {
        return Err(input.new_custom_error("empty value"));
    }

    Ok(Declaration::new(property, value))
}

fn to_css_error(err: ParseError<'_, &'static str>) -> CssError {
    let message = match err.kind {
        ParseErrorKind::Custom(message) => message.to_string(),
        ParseErrorKind::Basic(kind) => format!("{kind:?}"),
    };
    CssError {
        line: err.location.line + 1,
        column: err.location.column,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rendered_fragment() {
        let fragment = StyleFragment::new()
            .declare("padding", "18px 24px")
            .declare("background-color", "black");
        let parsed = StyleFragment::parse(&fragment.to_string()).unwrap();
        assert_eq!(parsed, fragment);
    }

    #[test]
    fn test_parse_lowercases_property() {
        let fragment = StyleFragment::parse("Text-Align: center;").unwrap();
        assert_eq!(fragment.get("text-align"), Some("center"));
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(StyleFragment::parse("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_skips_comments() {
        let fragment = StyleFragment::parse("/* row */ flex-direction: row;").unwrap();
        assert_eq!(fragment.get("flex-direction"), Some("row"));
    }

    #[test]
    fn test_parse_skips_empty_declarations() {
        let fragment = StyleFragment::parse("display: flex;; color: red;").unwrap();
        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment.get("color"), Some("red"));
    }

    #[test]
    fn test_parse_leading_semicolon() {
        let fragment = StyleFragment::parse("; color: red;").unwrap();
        assert_eq!(fragment.to_string(), "color: red;");
    }

    #[test]
    fn test_parse_trailing_semicolons() {
        let fragment = StyleFragment::parse("color: red; ;\n;").unwrap();
        assert_eq!(fragment.to_string(), "color: red;");
    }

    #[test]
    fn test_parse_only_semicolons() {
        assert!(StyleFragment::parse(";;;").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_colon() {
        let err = StyleFragment::parse("flex 1;").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_parse_empty_value() {
        let err = StyleFragment::parse("color: ;").unwrap_err();
        assert_eq!(err.message, "empty value");
    }

    #[test]
    fn test_parse_reports_line() {
        let err = StyleFragment::parse("flex: 1;\n\n42: nope;").unwrap_err();
        assert_eq!(err.line, 3);
    }
}
