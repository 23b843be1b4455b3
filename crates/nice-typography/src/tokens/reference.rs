//! Parsing of `var()` references inside token values.

use cssparser::{ParseError, Parser, ParserInput};

/// Returns the custom property a value refers to, if the whole value is a
/// single `var(--name)` or `var(--name, fallback)` reference.
///
/// # Example
///
/// ```rust
/// use nice_typography::parse_var_reference;
///
/// assert_eq!(
///     parse_var_reference("var(--font-family-base)").as_deref(),
///     Some("--font-family-base")
/// );
/// assert_eq!(parse_var_reference("1.25rem"), None);
/// assert_eq!(parse_var_reference("calc(var(--a) * 2)"), None);
/// ```
pub fn parse_var_reference(value: &str) -> Option<String> {
    split_var_reference(value).map(|(name, _)| name)
}

/// Splits a whole-value `var()` reference into its custom property and
/// the fallback text after the first comma, if any.
pub(crate) fn split_var_reference(value: &str) -> Option<(String, Option<&str>)> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let (name, fallback) = parser.try_parse(parse_var).ok()?;
    if !parser.is_exhausted() || !name.starts_with("--") {
        return None;
    }
    Some((name, fallback))
}

fn parse_var<'i, 't>(
    parser: &mut Parser<'i, 't>,
) -> Result<(String, Option<&'i str>), ParseError<'i, ()>> {
    parser.expect_function_matching("var")?;
    parser.parse_nested_block(|block| {
        let name = block.expect_ident()?.to_string();
        let fallback = match block.try_parse(|block| block.expect_comma()) {
            Ok(()) => {
                let start = block.position();
                while block.next().is_ok() {}
                Some(block.slice_from(start).trim())
            }
            Err(_) => {
                while block.next().is_ok() {}
                None
            }
        };
        Ok((name, fallback))
    })
}
