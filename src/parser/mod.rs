mod grammar;

use crate::deparam::deparam;
use crate::error::{ParseError, Result};
use crate::url_parts::UrlParts;
use crate::value::Map;

/// URL parser with its options.
///
/// The current location stands in for the URL when none is given, the way a
/// browser page would default to its own address.
///
/// # Examples
///
/// ```
/// use urlkit::Parser;
///
/// let parser = Parser::new()
///     .with_anchor_params(true)
///     .with_location("https://example.com/app#tab=2");
///
/// let here = parser.parse_location()?;
/// assert_eq!(here.host.as_deref(), Some("example.com"));
/// assert!(here.anchor_params.is_some_and(|p| p.contains_key("tab")));
/// # Ok::<(), urlkit::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    include_anchor_params: bool,
    location: Option<String>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also decode the fragment into `anchor_params`
    #[must_use]
    pub fn with_anchor_params(mut self, include: bool) -> Self {
        self.include_anchor_params = include;
        self
    }

    /// URL used when no input is given
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Parse `input`; an empty input falls back to the current location
    pub fn parse(&self, input: &str) -> Result<UrlParts> {
        if input.is_empty() {
            return self.parse_location();
        }
        self.parse_components(input)
    }

    /// Parse the current location
    pub fn parse_location(&self) -> Result<UrlParts> {
        let location = self
            .location
            .as_deref()
            .filter(|location| !location.is_empty())
            .ok_or(ParseError::NoDefaultLocation)?;
        self.parse_components(location)
    }

    fn parse_components(&self, input: &str) -> Result<UrlParts> {
        log::trace!("parsing {input:?}");
        let mut parts = grammar::match_components(input)?;

        let file = parts.file.as_deref().unwrap_or_default();
        let (filename, file_ext) = file.rsplit_once('.').unwrap_or((file, ""));
        let (filename, file_ext) = (filename.to_string(), file_ext.to_string());
        parts.filename = Some(filename);
        parts.file_ext = Some(file_ext);

        parts.params = Some(decode_params(parts.query.as_deref()));
        if self.include_anchor_params {
            parts.anchor_params = Some(decode_params(parts.anchor.as_deref()));
        }

        Ok(parts)
    }
}

fn decode_params(text: Option<&str>) -> Map {
    match text {
        Some(text) if !text.is_empty() => deparam(text, true),
        _ => Map::new(),
    }
}

/// Parse a URL into its components.
///
/// `None` (or an empty string) means "the current location"; without a
/// configured location that fails with [`ParseError::NoDefaultLocation`].
/// Use [`Parser::with_location`] to supply one.
///
/// # Examples
///
/// ```
/// let parts = urlkit::parse(Some("https://example.com/a/b.tar.gz?x=1"), false)?;
/// assert_eq!(parts.filename.as_deref(), Some("b.tar"));
/// assert_eq!(parts.file_ext.as_deref(), Some("gz"));
///
/// assert_eq!(
///     urlkit::parse(None, false),
///     Err(urlkit::ParseError::NoDefaultLocation)
/// );
/// # Ok::<(), urlkit::ParseError>(())
/// ```
pub fn parse(input: Option<&str>, include_anchor_params: bool) -> Result<UrlParts> {
    let parser = Parser::new().with_anchor_params(include_anchor_params);
    match input {
        Some(input) => parser.parse(input),
        None => parser.parse_location(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_parse_basic() {
        let parts = parse(Some("http://example.com/path?a=1#frag"), false).unwrap();
        assert_eq!(parts.protocol.as_deref(), Some("http"));
        assert_eq!(parts.host.as_deref(), Some("example.com"));
        assert_eq!(parts.path.as_deref(), Some("/path"));
        assert_eq!(parts.query.as_deref(), Some("a=1"));
        assert_eq!(parts.anchor.as_deref(), Some("frag"));
        assert_eq!(parts.anchor_params, None);
    }

    #[test]
    fn test_filename_split() {
        let parts = parse(Some("a/b/c.tar.gz"), false).unwrap();
        assert_eq!(parts.filename.as_deref(), Some("c.tar"));
        assert_eq!(parts.file_ext.as_deref(), Some("gz"));

        let parts = parse(Some("a/b/noext"), false).unwrap();
        assert_eq!(parts.filename.as_deref(), Some("noext"));
        assert_eq!(parts.file_ext.as_deref(), Some(""));
    }

    #[test]
    fn test_params_are_coerced() {
        let parts = parse(Some("/p?n=5&ok=false&s=text"), false).unwrap();
        let params = parts.params.unwrap();
        assert_eq!(params["n"], Value::Number(5.0));
        assert_eq!(params["ok"], Value::Bool(false));
        assert_eq!(params["s"], Value::from("text"));
    }

    #[test]
    fn test_anchor_params_come_from_fragment() {
        let parts = parse(Some("/p?q=1#tab=2"), true).unwrap();
        let anchor_params = parts.anchor_params.unwrap();
        assert_eq!(anchor_params.len(), 1);
        assert_eq!(anchor_params["tab"], Value::Number(2.0));

        let parts = parse(Some("/p#tab=2"), true).unwrap();
        assert_eq!(parts.anchor_params.unwrap()["tab"], Value::Number(2.0));
    }

    #[test]
    fn test_location_fallback() {
        let parser = Parser::new().with_location("http://here.test/x");
        assert_eq!(
            parser.parse("").unwrap().host.as_deref(),
            Some("here.test")
        );
        assert_eq!(Parser::new().parse(""), Err(ParseError::NoDefaultLocation));
        assert_eq!(
            Parser::new().with_location("").parse_location(),
            Err(ParseError::NoDefaultLocation)
        );
    }
}
