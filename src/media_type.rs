//! Media type validation and parsing.
//!
//! Implements RFC 6838 media types, with RFC 2045 parameter syntax.

use crate::error::{throw_the_error, Error, OnError, Result};
use crate::grammar::{is_quotable, is_token};
use crate::parser::MediaTypeParser;
use indexmap::IndexMap;
use std::fmt;

/// The structural breakdown of a media type.
///
/// `application/vnd.oai.openapi+json; version=3.0` breaks down into type
/// `application`, tree `vnd`, subtype `oai.openapi`, suffix `json` and a
/// single `version` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTypeParts {
    /// The top-level type, e.g. `application`
    pub type_: String,
    /// The registration tree facet, e.g. `vnd`
    pub tree: Option<String>,
    /// The subtype, without its tree or suffix
    pub subtype: String,
    /// The structured syntax suffix, e.g. `json`
    pub suffix: Option<String>,
    /// Parameters in the order they first appear; `None` when there are none
    pub parameters: Option<IndexMap<String, String>>,
}

impl MediaTypeParts {
    /// Looks up a parameter value, ignoring the case of `name`.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Serializes the parts back into a media type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableParameter`] for the first parameter
    /// whose value holds a `"` or a control character other than tab. The
    /// grammar has no escape syntax, so such values cannot be written.
    pub fn format(&self) -> Result<String> {
        let unrepresentable = self
            .parameters
            .iter()
            .flatten()
            .find(|(_, value)| !is_token(value) && !is_quotable(value));

        match unrepresentable {
            Some((name, value)) => Err(Error::UnrepresentableParameter {
                name: name.clone(),
                value: value.clone(),
            }),
            None => Ok(self.to_string()),
        }
    }
}

/// Serializes the parts back into a media type.
///
/// Parameter values that are not RFC 2045 tokens are quoted, with no
/// escaping. A value that cannot be quoted makes formatting fail with
/// [`fmt::Error`]; use [`MediaTypeParts::format`] to get an error instead.
impl fmt::Display for MediaTypeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.type_)?;
        if let Some(tree) = &self.tree {
            write!(f, "{}.", tree)?;
        }
        f.write_str(&self.subtype)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "+{}", suffix)?;
        }

        for (name, value) in self.parameters.iter().flatten() {
            write!(f, "; {}=", name)?;
            if is_token(value) {
                f.write_str(value)?;
            } else if is_quotable(value) {
                write!(f, "\"{}\"", value)?;
            } else {
                return Err(fmt::Error);
            }
        }

        Ok(())
    }
}

/// Reports whether `input` is a well-formed media type.
///
/// # Examples
///
/// ```
/// use rfc_mediatype::is_media_type;
///
/// assert!(is_media_type("text/html; charset=UTF-8"));
/// assert!(!is_media_type("text"));
/// ```
pub fn is_media_type(input: &str) -> bool {
    MediaTypeParser::shared().is_media_type(input)
}

/// Data guard. Hands a [`NotAMediaType`](crate::Error::NotAMediaType)
/// error to `on_error` if `input` is not a well-formed media type.
pub fn must_be_media_type(input: &str, on_error: impl OnError) -> Result<()> {
    if is_media_type(input) {
        Ok(())
    } else {
        Err(on_error(Error::not_a_media_type(input)))
    }
}

/// Breaks a media type down into its individual parts.
///
/// Names are lower-cased; parameter values are kept as written.
///
/// # Examples
///
/// ```
/// use rfc_mediatype::parse_media_type;
///
/// let parts = parse_media_type("text/html; charset=UTF-8").unwrap();
/// assert_eq!(parts.type_, "text");
/// assert_eq!(parts.subtype, "html");
/// assert_eq!(parts.parameter("charset"), Some("UTF-8"));
/// ```
pub fn parse_media_type(input: &str) -> Result<MediaTypeParts> {
    MediaTypeParser::shared().parse_media_type(input, throw_the_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_media_type_full() {
        let parts = parse_media_type("application/vnd.oai.openapi+json; version=3.0").unwrap();
        assert_eq!(parts.type_, "application");
        assert_eq!(parts.tree.as_deref(), Some("vnd"));
        assert_eq!(parts.subtype, "oai.openapi");
        assert_eq!(parts.suffix.as_deref(), Some("json"));
        assert_eq!(parts.parameter("version"), Some("3.0"));
    }

    #[test]
    fn test_parse_media_type_quoted_value() {
        let quoted = parse_media_type(r#"text/plain; charset="us-ascii""#).unwrap();
        let unquoted = parse_media_type("text/plain; charset=us-ascii").unwrap();
        assert_eq!(quoted, unquoted);
        assert_eq!(quoted.parameter("charset"), Some("us-ascii"));
    }

    #[test]
    fn test_parse_media_type_rejects_invalid() {
        for input in ["text", "text/plain; boundary=123:456", "", "/plain", "text/", "text/plain;"] {
            let err = parse_media_type(input).unwrap_err();
            assert_eq!(err.input(), Some(input), "input {input:?}");
        }
    }

    #[test]
    fn test_parameter_lookup_ignores_case() {
        let parts = parse_media_type("text/html; charset=UTF-8").unwrap();
        assert_eq!(parts.parameter("CharSet"), Some("UTF-8"));
        assert_eq!(parts.parameter("boundary"), None);
    }

    #[test]
    fn test_must_be_media_type() {
        assert!(must_be_media_type("text/plain", throw_the_error).is_ok());

        let err = must_be_media_type("text", throw_the_error).unwrap_err();
        assert!(matches!(err, Error::NotAMediaType { .. }));
    }

    #[test]
    fn test_format_simple() {
        let parts = parse_media_type("application/vnd.tie-record+json").unwrap();
        assert_eq!(parts.to_string(), "application/vnd.tie-record+json");
    }

    #[test]
    fn test_format_with_params() {
        let parts = parse_media_type("Text/HTML;charset=UTF-8").unwrap();
        assert_eq!(parts.to_string(), "text/html; charset=UTF-8");
    }

    #[test]
    fn test_format_quotes_non_token_values() {
        let parts = parse_media_type(r#"text/plain; name="hello world""#).unwrap();
        assert_eq!(parts.to_string(), r#"text/plain; name="hello world""#);
    }

    #[test]
    fn test_format_output_parses_back() {
        let parts = parse_media_type(r#"multipart/form-data; boundary="a:b"; x=1"#).unwrap();
        assert_eq!(parse_media_type(&parts.to_string()).unwrap(), parts);
    }

    #[test]
    fn test_format_backslash_value_parses_back() {
        let parts = parse_media_type(r#"text/plain; name="a\b""#).unwrap();
        assert_eq!(parts.parameter("name"), Some(r"a\b"));

        let formatted = parts.format().unwrap();
        assert_eq!(formatted, r#"text/plain; name="a\b""#);
        assert_eq!(parse_media_type(&formatted).unwrap(), parts);
    }

    #[test]
    fn test_format_rejects_unrepresentable_values() {
        for value in ["a\"b", "line\nbreak"] {
            let mut parts = parse_media_type("text/plain").unwrap();
            parts.parameters = Some(IndexMap::from([("name".to_string(), value.to_string())]));

            assert_eq!(
                parts.format().unwrap_err(),
                Error::UnrepresentableParameter {
                    name: "name".to_string(),
                    value: value.to_string(),
                }
            );

            let mut out = String::new();
            assert!(fmt::write(&mut out, format_args!("{}", parts)).is_err());
        }
    }
}
