//! The media type grammar.
//!
//! Media type names follow the RFC 6838 `restricted-name` rules; parameter
//! names and unquoted values are RFC 2045 tokens.
//!
//! The named capture groups (`type`, `tree`, `subtype`, `suffix`,
//! `contentType`, `parameterName`, `parameterValueA`, `parameterValueB`)
//! are the contract between the grammar and the parser. Anyone supplying a
//! custom grammar through [`MediaTypeParser`](crate::MediaTypeParser) must
//! keep them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a whole media type, optionally followed by its parameters.
///
/// The `contentType` group spans `type/[tree.]subtype[+suffix]` exactly.
pub const MEDIA_TYPE_MATCH_PATTERN: &str = r#"^(?P<contentType>(?P<type>[A-Za-z0-9][A-Za-z0-9!#$&^_-]*)/(?:(?P<tree>[A-Za-z0-9][A-Za-z0-9!#$&^_-]*)\.)?(?P<subtype>[A-Za-z0-9][A-Za-z0-9!#$&^_.-]*)(?:\+(?P<suffix>[A-Za-z0-9][A-Za-z0-9!#$&^_-]*))?)(?:[ \t]*;[ \t]*[!#$%&'*+.0-9A-Z^_`a-z{|}~-]+=(?:[!#$%&'*+.0-9A-Z^_`a-z{|}~-]+|"[^"\x00-\x08\x0A-\x1F\x7F]*"))*$"#;

/// Matches a single `; name=value` or `; name="value"` parameter.
///
/// Apply it repeatedly to enumerate every parameter of a media type.
pub const MEDIA_TYPE_PARAM_PATTERN: &str = r#";[ \t]*(?P<parameterName>[!#$%&'*+.0-9A-Z^_`a-z{|}~-]+)=(?:(?P<parameterValueA>[!#$%&'*+.0-9A-Z^_`a-z{|}~-]+)|"(?P<parameterValueB>[^"\x00-\x08\x0A-\x1F\x7F]*)")"#;

/// Compiled [`MEDIA_TYPE_MATCH_PATTERN`].
pub static MEDIA_TYPE_MATCH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(MEDIA_TYPE_MATCH_PATTERN).expect("media type match pattern compiles")
});

/// Compiled [`MEDIA_TYPE_PARAM_PATTERN`].
pub static MEDIA_TYPE_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(MEDIA_TYPE_PARAM_PATTERN).expect("media type parameter pattern compiles")
});

/// Reports whether the character is in 'tspecials' as defined by RFC 1521 and RFC 2045.
///
/// tspecials := "(" / ")" / "<" / ">" / "@" / "," / ";" / ":" / "\" / <"> / "/" / "[" / "]" / "?" / "="
pub fn is_tspecial(c: char) -> bool {
    matches!(c, '(' | ')' | '<' | '>' | '@' | ',' | ';' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '=')
}

/// Reports whether the character is in 'token' as defined by RFC 1521 and RFC 2045.
///
/// token := 1*<any (US-ASCII) CHAR except SPACE, CTLs, or tspecials>
pub fn is_token_char(c: char) -> bool {
    c > '\x20' && c < '\x7f' && !is_tspecial(c)
}

/// Reports whether the string is a valid 'token' as defined by RFC 1521 and RFC 2045.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Reports whether the character may appear between the quotes of a quoted
/// parameter value: anything except `"` and control characters other than tab.
pub fn is_qtext_char(c: char) -> bool {
    c != '"' && (c == '\t' || (c >= ' ' && c != '\x7f'))
}

/// Reports whether the string can be written as a quoted parameter value.
///
/// There is no escape syntax, so a value holding `"` cannot be quoted.
pub fn is_quotable(s: &str) -> bool {
    s.chars().all(is_qtext_char)
}
