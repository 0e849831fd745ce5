//! Content types: media types with their parameters stripped.

use crate::error::{throw_the_error, Result};
use crate::parser::MediaTypeParser;
use crate::value::MediaType;
use std::fmt;

/// The `type/[tree.]subtype[+suffix]` part of a media type, case-folded.
///
/// Only the parser creates these, so a `ContentType` always came out of the
/// media type grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentType(String);

impl ContentType {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the content type as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ContentType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ContentType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.0
    }
}

/// Gets the `text/html` bit from `text/html; charset=UTF-8`.
///
/// The result is always lower-case.
///
/// # Examples
///
/// ```
/// use rfc_mediatype::parse_content_type;
///
/// let content_type = parse_content_type("Application/Vnd.OAI.OpenAPI+JSON; version=3.0").unwrap();
/// assert_eq!(content_type, "application/vnd.oai.openapi+json");
/// ```
pub fn parse_content_type(input: &str) -> Result<ContentType> {
    MediaTypeParser::shared().parse_content_type(input, throw_the_error)
}

/// Extracts the content type from an already-validated [`MediaType`].
///
/// Use [`MediaTypeParser::content_type_from_media_type`] to supply a
/// different grammar or error policy.
pub fn content_type_from_media_type(input: &MediaType) -> Result<ContentType> {
    MediaTypeParser::shared().content_type_from_media_type(input, throw_the_error)
}
