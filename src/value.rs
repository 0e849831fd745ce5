//! The `MediaType` value type.

use crate::content_type::{content_type_from_media_type, ContentType};
use crate::error::{throw_the_error, Error, OnError, Result};
use crate::media_type::{parse_media_type, MediaTypeParts};
use crate::refined::{IsMediaType, RefinedString};
use once_cell::sync::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An RFC 6838 media type string, validated on construction.
///
/// The original string is kept exactly as supplied. Its parsed parts and
/// its content type are worked out the first time they are asked for and
/// cached for the life of the value.
///
/// # Examples
///
/// ```
/// use rfc_mediatype::MediaType;
///
/// let media_type = MediaType::new("text/html; charset=UTF-8").unwrap();
/// assert_eq!(media_type.as_str(), "text/html; charset=UTF-8");
/// assert_eq!(media_type.content_type().unwrap(), "text/html");
/// assert_eq!(media_type.parse().unwrap().parameter("charset"), Some("UTF-8"));
/// ```
#[derive(Clone)]
pub struct MediaType {
    value: RefinedString<IsMediaType>,
    content_type: OnceCell<ContentType>,
    parsed: OnceCell<MediaTypeParts>,
}

impl MediaType {
    /// Smart constructor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAMediaType`] if `input` isn't a well-formed
    /// media type.
    pub fn new(input: impl Into<String>) -> Result<Self> {
        Self::with_on_error(input, throw_the_error)
    }

    /// Smart constructor that hands any validation failure to `on_error`.
    pub fn with_on_error(input: impl Into<String>, on_error: impl OnError) -> Result<Self> {
        Ok(Self {
            value: RefinedString::new(input, on_error)?,
            content_type: OnceCell::new(),
            parsed: OnceCell::new(),
        })
    }

    /// Returns the media type exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Unwraps the original string.
    pub fn into_string(self) -> String {
        self.value.into_string()
    }

    /// Gets the `text/html` bit from `text/html; charset=UTF-8`.
    ///
    /// Repeated calls return the same cached value.
    ///
    /// # Errors
    ///
    /// Never fails with the shipped grammar: construction already checked
    /// the value against it. The `Result` carries
    /// [`Error::MediaTypeMatchRegexIsBroken`] should the grammar regress.
    pub fn content_type(&self) -> Result<&ContentType> {
        self.content_type.get_or_try_init(|| {
            tracing::trace!(media_type = self.as_str(), "extracting content type");
            content_type_from_media_type(self)
        })
    }

    /// Returns a breakdown of the individual parts of this media type.
    ///
    /// Repeated calls return a reference to the same cached value.
    ///
    /// # Errors
    ///
    /// Never fails with the shipped grammar, for the same reason as
    /// [`content_type`](Self::content_type).
    pub fn parse(&self) -> Result<&MediaTypeParts> {
        self.parsed.get_or_try_init(|| {
            tracing::trace!(media_type = self.as_str(), "parsing media type");
            parse_media_type(self.as_str())
        })
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MediaType").field(&self.as_str()).finish()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for MediaType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for MediaType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.into_string()
    }
}
