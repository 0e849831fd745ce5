//! Content type matching.

use crate::error::Result;
use crate::value::MediaType;

/// Reports whether `input` has the same content type as any of `expected`.
///
/// Parameters on both sides are ignored, so `text/html; charset=UTF-8`
/// matches `text/html; param1=value1`. An empty `expected` never matches.
///
/// # Errors
///
/// Only the errors of [`MediaType::content_type`], which never occur with
/// the shipped grammar.
///
/// # Examples
///
/// ```
/// use rfc_mediatype::{matches_content_type, MediaType};
///
/// let input = MediaType::new("text/html; charset=UTF-8").unwrap();
/// let expected = [
///     MediaType::new("application/json").unwrap(),
///     MediaType::new("text/html; param1=value1").unwrap(),
/// ];
/// assert!(matches_content_type(&input, &expected).unwrap());
/// ```
pub fn matches_content_type<'a, I>(input: &MediaType, expected: I) -> Result<bool>
where
    I: IntoIterator<Item = &'a MediaType>,
{
    let content_type = input.content_type()?;

    for candidate in expected {
        if candidate.content_type()? == content_type {
            return Ok(true);
        }
    }

    Ok(false)
}
