//! Validation, parsing and comparison of RFC 6838 media types.
//!
//! This crate provides:
//! - A regex grammar for media types and their parameters
//! - Validation (`is_media_type`) and parsing into `MediaTypeParts`
//! - Content type extraction: `application/vnd.oai.openapi+json` from
//!   `application/vnd.oai.openapi+json; version=3.0`
//! - The `MediaType` value type, with cached parse results
//! - Content type matching that ignores parameters
//!
//! ```
//! use rfc_mediatype::{matches_content_type, MediaType};
//!
//! let media_type = MediaType::new("application/vnd.oai.openapi+json; version=3.0").unwrap();
//! let parts = media_type.parse().unwrap();
//! assert_eq!(parts.tree.as_deref(), Some("vnd"));
//! assert_eq!(parts.subtype, "oai.openapi");
//! assert_eq!(parts.suffix.as_deref(), Some("json"));
//!
//! let expected = [MediaType::new("application/vnd.oai.openapi+json").unwrap()];
//! assert!(matches_content_type(&media_type, &expected).unwrap());
//! ```

pub mod error;
pub mod grammar;
pub mod parser;
pub mod media_type;
pub mod content_type;
pub mod refined;
pub mod value;
pub mod matcher;

// Re-export commonly used types
pub use error::{throw_the_error, Error, OnError, Result};
pub use parser::{lower_case, preserve_case, CaseConverter, MediaTypeParser};
pub use media_type::{is_media_type, must_be_media_type, parse_media_type, MediaTypeParts};
pub use content_type::{content_type_from_media_type, parse_content_type, ContentType};
pub use refined::{IsMediaType, RefinedString, Refinement};
pub use value::MediaType;
pub use matcher::matches_content_type;
