//! Error types for the media type crate.

use thiserror::Error;

/// The main error type for the media type crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input does not conform to the media type grammar
    #[error("not a media type: {input:?}")]
    NotAMediaType {
        /// The rejected input, exactly as supplied
        input: String,
    },

    /// The configured grammar matched, but exposed none of the named
    /// capture groups the parser reads from.
    #[error("media type match regex is broken: expected named capture groups are missing")]
    MediaTypeMatchRegexIsBroken,

    /// A parameter value holds characters the grammar cannot express, even
    /// inside quotes
    #[error("parameter {name:?} has a value that cannot be written as a media type: {value:?}")]
    UnrepresentableParameter {
        /// The parameter name
        name: String,
        /// The offending value
        value: String,
    },

    /// A custom grammar pattern failed to compile
    #[error("invalid media type grammar: {0}")]
    InvalidGrammar(#[from] regex::Error),
}

impl Error {
    pub(crate) fn not_a_media_type(input: &str) -> Self {
        tracing::debug!(input, "rejected input that is not a media type");
        Error::NotAMediaType {
            input: input.to_string(),
        }
    }

    pub(crate) fn regex_is_broken() -> Self {
        tracing::error!("media type grammar matched without exposing its named capture groups");
        Error::MediaTypeMatchRegexIsBroken
    }

    /// Returns the offending input for `NotAMediaType` errors.
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::NotAMediaType { input } => Some(input),
            _ => None,
        }
    }
}

/// Specialized Result type for media type operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error-handling policy accepted by every fallible entry point.
///
/// The policy receives the error the library is about to return and
/// hands back the error that is actually returned. It may log, wrap or
/// rewrite it, but it cannot turn a failure into a success.
pub trait OnError: FnOnce(Error) -> Error {}

impl<F> OnError for F where F: FnOnce(Error) -> Error {}

/// The default policy: return the error to the caller untouched.
pub fn throw_the_error(err: Error) -> Error {
    err
}
