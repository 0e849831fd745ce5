//! Validated string values.
//!
//! A [`RefinedString`] holds a string that passed its [`Refinement`] when
//! it was constructed. There is no way to build one that skipped the check,
//! and no way to change the value afterwards.

use crate::error::{OnError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A rule a string must satisfy to be wrapped in a [`RefinedString`].
pub trait Refinement {
    /// Returns an error describing why `input` does not satisfy the rule.
    fn check(input: &str) -> Result<()>;
}

/// An immutable string that satisfies the refinement `R`.
pub struct RefinedString<R> {
    value: String,
    _refinement: PhantomData<fn() -> R>,
}

impl<R: Refinement> RefinedString<R> {
    /// Checks `input` against `R`, handing any failure to `on_error`.
    pub fn new(input: impl Into<String>, on_error: impl OnError) -> Result<Self> {
        let value = input.into();
        match R::check(&value) {
            Ok(()) => Ok(Self {
                value,
                _refinement: PhantomData,
            }),
            Err(err) => Err(on_error(err)),
        }
    }
}

impl<R> RefinedString<R> {
    /// Returns the wrapped value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Unwraps the value.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<R> Clone for RefinedString<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _refinement: PhantomData,
        }
    }
}

impl<R> fmt::Debug for RefinedString<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefinedString").field(&self.value).finish()
    }
}

impl<R> fmt::Display for RefinedString<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<R> PartialEq for RefinedString<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for RefinedString<R> {}

impl<R> PartialOrd for RefinedString<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for RefinedString<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R> Hash for RefinedString<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R> AsRef<str> for RefinedString<R> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Refinement for RFC 6838 media type strings.
#[derive(Debug, Clone, Copy)]
pub struct IsMediaType;

impl Refinement for IsMediaType {
    fn check(input: &str) -> Result<()> {
        crate::media_type::must_be_media_type(input, crate::error::throw_the_error)
    }
}
