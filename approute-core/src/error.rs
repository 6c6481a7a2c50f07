//! Error types for approute.
//!
//! This module provides the error hierarchy using `thiserror`:
//!
//! - [`UriError`] - Why a string could not be parsed as a URI
//! - [`InvalidPatternError`] - A route pattern was rejected at registration
//!
//! Routing itself never fails: "not routable" and "nothing matched" are
//! plain `bool` results on the [`Router`](crate::Router) trait.

use thiserror::Error;

/// Errors produced by [`parse_uri`](crate::parse_uri).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// A character outside the RFC 3986 character set was found.
    #[error("invalid character {ch:?} at byte {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset into the input.
        position: usize,
    },

    /// A `%` was not followed by two hexadecimal digits.
    #[error("malformed percent-encoding at byte {position}")]
    InvalidPercentEncoding {
        /// Byte offset of the `%`.
        position: usize,
    },

    /// The text before the first `:` is not a valid scheme.
    #[error("invalid scheme: {0:?}")]
    InvalidScheme(String),

    /// A path segment did not decode to valid UTF-8.
    #[error("path segment {0:?} does not decode to UTF-8")]
    InvalidUtf8(String),
}

/// A route pattern could not be parsed as a URI.
///
/// Returned by `add_route` and by builder `build` calls. Patterns that parse
/// but carry no scheme are not errors; they are ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid route pattern `{pattern}`")]
pub struct InvalidPatternError {
    pattern: String,
    #[source]
    source: UriError,
}

impl InvalidPatternError {
    /// Create a new error for `pattern`.
    pub fn new(pattern: impl Into<String>, source: UriError) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    /// The pattern text that was rejected.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The underlying parse failure.
    pub fn uri_error(&self) -> &UriError {
        &self.source
    }
}
