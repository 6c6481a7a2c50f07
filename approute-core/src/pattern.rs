//! Route patterns and segment matching.

use crate::{
    error::InvalidPatternError,
    uri::{ParsedUri, parse_uri},
};
use std::fmt;

/// One path segment of a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches only the identical input segment.
    Literal(String),
    /// Matches any input segment and binds it under this name.
    Variable(String),
}

impl Segment {
    /// Classify a raw segment: a leading `:` marks a variable.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(name) => Segment::Variable(name.to_string()),
            None => Segment::Literal(raw.to_string()),
        }
    }
}

/// A compiled route pattern such as `app:/users/:user_id/followers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    scheme: Option<String>,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse `source` into a pattern.
    ///
    /// Succeeds for any well-formed URI, including ones without a scheme;
    /// callers decide what to do with a blank [`scheme`](Self::scheme).
    pub fn parse(source: &str) -> Result<Self, InvalidPatternError> {
        let uri = parse_uri(source).map_err(|e| InvalidPatternError::new(source, e))?;
        Ok(Self::from_uri(source, uri))
    }

    fn from_uri(source: &str, uri: ParsedUri) -> Self {
        let scheme = uri.scheme().map(str::to_string);
        let segments = uri
            .into_segments()
            .iter()
            .map(String::as_str)
            .map(Segment::parse)
            .collect();
        Self {
            source: source.to_string(),
            scheme,
            segments,
        }
    }

    /// The text this pattern was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The scheme of the pattern, if any.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The path segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the variables in this pattern, in path order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match `input` segment by segment.
    ///
    /// Returns the variable bindings on success. Fails immediately when the
    /// segment counts differ, and a pattern without segments never matches.
    pub fn matches<S: AsRef<str>>(&self, input: &[S]) -> Option<Vec<(String, String)>> {
        if self.segments.is_empty() || self.segments.len() != input.len() {
            return None;
        }

        let mut bindings = Vec::new();
        for (segment, actual) in self.segments.iter().zip(input) {
            let actual = actual.as_ref();
            match segment {
                Segment::Variable(name) => bindings.push((name.clone(), actual.to_string())),
                Segment::Literal(expected) if expected == actual => {}
                Segment::Literal(_) => return None,
            }
        }
        Some(bindings)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
