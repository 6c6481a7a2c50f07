//! URI splitting for route patterns and dispatched links.
//!
//! Only the parts the router needs are extracted: the scheme, the authority
//! (kept for diagnostics) and the decoded, non-empty path segments. Query and
//! fragment are dropped.
//!
//! The accepted grammar is a strict subset of RFC 3986:
//!
//! - every character must be unreserved, reserved or `%`
//! - `%` must introduce two hex digits
//! - a scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
//! - `scheme:opaque` (no `/` after the colon) has no path segments

use crate::error::UriError;

/// The components of a parsed URI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUri {
    scheme: Option<String>,
    authority: Option<String>,
    segments: Vec<String>,
}

impl ParsedUri {
    /// The scheme, if the input had one. May be empty for input like `":x"`.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The authority following `//`, if any.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Decoded path segments, never empty strings.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Consume and return the path segments.
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

/// Returns `true` for `None` or an empty string.
pub fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(str::is_empty)
}

/// Parse `input` into a [`ParsedUri`].
///
/// # Example
///
/// ```
/// use approute_core::parse_uri;
///
/// let uri = parse_uri("app:/users/:user_id/followers").unwrap();
/// assert_eq!(uri.scheme(), Some("app"));
/// assert_eq!(uri.segments(), ["users", ":user_id", "followers"]);
/// ```
pub fn parse_uri(input: &str) -> Result<ParsedUri, UriError> {
    validate_characters(input)?;

    let (scheme, rest) = split_scheme(input)?;

    // Query and fragment never take part in routing.
    let rest = match rest.find(['?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let (authority, path) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            (Some(after[..end].to_string()), &after[end..])
        }
        None => (None, rest),
    };

    // `scheme:opaque` carries no hierarchical path.
    let opaque = scheme.is_some() && authority.is_none() && !path.starts_with('/');

    let segments = if opaque {
        Vec::new()
    } else {
        path.split('/')
            .filter(|piece| !piece.is_empty())
            .map(decode_segment)
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(ParsedUri {
        scheme: scheme.map(str::to_string),
        authority,
        segments,
    })
}

fn split_scheme(input: &str) -> Result<(Option<&str>, &str), UriError> {
    match input.find([':', '/', '?', '#']) {
        Some(idx) if input.as_bytes()[idx] == b':' => {
            let scheme = &input[..idx];
            if !scheme.is_empty() && !is_valid_scheme(scheme) {
                return Err(UriError::InvalidScheme(scheme.to_string()));
            }
            Ok((Some(scheme), &input[idx + 1..]))
        }
        _ => Ok((None, input)),
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn validate_characters(input: &str) -> Result<(), UriError> {
    let bytes = input.as_bytes();
    for (position, ch) in input.char_indices() {
        if ch == '%' {
            let well_formed = bytes
                .get(position + 1..position + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(UriError::InvalidPercentEncoding { position });
            }
        } else if !is_uri_char(ch) {
            return Err(UriError::InvalidCharacter { ch, position });
        }
    }
    Ok(())
}

fn is_uri_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            // unreserved
            '-' | '.' | '_' | '~'
            // gen-delims
            | ':' | '/' | '?' | '#' | '[' | ']' | '@'
            // sub-delims
            | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
        )
}

fn decode_segment(piece: &str) -> Result<String, UriError> {
    urlencoding::decode(piece)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| UriError::InvalidUtf8(piece.to_string()))
}
