//! # approute-core
//!
//! Core contracts for the approute URI dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that registers or consumes routes without caring which router
//! implementation backs them.
//!
//! # Pieces
//!
//! - [`Handler`] - the callback attached to a route
//! - [`Router`] - the dispatch interface (`can_route`, `route_url`)
//! - [`Pattern`] / [`Segment`] - compiled route patterns and matching
//! - [`Params`] / [`Value`] - parameter maps passed to handlers
//! - [`parse_uri`] / [`is_blank`] - URI splitting primitives
//!
//! # Error Types
//!
//! - [`InvalidPatternError`] - a pattern was not a valid URI
//! - [`UriError`] - the underlying parse failure

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod params;
mod pattern;
mod router;
mod uri;

// Re-exports
pub use error::{InvalidPatternError, UriError};
pub use handler::{BoxHandler, Handler};
pub use params::{Params, Value};
pub use pattern::{Pattern, Segment};
pub use router::Router;
pub use uri::{ParsedUri, is_blank, parse_uri};
