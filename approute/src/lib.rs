//! # approute - Scheme-Keyed URI Dispatcher
//!
//! `approute` routes deep links and in-app navigation URIs to callbacks.
//! Patterns are registered per scheme and may contain `:name` variables;
//! dispatching a URI invokes the first registered pattern whose segments all
//! match, passing it the extracted variables merged into caller parameters.
//!
//! ## Quick Start
//!
//! ```
//! use approute::prelude::*;
//!
//! let router = AppRouter::new();
//! router
//!     .add_route("app:/users/:user_id/followers", |params: &Params| {
//!         assert_eq!(params.get_str("user_id"), Some("123"));
//!     })
//!     .unwrap();
//!
//! assert!(router.can_route("app:/anything"));
//! assert!(router.route_url("app:/users/123/followers"));
//! ```
//!
//! ## Return Values
//!
//! `route_url` answers "was this a well-formed link for a known scheme?". It
//! returns `true` even when no pattern matched. If the caller needs to know
//! that a handler ran, the handler has to report it.
//!
//! ## Features
//!
//! - `tracing`: structured logging through the `tracing` crate.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use approute_core::{
    // Handler
    BoxHandler,
    Handler,
    // Error types
    InvalidPatternError,
    // Parameters
    Params,
    // URI primitives
    ParsedUri,
    // Patterns
    Pattern,
    // Router trait
    Router,
    Segment,
    UriError,
    Value,
    is_blank,
    parse_uri,
};

pub use approute_std::{AppRouter, AppRouterBuilder};

/// Standard handler wrappers.
pub mod handlers {
    pub use approute_std::handlers::LoggingHandler;
}

/// Testing utilities.
pub mod testing {
    pub use approute_std::testing::{CountingHandler, RecordingHandler};
}

/// Prelude module - common imports for approute.
///
/// # Usage
///
/// ```rust
/// use approute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AppRouter, AppRouterBuilder, Handler, InvalidPatternError, Params, Router, Value,
    };
}
