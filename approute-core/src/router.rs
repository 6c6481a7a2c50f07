//! # Dispatch Interface (Router)
//!
//! A Router accepts a URI and dispatches it to at most one registered
//! handler. Registration is left to implementations; this trait only covers
//! the read side so that code consuming links does not need to know how the
//! table was built.
//!
//! # Return Values
//!
//! Both methods answer "is this a well-formed link for a scheme I know?".
//! [`Router::route_url_with_params`] returns `true` for such links even when
//! no pattern matched and no handler ran. Handlers that need to report
//! whether they fired must do it themselves.

use crate::params::Params;
use std::sync::Arc;

/// The dispatch interface.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot route URIs",
    label = "missing `Router` implementation",
    note = "Implement `Router` (or use `approute_std::AppRouter`)."
)]
pub trait Router: Send + Sync {
    /// `true` iff `url` parses, has a non-blank scheme, and that scheme has
    /// at least one registered route.
    fn can_route(&self, url: &str) -> bool;

    /// Dispatch `url`, merging extracted path variables into `params`.
    ///
    /// Returns `true` when the scheme is routable and the URI has at least
    /// one path segment, whether or not a pattern matched.
    fn route_url_with_params(&self, url: &str, params: Params) -> bool;

    /// Dispatch `url` with an empty initial parameter map.
    fn route_url(&self, url: &str) -> bool {
        self.route_url_with_params(url, Params::new())
    }
}

impl<R: Router + ?Sized> Router for &R {
    fn can_route(&self, url: &str) -> bool {
        (**self).can_route(url)
    }

    fn route_url_with_params(&self, url: &str, params: Params) -> bool {
        (**self).route_url_with_params(url, params)
    }
}

impl<R: Router + ?Sized> Router for Arc<R> {
    fn can_route(&self, url: &str) -> bool {
        (**self).can_route(url)
    }

    fn route_url_with_params(&self, url: &str, params: Params) -> bool {
        (**self).route_url_with_params(url, params)
    }
}
