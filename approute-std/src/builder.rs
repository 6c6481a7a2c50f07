//! Builder for constructing an [`AppRouter`] from a route list.

use crate::router::AppRouter;
use approute_core::{BoxHandler, Handler, InvalidPatternError};
use std::sync::Arc;

/// Collects routes and registers them in order on [`build`](Self::build).
///
/// # Example
///
/// ```
/// use approute_core::{Params, Router};
/// use approute_std::AppRouterBuilder;
///
/// let router = AppRouterBuilder::new()
///     .route("app:/users/:user_id", |_: &Params| {})
///     .route_without_handler("app:/ignored")
///     .build()
///     .unwrap();
///
/// assert!(router.can_route("app:/users/1"));
/// ```
#[derive(Default)]
pub struct AppRouterBuilder {
    routes: Vec<(String, Option<BoxHandler>)>,
}

impl AppRouterBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    pub fn route<H: Handler>(mut self, pattern: impl Into<String>, handler: H) -> Self {
        self.routes.push((pattern.into(), Some(Arc::new(handler))));
        self
    }

    /// Add a route that matches without invoking anything.
    pub fn route_without_handler(mut self, pattern: impl Into<String>) -> Self {
        self.routes.push((pattern.into(), None));
        self
    }

    /// Number of routes collected so far.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no route has been collected.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build the router, failing on the first unparseable pattern.
    pub fn build(self) -> Result<AppRouter, InvalidPatternError> {
        let router = AppRouter::new();
        for (pattern, handler) in self.routes {
            router.add_boxed_route(&pattern, handler)?;
        }
        Ok(router)
    }
}
