//! The default [`Router`] implementation.
//!
//! [`AppRouter`] keeps its table in an [`ArcSwap`]: reads load a snapshot
//! without locking, writes build a new table and publish it with
//! [`ArcSwap::rcu`] so concurrent registrations are never lost.

use crate::table::{Route, RouteTable};
use approute_core::{
    BoxHandler, Handler, InvalidPatternError, ParsedUri, Params, Pattern, Router, is_blank,
    parse_uri,
};
use arc_swap::ArcSwap;
use std::{fmt, sync::Arc};

/// Scheme-keyed URI dispatcher.
///
/// Routes are grouped by scheme and tried in registration order; the first
/// pattern whose segments all match wins and its handler is the only one
/// invoked.
///
/// # Example
///
/// ```
/// use approute_core::{Params, Router};
/// use approute_std::AppRouter;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(None));
/// let sink = seen.clone();
///
/// let router = AppRouter::new();
/// router
///     .add_route("app:/collages/:collage_id", move |params: &Params| {
///         *sink.lock().unwrap() = params.get_str("collage_id").map(str::to_string);
///     })
///     .unwrap();
///
/// assert!(router.route_url("app:/collages/123"));
/// assert_eq!(seen.lock().unwrap().as_deref(), Some("123"));
/// ```
///
/// The router is `Send + Sync`; share it behind an `Arc` when several
/// threads register or dispatch.
pub struct AppRouter {
    table: ArcSwap<RouteTable>,
}

impl AppRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(RouteTable::default()),
        }
    }

    /// Register `pattern` with `handler`.
    ///
    /// Patterns without a scheme (e.g. `/users/:id`) are ignored and still
    /// return `Ok(())`. Order matters: earlier routes shadow later ones of
    /// the same length.
    pub fn add_route<H: Handler>(&self, pattern: &str, handler: H) -> Result<(), InvalidPatternError> {
        self.add_boxed_route(pattern, Some(Arc::new(handler)))
    }

    /// Register `pattern` with no handler.
    ///
    /// A matching dispatch stops at this route without invoking anything.
    pub fn add_route_without_handler(&self, pattern: &str) -> Result<(), InvalidPatternError> {
        self.add_boxed_route(pattern, None)
    }

    /// Register `pattern` with an already type-erased handler.
    pub fn add_boxed_route(
        &self,
        pattern: &str,
        handler: Option<BoxHandler>,
    ) -> Result<(), InvalidPatternError> {
        let pattern = Pattern::parse(pattern)?;

        if is_blank(pattern.scheme()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(pattern = %pattern, "ignoring route pattern without scheme");
            return Ok(());
        }

        let scheme = pattern.scheme().unwrap_or_default().to_string();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            scheme = %scheme,
            pattern = %pattern,
            segments = pattern.segments().len(),
            "registered route"
        );

        let route = Route { pattern, handler };
        self.table
            .rcu(|table| table.with_route(&scheme, route.clone()));
        Ok(())
    }

    /// Remove every route registered under `scheme`. Unknown schemes are a
    /// no-op.
    pub fn remove_routes_for_scheme(&self, scheme: &str) {
        if !self.table.load().contains_scheme(scheme) {
            return;
        }
        self.table.rcu(|table| table.without_scheme(scheme));

        #[cfg(feature = "tracing")]
        tracing::debug!(scheme = %scheme, "removed routes for scheme");
    }

    /// Drop every route. The router stays usable.
    pub fn dispose(&self) {
        self.table.store(Arc::new(RouteTable::default()));
    }

    /// Registered schemes, sorted.
    pub fn schemes(&self) -> Vec<String> {
        let table = self.table.load();
        let mut schemes: Vec<_> = table.schemes().map(str::to_string).collect();
        schemes.sort_unstable();
        schemes
    }

    /// Total number of routes across all schemes.
    pub fn route_count(&self) -> usize {
        self.table.load().route_count()
    }

    /// Whether no route is registered.
    pub fn is_empty(&self) -> bool {
        self.table.load().scheme_count() == 0
    }

    /// Source strings of the patterns under `scheme`, in registration order.
    pub fn patterns(&self, scheme: &str) -> Vec<String> {
        self.table
            .load()
            .routes(scheme)
            .map(|routes| {
                routes
                    .iter()
                    .map(|route| route.pattern.source().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parse `url` and return it when its scheme is known to `table`.
    fn routable(table: &RouteTable, url: &str) -> Option<ParsedUri> {
        let uri = match parse_uri(url) {
            Ok(uri) => uri,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(url = %url, error = %_err, "rejecting malformed url");
                return None;
            }
        };

        if is_blank(uri.scheme()) {
            return None;
        }

        match uri.scheme() {
            Some(scheme) if table.contains_scheme(scheme) => Some(uri),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(url = %url, "no routes for scheme");
                None
            }
        }
    }
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for AppRouter {
    fn can_route(&self, url: &str) -> bool {
        Self::routable(&self.table.load(), url).is_some()
    }

    /// Dispatch `url` to the first matching route.
    ///
    /// Returns `true` whenever the scheme is registered and the URI has at
    /// least one path segment, **even if no pattern matched**. The result
    /// means "accepted for processing", not "a handler ran".
    ///
    /// On a match, the extracted variables are inserted into `params` after
    /// the caller's entries, so a variable overwrites a caller entry with the
    /// same name.
    fn route_url_with_params(&self, url: &str, mut params: Params) -> bool {
        // Owned snapshot: handlers may register routes while we dispatch.
        let table = self.table.load_full();

        let Some(uri) = Self::routable(&table, url) else {
            return false;
        };
        let segments = uri.segments();
        if segments.is_empty() {
            return false;
        }

        let routes = uri
            .scheme()
            .and_then(|scheme| table.routes(scheme))
            .unwrap_or_default();

        let matched = routes.iter().find_map(|route| {
            route
                .pattern
                .matches(segments)
                .map(|bindings| (route, bindings))
        });

        match matched {
            Some((route, bindings)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(url = %url, pattern = %route.pattern, "matched route");

                params.extend(bindings);
                if let Some(handler) = &route.handler {
                    handler.call(&params);
                }
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(url = %url, "no pattern matched");
            }
        }

        true
    }
}

impl fmt::Debug for AppRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.load();
        let mut map = f.debug_map();
        for scheme in self.schemes() {
            let patterns: Vec<_> = table
                .routes(&scheme)
                .unwrap_or_default()
                .iter()
                .map(|route| route.pattern.source())
                .collect();
            map.entry(&scheme, &patterns);
        }
        map.finish()
    }
}

impl fmt::Display for AppRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.load();
        write!(
            f,
            "AppRouter({} schemes, {} routes)",
            table.scheme_count(),
            table.route_count()
        )
    }
}
