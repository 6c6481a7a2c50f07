//! Immutable route table snapshots.
//!
//! Every write produces a new [`RouteTable`]; readers keep whichever snapshot
//! they loaded, so a dispatch in flight never sees a half-appended scheme.

use approute_core::{BoxHandler, Pattern};
use std::{collections::HashMap, fmt, sync::Arc};

/// A registered (pattern, handler) pair. Never mutated after creation.
#[derive(Clone)]
pub(crate) struct Route {
    pub(crate) pattern: Pattern,
    pub(crate) handler: Option<BoxHandler>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.source())
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Scheme → routes in registration order. A scheme is present only while it
/// has at least one route.
#[derive(Clone, Default, Debug)]
pub(crate) struct RouteTable {
    schemes: HashMap<String, Arc<[Route]>>,
}

impl RouteTable {
    /// Copy of `self` with `route` appended under `scheme`.
    pub(crate) fn with_route(&self, scheme: &str, route: Route) -> Self {
        let mut schemes = self.schemes.clone();
        let mut routes = schemes
            .get(scheme)
            .map(|existing| existing.to_vec())
            .unwrap_or_default();
        routes.push(route);
        schemes.insert(scheme.to_string(), routes.into());
        Self { schemes }
    }

    /// Copy of `self` without any route under `scheme`.
    pub(crate) fn without_scheme(&self, scheme: &str) -> Self {
        let mut schemes = self.schemes.clone();
        schemes.remove(scheme);
        Self { schemes }
    }

    pub(crate) fn routes(&self, scheme: &str) -> Option<&[Route]> {
        self.schemes.get(scheme).map(|routes| &routes[..])
    }

    pub(crate) fn contains_scheme(&self, scheme: &str) -> bool {
        self.schemes.contains_key(scheme)
    }

    pub(crate) fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }

    pub(crate) fn scheme_count(&self) -> usize {
        self.schemes.len()
    }

    pub(crate) fn route_count(&self) -> usize {
        self.schemes.values().map(|routes| routes.len()).sum()
    }
}
