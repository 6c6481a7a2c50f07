//! # Handler
//!
//! The callback attached to a route. When a dispatched URI matches the
//! route's pattern, the handler receives the merged parameter map: caller
//! supplied entries plus the path variables extracted by the match.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|params: &Params| { ... }`
//! 2. **Struct implementation**: `impl Handler for MyHandler`
//! 3. **Wrappers**: see `approute_std::handlers` for logging.
//!
//! Handlers run synchronously on the dispatching thread. A handler that wants
//! to tell the caller whether it ran must do so itself (shared state,
//! channels); the router's return value does not carry that information.

use crate::params::Params;
use std::sync::Arc;

/// A route callback.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a route handler",
    label = "missing `Handler` implementation",
    note = "Implement `Handler` or pass a closure of type `Fn(&Params) + Send + Sync + 'static`."
)]
pub trait Handler: Send + Sync + 'static {
    /// Invoked with the merged parameters of a matched route.
    fn call(&self, params: &Params);
}

/// A shared, type-erased handler as stored in the route table.
pub type BoxHandler = Arc<dyn Handler>;

// Blanket impl for closures
impl<F> Handler for F
where
    F: Fn(&Params) + Send + Sync + 'static,
{
    fn call(&self, params: &Params) {
        (self)(params)
    }
}
