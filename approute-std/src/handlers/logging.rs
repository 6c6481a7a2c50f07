//! Logging wrapper for route handlers.

use approute_core::{Handler, Params};

/// A handler that logs the parameters it receives before delegating.
///
/// Logging only happens with the `tracing` feature; without it this is a
/// transparent wrapper.
pub struct LoggingHandler<H> {
    inner: H,
    name: &'static str,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner`, labelling its log events with `name`.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The label used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: Clone> Clone for LoggingHandler<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<H: Handler> Handler for LoggingHandler<H> {
    fn call(&self, params: &Params) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(handler = %self.name, ?params, "handling route");
        }
        self.inner.call(params);
    }
}
