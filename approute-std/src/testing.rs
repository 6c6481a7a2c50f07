//! Testing utilities for approute.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every parameter map it receives
//! - [`CountingHandler`]: counts invocations
//!
//! Both are cheap handles over shared state: clone one into the router and
//! keep the other for assertions.

use approute_core::{Handler, Params};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records the parameters of every call.
///
/// # Example
///
/// ```
/// use approute_core::Router;
/// use approute_std::{AppRouter, testing::RecordingHandler};
///
/// let recorder = RecordingHandler::new();
/// let router = AppRouter::new();
/// router.add_route("app:/users/:id", recorder.clone()).unwrap();
///
/// router.route_url("app:/users/7");
/// assert_eq!(recorder.last().unwrap().get_str("id"), Some("7"));
/// ```
#[derive(Clone, Default)]
pub struct RecordingHandler {
    calls: Arc<Mutex<Vec<Params>>>,
}

impl RecordingHandler {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded parameter maps, oldest first.
    pub fn calls(&self) -> Vec<Params> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the most recent parameter map.
    pub fn last(&self) -> Option<Params> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Handler for RecordingHandler {
    fn call(&self, params: &Params) {
        self.calls.lock().unwrap().push(params.clone());
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Handler for CountingHandler {
    fn call(&self, _params: &Params) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
