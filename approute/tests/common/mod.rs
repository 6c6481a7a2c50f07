#![allow(dead_code)]

use approute::{AppRouter, Handler, Params};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Handlers
// ============================================================================

/// Records which route fired, by label, in call order.
#[derive(Clone)]
pub struct LabelHandler {
    pub label: &'static str,
    pub log: Arc<Mutex<Vec<(&'static str, Params)>>>,
}

impl Handler for LabelHandler {
    fn call(&self, params: &Params) {
        self.log.lock().unwrap().push((self.label, params.clone()));
    }
}

pub type CallLog = Arc<Mutex<Vec<(&'static str, Params)>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn labelled(label: &'static str, log: &CallLog) -> LabelHandler {
    LabelHandler {
        label,
        log: log.clone(),
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// The deep links of a photo collage app, each with its own label.
pub const APP_PATTERNS: [(&str, &str); 7] = [
    ("feeds", "app:/collages/feeds/:feed_name"),
    ("echoes", "app:/collages/:collage_id/echoes"),
    ("collage", "app:/collages/:collage_id"),
    ("followed_users", "app:/users/:user_id/followed_users"),
    ("followers", "app:/users/:user_id/followers"),
    ("bundle", "app:/sticker_store/:bundle_id"),
    ("store", "app:/sticker_store"),
];

pub fn app_router(log: &CallLog) -> AppRouter {
    let router = AppRouter::new();
    for (label, pattern) in APP_PATTERNS {
        router.add_route(pattern, labelled(label, log)).unwrap();
    }
    router
}

pub fn labels(log: &CallLog) -> Vec<&'static str> {
    log.lock().unwrap().iter().map(|(label, _)| *label).collect()
}
