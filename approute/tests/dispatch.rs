//! End-to-end dispatch behaviour through the public API.

use approute::{
    AppRouter, AppRouterBuilder, Params, Router, UriError, Value,
    testing::{CountingHandler, RecordingHandler},
};

mod common;
use common::{app_router, call_log, labelled, labels};

#[test]
fn test_collage_link_extracts_id() {
    let log = call_log();
    let router = app_router(&log);

    assert!(router.route_url("app:/collages/123"));

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "collage");
    assert_eq!(calls[0].1.get_str("collage_id"), Some("123"));
}

#[test]
fn test_followers_link_extracts_user() {
    let log = call_log();
    let router = app_router(&log);

    assert!(router.route_url("app:/users/123/followers"));
    assert!(router.route_url("app:/users/456/followed_users"));

    assert_eq!(labels(&log), ["followers", "followed_users"]);
    let calls = log.lock().unwrap();
    assert_eq!(calls[0].1.get_str("user_id"), Some("123"));
    assert_eq!(calls[1].1.get_str("user_id"), Some("456"));
}

#[test]
fn test_sticker_store_picks_route_by_length() {
    let log = call_log();
    let router = app_router(&log);

    assert!(router.route_url("app:/sticker_store"));
    assert!(router.route_url("app:/sticker_store/hearts"));

    assert_eq!(labels(&log), ["store", "bundle"]);
    let calls = log.lock().unwrap();
    assert!(calls[0].1.is_empty());
    assert_eq!(calls[1].1.get_str("bundle_id"), Some("hearts"));
}

#[test]
fn test_feeds_literal_beats_later_variable() {
    let log = call_log();
    let router = app_router(&log);

    assert!(router.route_url("app:/collages/feeds/contest"));
    assert_eq!(labels(&log), ["feeds"]);
}

#[test]
fn test_earlier_registration_wins_on_overlap() {
    let log = call_log();
    let router = AppRouter::new();
    router.add_route("app:/items/:id", labelled("first", &log)).unwrap();
    router.add_route("app:/items/:key", labelled("second", &log)).unwrap();
    router.add_route("app:/items/special", labelled("literal", &log)).unwrap();

    for _ in 0..3 {
        assert!(router.route_url("app:/items/special"));
    }

    assert_eq!(labels(&log), ["first", "first", "first"]);
}

#[test]
fn test_unknown_scheme_is_not_routable() {
    let counter = CountingHandler::new();
    let router = AppRouter::new();
    router.add_route("app:/x", counter.clone()).unwrap();

    assert!(!router.can_route("unknownscheme:/x"));
    assert!(!router.route_url("unknownscheme:/x"));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_can_route_checks_scheme_only() {
    let router = AppRouter::new();
    router.add_route("app:/a/b/c", |_: &Params| {}).unwrap();
    router.add_route("deep-link+v2:/x", |_: &Params| {}).unwrap();

    assert!(router.can_route("app:/anything"));
    assert!(router.can_route("app:/"));
    assert!(router.can_route("deep-link+v2:/y/z"));
    assert!(!router.can_route("web:/a/b/c"));
    assert!(!router.can_route("/a/b/c"));
    assert!(!router.can_route(""));
    assert!(!router.can_route("app:/with space"));
}

#[test]
fn test_invalid_pattern_reports_cause() {
    let router = AppRouter::new();
    let err = router
        .add_route("not a valid uri %%", |_: &Params| {})
        .unwrap_err();

    assert_eq!(err.pattern(), "not a valid uri %%");
    assert_eq!(
        err.uri_error(),
        &UriError::InvalidCharacter {
            ch: ' ',
            position: 3
        }
    );
    assert!(router.is_empty());
}

#[test]
fn test_shorter_input_never_reaches_longer_pattern() {
    let recorder = RecordingHandler::new();
    let router = AppRouter::new();
    router.add_route("app:/a/:x/c", recorder.clone()).unwrap();

    // Scheme is known, so the call is accepted even though nothing fires.
    assert!(router.route_url("app:/a/b"));
    assert!(router.route_url("app:/a/b/c/d"));
    assert_eq!(recorder.count(), 0);

    assert!(router.route_url("app:/a/b/c"));
    assert_eq!(recorder.last().unwrap().get_str("x"), Some("b"));
}

#[test]
fn test_variables_never_cause_mismatch() {
    let recorder = RecordingHandler::new();
    let router = AppRouter::new();
    router.add_route("app:/:a/:b/:c", recorder.clone()).unwrap();

    for url in ["app:/1/2/3", "app:/x/y/z", "app:/:a/%3Ab/-", "app://host/p/q/r"] {
        assert!(router.route_url(url), "{url}");
    }
    assert_eq!(recorder.count(), 4);

    let calls = recorder.calls();
    assert_eq!(calls[2].get_str("b"), Some(":b"));
    assert_eq!(calls[3].get_str("a"), Some("p"));
}

#[test]
fn test_caller_params_are_merged() {
    #[derive(Debug, PartialEq)]
    struct Session(u32);

    let recorder = RecordingHandler::new();
    let router = AppRouter::new();
    router.add_route("app:/users/:user_id", recorder.clone()).unwrap();

    let session = Value::any(Session(5));
    let params = Params::new()
        .with("user_id", "cached")
        .with("@user_id", session.clone())
        .with("animated", false);
    assert!(router.route_url_with_params("app:/users/123", params));

    let received = recorder.last().unwrap();
    assert_eq!(received.len(), 3);
    assert_eq!(received.get_str("user_id"), Some("123"));
    assert_eq!(received.get("@user_id"), Some(&session));
    assert_eq!(
        received.get("@user_id").and_then(|v| v.downcast_ref::<Session>()),
        Some(&Session(5))
    );
    assert_eq!(received.get("animated").and_then(Value::as_bool), Some(false));
}

#[test]
fn test_query_and_fragment_do_not_affect_matching() {
    let recorder = RecordingHandler::new();
    let router = AppRouter::new();
    router.add_route("app:/collages/:collage_id", recorder.clone()).unwrap();

    assert!(router.route_url("app:/collages/9?ref=push#comments"));
    assert_eq!(recorder.last().unwrap().get_str("collage_id"), Some("9"));
}

#[test]
fn test_router_trait_object_and_arc() {
    let counter = CountingHandler::new();
    let router = std::sync::Arc::new(
        AppRouterBuilder::new()
            .route("app:/ping", counter.clone())
            .build()
            .unwrap(),
    );

    let as_dyn: &dyn Router = &*router;
    assert!(as_dyn.route_url("app:/ping"));

    fn dispatch(router: impl Router, url: &str) -> bool {
        router.route_url(url)
    }
    assert!(dispatch(router.clone(), "app:/ping"));
    assert!(dispatch(&*router, "app:/ping"));

    assert_eq!(counter.count(), 3);
}
