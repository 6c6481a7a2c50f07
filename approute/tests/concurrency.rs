//! Shared-router behaviour: concurrent registration and re-entrant handlers.

use approute::{AppRouter, Params, Router, testing::CountingHandler};
use std::{
    sync::{Arc, Barrier},
    thread,
};

#[test]
fn test_concurrent_registration_loses_nothing() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let router = Arc::new(AppRouter::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let router = router.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..PER_THREAD {
                    router
                        .add_route(&format!("app:/t{t}/r{i}"), |_: &Params| {})
                        .unwrap();
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(router.route_count(), THREADS * PER_THREAD);

    // Each thread's routes keep their relative order.
    let patterns = router.patterns("app");
    for t in 0..THREADS {
        let prefix = format!("app:/t{t}/");
        let own: Vec<_> = patterns.iter().filter(|p| p.starts_with(&prefix)).collect();
        let expected: Vec<_> = (0..PER_THREAD).map(|i| format!("app:/t{t}/r{i}")).collect();
        assert_eq!(own, expected.iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_dispatch_while_registering() {
    let router = Arc::new(AppRouter::new());
    let counter = CountingHandler::new();
    router.add_route("app:/stable/:id", counter.clone()).unwrap();

    let writer = {
        let router = router.clone();
        thread::spawn(move || {
            for i in 0..200 {
                router
                    .add_route(&format!("app:/extra/{i}"), |_: &Params| {})
                    .unwrap();
            }
        })
    };

    for i in 0..200 {
        assert!(router.route_url(&format!("app:/stable/{i}")));
    }
    writer.join().unwrap();

    assert_eq!(counter.count(), 200);
    assert_eq!(router.route_count(), 201);
}

#[test]
fn test_handler_may_register_routes() {
    let router = Arc::new(AppRouter::new());
    let late = CountingHandler::new();

    let inner = router.clone();
    let late_handler = late.clone();
    router
        .add_route("app:/setup", move |_: &Params| {
            inner.add_route("app:/late", late_handler.clone()).unwrap();
        })
        .unwrap();

    assert!(router.route_url("app:/setup"));
    assert!(router.route_url("app:/late"));
    assert_eq!(late.count(), 1);
}

#[test]
fn test_handler_may_remove_its_own_scheme() {
    let router = Arc::new(AppRouter::new());
    let inner = router.clone();
    router
        .add_route("once:/fire", move |_: &Params| {
            inner.remove_routes_for_scheme("once");
        })
        .unwrap();

    assert!(router.route_url("once:/fire"));
    assert!(!router.can_route("once:/fire"));
    assert!(!router.route_url("once:/fire"));
}
