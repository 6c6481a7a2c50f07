//! # approute-std
//!
//! Standard implementations for the approute URI dispatcher.
//!
//! This crate provides:
//! - **Routing**: [`AppRouter`], a scheme-keyed, first-match dispatcher
//! - **Configuration**: [`AppRouterBuilder`]
//! - **Standard handlers**: [`handlers::LoggingHandler`]
//! - **Testing utilities**: [`testing::RecordingHandler`], [`testing::CountingHandler`]
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events on registration, dispatch and from
//!   [`handlers::LoggingHandler`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use approute_core;

mod builder;
mod router;
mod table;

pub mod handlers;
pub mod testing;

pub use builder::AppRouterBuilder;
pub use router::AppRouter;
