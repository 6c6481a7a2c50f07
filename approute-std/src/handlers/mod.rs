//! Standard handler wrappers.

mod logging;

pub use logging::LoggingHandler;
