//! # Observability
//!
//! Structured logging for server lifecycle and mutation events.

mod logger;

pub use logger::{Logger, Severity};
