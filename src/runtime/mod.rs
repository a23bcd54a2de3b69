//! Process-level setup for binaries and examples embedding the reducer.
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use self::tracing::setup_tracing;
