//! Engine test support utilities
//!
//! Shared helpers for the engine's integration tests: logging initialization,
//! deterministic random sources and card fixtures.

pub mod cards;
pub mod logging;
pub mod random;
