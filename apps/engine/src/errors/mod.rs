//! Error handling for the Bisca engine.

pub mod domain;

pub use domain::{ConfigurationKind, DomainError};
