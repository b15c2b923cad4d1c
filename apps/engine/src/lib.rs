#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Bisca match engine: deck, players, trick resolution and scoring for 2 or
//! 4 player matches. The engine never prints; callers render [`MatchResult`].

pub mod config;
pub mod domain;
pub mod errors;


// Re-exports for public API
pub use config::MatchConfig;
pub use domain::game_flow::{create_match, play_match, Match, MatchResult};
pub use domain::random::RandomSource;
pub use domain::scoring::MatchOutcome;
pub use domain::tricks::{Play, TrickRecord};
pub use errors::{ConfigurationKind, DomainError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
