//! Domain-level error type returned by every engine operation.
//!
//! Only `Configuration` and `ParseCard` describe bad caller input. The other
//! variants mean the deal/trick cadence was broken and the match cannot go on.

use thiserror::Error;

/// What part of the match setup was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationKind {
    PlayerCount,
    EmptyName,
    Seed,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Match setup rejected
    #[error("configuration error ({0:?}): {1}")]
    Configuration(ConfigurationKind, String),
    /// Draw attempted with no cards left
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    /// Play attempted from an empty hand
    #[error("player {player} has no cards to play")]
    EmptyHand { player: String },
    /// Card token could not be parsed
    #[error("parse card: {0}")]
    ParseCard(String),
    /// Phase or trump contract broken by the caller
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn configuration(kind: ConfigurationKind, detail: impl Into<String>) -> Self {
        Self::Configuration(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// True for errors a caller can fix by changing its input.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Configuration(..) | Self::ParseCard(_))
    }
}
