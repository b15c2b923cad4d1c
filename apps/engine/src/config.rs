//! Match configuration: player names plus an optional RNG seed.

use std::env;

use rand_chacha::ChaCha8Rng;

use crate::domain::game_flow::{create_match, validate_names, Match};
use crate::domain::random::{entropy_rng, seeded_rng, RandomSource};
use crate::errors::domain::{ConfigurationKind, DomainError};

/// Environment variable consulted when no seed is given explicitly.
pub const SEED_ENV_VAR: &str = "BISCA_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub names: Vec<String>,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn new<I, S>(names: I, seed: Option<u64>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        validate_names(names.as_slice())?;
        Ok(Self { names, seed })
    }

    /// Generator for this configuration.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        }
    }

    /// Create the match, drawing the shuffle from `rng`.
    pub fn create_match<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Match, DomainError> {
        create_match(self.names.as_slice(), rng)
    }
}

/// Parse a seed given as decimal text.
pub fn parse_seed(raw: &str) -> Result<u64, DomainError> {
    raw.trim().parse::<u64>().map_err(|e| {
        DomainError::configuration(ConfigurationKind::Seed, format!("invalid seed '{raw}': {e}"))
    })
}

/// Seed from `BISCA_SEED`, if set.
pub fn seed_from_env() -> Result<Option<u64>, DomainError> {
    match env::var(SEED_ENV_VAR) {
        Ok(raw) => parse_seed(&raw).map(Some),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(DomainError::configuration(
            ConfigurationKind::Seed,
            format!("{SEED_ENV_VAR}: {e}"),
        )),
    }
}
