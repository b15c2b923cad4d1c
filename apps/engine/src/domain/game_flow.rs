//! Match orchestration: dealing, the trick loop, the final tricks and the
//! outcome, as explicit phase transitions on a [`Match`].

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::random::RandomSource;
use crate::domain::rules::{is_valid_player_count, DECK_SIZE, FINAL_TRICKS, HAND_SIZE};
use crate::domain::scoring::{decide_outcome, MatchOutcome};
use crate::domain::state::{Phase, Seat, Team};
use crate::domain::tricks::{resolve_trick, TrickRecord};
use crate::domain::Card;
use crate::errors::domain::{ConfigurationKind, DomainError};

/// Structured record of a finished match, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Player names in seat order.
    pub players: Vec<String>,
    pub trump: Card,
    pub tricks: Vec<TrickRecord>,
    pub outcome: MatchOutcome,
}

/// A Bisca match in progress.
#[derive(Debug, Clone)]
pub struct Match {
    phase: Phase,
    deck: Deck,
    /// Players by seat; never reordered.
    players: Vec<Player>,
    /// Seats in current play order; rotated after every trick.
    order: Vec<Seat>,
    tricks_played: usize,
    /// Set after a trick in the trick loop until the hands are topped up.
    pending_replenish: bool,
    final_tricks_left: usize,
}

/// Check the player-name list: exactly 2 or 4 names, none blank.
pub fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<(), DomainError> {
    if !is_valid_player_count(names.len()) {
        return Err(DomainError::configuration(
            ConfigurationKind::PlayerCount,
            format!("Bisca is played by 2 or 4 players, got {}", names.len()),
        ));
    }
    if let Some(pos) = names.iter().position(|n| n.as_ref().trim().is_empty()) {
        return Err(DomainError::configuration(
            ConfigurationKind::EmptyName,
            format!("player {} has an empty name", pos + 1),
        ));
    }
    Ok(())
}

/// Validate names, then build a shuffled deck with its trump pinned.
pub fn create_match<S, R>(names: &[S], rng: &mut R) -> Result<Match, DomainError>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    validate_names(names)?;
    let deck = Deck::prepared(rng)?;
    Match::with_deck(names, deck)
}

/// Run a created match through every phase.
pub fn play_match<R: RandomSource + ?Sized>(
    game: Match,
    rng: &mut R,
) -> Result<MatchResult, DomainError> {
    game.play(rng)
}

impl Match {
    /// Seat the players around an already prepared deck.
    ///
    /// The deck must be full and have its trump designated.
    pub fn with_deck<S: AsRef<str>>(names: &[S], deck: Deck) -> Result<Self, DomainError> {
        validate_names(names)?;
        if deck.trump().is_none() {
            return Err(DomainError::invariant("match deck has no trump"));
        }
        if deck.remaining() != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "match deck must hold {DECK_SIZE} cards, got {}",
                deck.remaining()
            )));
        }
        let players: Vec<Player> = names
            .iter()
            .map(|n| Player::new(n.as_ref().trim()))
            .collect();
        let order = (0..players.len()).collect();
        Ok(Self {
            phase: Phase::NotStarted,
            deck,
            players,
            order,
            tricks_played: 0,
            pending_replenish: false,
            final_tricks_left: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Players by seat.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Seats in current play order.
    pub fn order(&self) -> &[Seat] {
        &self.order
    }

    pub fn tricks_played(&self) -> usize {
        self.tricks_played
    }

    pub fn trump(&self) -> Result<Card, DomainError> {
        self.deck
            .trump()
            .ok_or_else(|| DomainError::invariant("match deck has no trump"))
    }

    /// Names of the players seated in `team`, in seat order.
    pub fn team_members(&self, team: Team) -> Vec<&str> {
        self.players
            .iter()
            .enumerate()
            .filter(|(seat, _)| Team::of_seat(*seat) == team)
            .map(|(_, p)| p.name())
            .collect()
    }

    /// One card from the top of the deck to each player, in play order.
    fn deal_round(&mut self) -> Result<(), DomainError> {
        for &seat in &self.order {
            let card = self.deck.draw()?;
            self.players[seat].receive(card);
        }
        Ok(())
    }

    /// NotStarted → Dealing: three cards to everyone.
    pub fn deal_initial(&mut self) -> Result<(), DomainError> {
        self.expect_phase(&[Phase::NotStarted], "deal_initial")?;
        for _ in 0..HAND_SIZE {
            self.deal_round()?;
        }
        self.phase = Phase::Dealing;
        debug!(
            players = self.players.len(),
            remaining = self.deck.remaining(),
            "initial hands dealt"
        );
        Ok(())
    }

    /// Resolve one trick in the trick loop or the final tricks.
    pub fn play_trick<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TrickRecord, DomainError> {
        self.expect_phase(
            &[Phase::Dealing, Phase::TrickLoop, Phase::FinalTricks],
            "play_trick",
        )?;
        if self.pending_replenish {
            return Err(DomainError::invariant(
                "hands must be replenished before the next trick",
            ));
        }
        if self.phase == Phase::FinalTricks && self.final_tricks_left == 0 {
            return Err(DomainError::invariant("all final tricks already played"));
        }
        if self.phase == Phase::Dealing {
            self.phase = if self.deck.is_empty() {
                self.final_tricks_left = FINAL_TRICKS;
                Phase::FinalTricks
            } else {
                Phase::TrickLoop
            };
        }

        let trump = self.trump()?;
        let trick_no = self.tricks_played + 1;
        let record = resolve_trick(&mut self.players, &mut self.order, trump, trick_no, rng)?;
        self.tricks_played = trick_no;

        match self.phase {
            Phase::TrickLoop => self.pending_replenish = !self.deck.is_empty(),
            Phase::FinalTricks => self.final_tricks_left -= 1,
            _ => {}
        }
        Ok(record)
    }

    /// Top up every hand with one card after a trick-loop trick. Moves to the
    /// final tricks once the deck runs out.
    pub fn replenish(&mut self) -> Result<(), DomainError> {
        self.expect_phase(&[Phase::TrickLoop], "replenish")?;
        if !self.pending_replenish {
            return Err(DomainError::invariant("replenish without a resolved trick"));
        }
        self.deal_round()?;
        self.pending_replenish = false;
        if self.deck.is_empty() {
            self.phase = Phase::FinalTricks;
            self.final_tricks_left = FINAL_TRICKS;
            debug!(tricks_played = self.tricks_played, "deck exhausted");
        }
        Ok(())
    }

    /// FinalTricks → Finished: compare team totals.
    pub fn finish(&mut self) -> Result<MatchOutcome, DomainError> {
        self.expect_phase(&[Phase::FinalTricks], "finish")?;
        if self.final_tricks_left > 0 {
            return Err(DomainError::invariant(format!(
                "{} final tricks still to play",
                self.final_tricks_left
            )));
        }
        self.phase = Phase::Finished;
        let outcome = decide_outcome(&self.players);
        info!(
            team_a = outcome.team_a_total,
            team_b = outcome.team_b_total,
            draw = outcome.draw,
            "match finished"
        );
        Ok(outcome)
    }

    /// Run every remaining phase and collect the structured result.
    pub fn play<R: RandomSource + ?Sized>(
        mut self,
        rng: &mut R,
    ) -> Result<MatchResult, DomainError> {
        let trump = self.trump()?;
        self.deal_initial()?;

        let mut tricks = Vec::with_capacity(DECK_SIZE / self.players.len());
        while self.deck.remaining() > 0 {
            tricks.push(self.play_trick(rng)?);
            if self.deck.remaining() > 0 {
                self.replenish()?;
            }
        }
        for _ in 0..FINAL_TRICKS {
            tricks.push(self.play_trick(rng)?);
        }

        let outcome = self.finish()?;
        Ok(MatchResult {
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
            trump,
            tricks,
            outcome,
        })
    }

    fn expect_phase(&self, allowed: &[Phase], op: &'static str) -> Result<(), DomainError> {
        if allowed.contains(&self.phase) {
            return Ok(());
        }
        Err(DomainError::invariant(format!(
            "{op} is not allowed in phase {:?}",
            self.phase
        )))
    }
}
