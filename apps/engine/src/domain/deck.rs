//! The 40-card Bisca deck: build, shuffle, trump pin and draws.

use tracing::trace;

use crate::domain::random::RandomSource;
use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate the full 40-card deck in build order (rank-major, strength order).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Ordered draw pile. Index 0 is the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    trump: Option<Card>,
}

impl Deck {
    /// Fresh unshuffled deck with no trump yet.
    pub fn build() -> Self {
        Self {
            cards: full_deck(),
            trump: None,
        }
    }

    /// Build, shuffle and pin the trump in one step.
    pub fn prepared<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, DomainError> {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck.designate_trump()?;
        Ok(deck)
    }

    /// Random permutation by repeated removal of a uniformly chosen remaining card.
    ///
    /// A source that always answers 0 leaves the order untouched.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut remaining = std::mem::take(&mut self.cards);
        let mut shuffled = Vec::with_capacity(remaining.len());
        while !remaining.is_empty() {
            let pos = rng.index(remaining.len());
            shuffled.push(remaining.remove(pos));
        }
        self.cards = shuffled;
    }

    /// Pin the bottom card as trump. Allowed once, on a full deck.
    pub fn designate_trump(&mut self) -> Result<Card, DomainError> {
        if self.trump.is_some() {
            return Err(DomainError::invariant("trump already designated"));
        }
        if self.cards.len() != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "trump must be designated on a full deck, {} cards left",
                self.cards.len()
            )));
        }
        let bottom = *self.cards.last().ok_or(DomainError::EmptyDeck)?;
        self.trump = Some(bottom);
        Ok(bottom)
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DomainError> {
        if self.trump.is_none() {
            return Err(DomainError::invariant("draw before trump designation"));
        }
        if self.cards.is_empty() {
            return Err(DomainError::EmptyDeck);
        }
        let card = self.cards.remove(0);
        trace!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The pinned trump card, if designated.
    pub fn trump(&self) -> Option<Card> {
        self.trump
    }

    /// Undrawn cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
