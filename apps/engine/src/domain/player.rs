use tracing::trace;

use crate::domain::random::RandomSource;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// A seated player: a name, the cards in hand and the points captured so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::with_capacity(3),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return a uniformly chosen card from hand.
    pub fn play_random<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Card, DomainError> {
        if self.hand.is_empty() {
            return Err(DomainError::EmptyHand {
                player: self.name.clone(),
            });
        }
        let pos = rng.index(self.hand.len());
        let card = self.hand.remove(pos);
        trace!(player = %self.name, %card, "played card");
        Ok(card)
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
