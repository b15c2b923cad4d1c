use serde::Serialize;
use tracing::debug;

use crate::domain::cards_logic::{trick_points, trick_winner};
use crate::domain::player::Player;
use crate::domain::random::RandomSource;
use crate::domain::state::{rotate_to_winner, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// One card played into a trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Play {
    pub seat: Seat,
    pub player: String,
    pub card: Card,
}

/// Everything that happened in one resolved trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickRecord {
    /// 1-based trick number within the match.
    pub trick_no: usize,
    pub trump: Card,
    /// Plays in the order they were made.
    pub plays: Vec<Play>,
    /// Position of the winning play within `plays`.
    pub winner_index: usize,
    pub winner_seat: Seat,
    pub points: u32,
}

impl TrickRecord {
    pub fn winner(&self) -> &Play {
        &self.plays[self.winner_index]
    }
}

/// Play one trick: every player in `order` plays a random card, the winner
/// takes all points and `order` is rotated to start at the winner.
///
/// `players` is indexed by seat; `order` holds seats in current play order.
pub fn resolve_trick<R: RandomSource + ?Sized>(
    players: &mut [Player],
    order: &mut [Seat],
    trump: Card,
    trick_no: usize,
    rng: &mut R,
) -> Result<TrickRecord, DomainError> {
    let mut plays = Vec::with_capacity(order.len());
    for &seat in order.iter() {
        let player = players.get_mut(seat).ok_or_else(|| {
            DomainError::invariant(format!("seat {seat} in play order has no player"))
        })?;
        let card = player.play_random(rng)?;
        plays.push(Play {
            seat,
            player: player.name().to_string(),
            card,
        });
    }

    let cards: Vec<Card> = plays.iter().map(|p| p.card).collect();
    let winner_index = trick_winner(&cards, trump.suit)
        .ok_or_else(|| DomainError::invariant("trick resolved with no plays"))?;
    let points = trick_points(&cards);
    let winner_seat = plays[winner_index].seat;

    players[winner_seat].add_points(points);
    rotate_to_winner(order, winner_index);

    debug!(
        trick_no,
        winner = %plays[winner_index].player,
        winner_seat,
        points,
        "trick resolved"
    );

    Ok(TrickRecord {
        trick_no,
        trump,
        plays,
        winner_index,
        winner_seat,
        points,
    })
}
