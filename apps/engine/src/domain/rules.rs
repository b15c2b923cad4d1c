//! Fixed Bisca rules: deck size, hand size, player counts, points in play.

use super::cards_types::Rank;

pub const DECK_SIZE: usize = 40;
pub const HAND_SIZE: usize = 3;
/// Tricks played after the deck runs out, one per card left in hand.
pub const FINAL_TRICKS: usize = HAND_SIZE;
pub const ALLOWED_PLAYER_COUNTS: [usize; 2] = [2, 4];

/// Sum of every card's point value across the 40-card deck.
pub const TOTAL_POINTS: u32 = {
    let mut sum = 0;
    let mut i = 0;
    while i < Rank::ALL.len() {
        sum += Rank::ALL[i].point_value() * 4;
        i += 1;
    }
    sum
};

pub fn is_valid_player_count(count: usize) -> bool {
    ALLOWED_PLAYER_COUNTS.contains(&count)
}

/// Number of tricks in a full match for `players` seats.
pub fn tricks_per_match(players: usize) -> usize {
    DECK_SIZE / players
}
