//! Card game logic: comparing card strength under trump, picking trick winners

use super::cards_types::{Card, Suit};

/// Whether `challenger`, played after `best`, takes the trick from it.
///
/// Same suit: higher rank order wins. Different suit: only a trump challenger
/// wins. When both cards are trump the same-suit rule already decides.
pub fn card_beats(challenger: Card, best: Card, trump: Suit) -> bool {
    if challenger.suit == best.suit {
        return challenger.rank_order() > best.rank_order();
    }
    challenger.suit == trump
}

/// Index of the winning card among `plays` (in play order).
///
/// Returns `None` only for an empty trick.
pub fn trick_winner(plays: &[Card], trump: Suit) -> Option<usize> {
    let (first, rest) = plays.split_first()?;
    let mut best_idx = 0usize;
    let mut best = *first;
    for (offset, &card) in rest.iter().enumerate() {
        if card_beats(card, best, trump) {
            best = card;
            best_idx = offset + 1;
        }
    }
    Some(best_idx)
}

/// Total points captured by a trick.
pub fn trick_points(plays: &[Card]) -> u32 {
    plays.iter().map(Card::point_value).sum()
}
