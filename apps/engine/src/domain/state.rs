use serde::Serialize;

/// Index of a player's chair as seated when the match was created.
pub type Seat = usize;

/// Match progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Match created, no cards dealt.
    NotStarted,
    /// Initial three-card deal finished; the first trick is next.
    Dealing,
    /// Tricks alternate with one-card replenishment while the deck lasts.
    TrickLoop,
    /// Deck exhausted; the last three tricks are played from hand.
    FinalTricks,
    /// All cards played and the outcome computed.
    Finished,
}

/// Fixed partnership. Team A holds the even seats, team B the odd ones.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    #[inline]
    pub fn of_seat(seat: Seat) -> Team {
        if seat % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }
}

/// Rotate a play order so that `winner_pos` comes first, keeping the cyclic
/// order of everyone else.
///
/// [A, B, C, D] with the winner at position 2 becomes [C, D, A, B].
#[inline]
pub fn rotate_to_winner(order: &mut [Seat], winner_pos: usize) {
    debug_assert!(winner_pos < order.len(), "winner position out of range");
    order.rotate_left(winner_pos);
}
