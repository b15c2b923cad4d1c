//! Core card-related types: Card, Rank, Suit

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];
}

/// Card ranks, declared weakest to strongest.
///
/// The derived `Ord` follows trick strength, which is not the point order:
/// Q, J and K outrank the number cards but are worth less than 7 and A.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Queen,
    Jack,
    King,
    Seven,
    Ace,
}

impl Rank {
    /// Ranks in strength order; a rank's index here is its rank order.
    pub const ALL: [Rank; 10] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Seven,
        Rank::Ace,
    ];

    /// Points a card of this rank is worth when captured in a trick.
    pub const fn point_value(self) -> u32 {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 0,
            Rank::Queen => 2,
            Rank::Jack => 3,
            Rank::King => 4,
            Rank::Seven => 10,
            Rank::Ace => 11,
        }
    }

    /// Position in the strength ordering, 0 (Two) to 9 (Ace).
    pub const fn rank_order(self) -> u8 {
        self as u8
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
            Rank::Seven => '7',
            Rank::Ace => 'A',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn point_value(&self) -> u32 {
        self.rank.point_value()
    }

    pub const fn rank_order(&self) -> u8 {
        self.rank.rank_order()
    }
}

// Note: Ord on Card is only for stable sorting: suit order H<S<D<C then rank order.
// Trick resolution goes through `cards_logic`, which knows about trump.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
