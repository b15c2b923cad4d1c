//! Card parsing from and formatting to string tokens (e.g., "AS", "7H")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl Suit {
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::ParseCard(s.to_string()));
        };
        let rank = match rank_ch.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            'K' => Rank::King,
            '7' => Rank::Seven,
            'A' => Rank::Ace,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let suit = match suit_ch.to_ascii_uppercase() {
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
