//! Card fixtures.

use bisca_engine::domain::{try_parse_cards, Card};

/// Parse a hardcoded card token. Panics on a bad token; fixtures only.
pub fn card(token: &str) -> Card {
    token
        .parse()
        .unwrap_or_else(|e| panic!("invalid hardcoded card {token:?}: {e}"))
}

/// Parse a list of hardcoded card tokens. Panics on a bad token; fixtures only.
pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap_or_else(|e| panic!("invalid hardcoded cards {tokens:?}: {e}"))
}
