use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::player::Player;
use crate::domain::test_random::FirstIndex;
use crate::domain::tricks::resolve_trick;
use crate::domain::{trick_winner, Card, Suit};
use crate::errors::domain::DomainError;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// Seat players named A, B, ... each holding the given hand.
fn seat_players(hands: &[&[&str]]) -> Vec<Player> {
    hands
        .iter()
        .enumerate()
        .map(|(seat, tokens)| {
            let mut p = Player::new(((b'A' + seat as u8) as char).to_string());
            for c in parse_cards(tokens) {
                p.receive(c);
            }
            p
        })
        .collect()
}

#[test]
fn higher_rank_same_suit_beats_lower() {
    // Hearts only, clubs trump: 7H outranks KH and QH
    let plays = parse_cards(&["KH", "7H", "QH", "2H"]);
    assert_eq!(trick_winner(&plays, Suit::Clubs), Some(1));
}

#[test]
fn any_trump_beats_any_non_trump() {
    // 2S is the lowest card in the deck but spades are trump
    let plays = parse_cards(&["AH", "7H", "2S", "KH"]);
    assert_eq!(trick_winner(&plays, Suit::Spades), Some(2));

    let plays = parse_cards(&["AD", "2S"]);
    assert_eq!(trick_winner(&plays, Suit::Spades), Some(1));
}

#[test]
fn off_suit_never_wins_against_trump_or_higher_same_suit() {
    // Trump played first: the off-suit ace cannot take it
    let plays = parse_cards(&["3S", "AH", "AD", "7C"]);
    assert_eq!(trick_winner(&plays, Suit::Spades), Some(0));

    // Higher same-suit card already best: off-suit 7D is ignored
    let plays = parse_cards(&["2H", "KH", "7D", "AC"]);
    assert_eq!(trick_winner(&plays, Suit::Spades), Some(1));
}

#[test]
fn first_card_wins_when_everything_else_is_off_suit() {
    let plays = parse_cards(&["2H", "AD", "7C", "KD"]);
    assert_eq!(trick_winner(&plays, Suit::Spades), Some(0));
}

#[test]
fn lower_trump_does_not_take_higher_trump() {
    let plays = parse_cards(&["4H", "7S", "QS", "AH"]);
    assert_eq!(trick_winner(&plays, Suit::Spades), Some(1));
}

#[test]
fn comparison_is_against_current_best_not_first_card() {
    // 2D leads, KS (trump) takes it, then AD follows the lead suit but is
    // compared with the trump best and loses.
    let plays = parse_cards(&["2D", "KS", "AD", "3H"]);
    assert_eq!(trick_winner(&plays, Suit::Spades), Some(1));
}

#[test]
fn resolve_trick_awards_all_points_and_rotates() {
    let mut players = seat_players(&[&["QH"], &["7H"], &["AS"], &["2D"]]);
    let mut order = vec![0, 1, 2, 3];

    let record = resolve_trick(&mut players, &mut order, card("5S"), 1, &mut FirstIndex).unwrap();

    assert_eq!(record.winner_index, 2);
    assert_eq!(record.winner_seat, 2);
    assert_eq!(record.points, 2 + 10 + 11);
    assert_eq!(record.winner().player, "C");
    assert_eq!(players[2].score(), 23);
    assert!(players.iter().enumerate().all(|(s, p)| s == 2 || p.score() == 0));
    assert_eq!(order, vec![2, 3, 0, 1]);
    assert!(players.iter().all(|p| p.hand().is_empty()));
}

#[test]
fn resolve_trick_plays_in_current_order() {
    let mut players = seat_players(&[&["KH"], &["2H"], &["3H"], &["AH"]]);
    let mut order = vec![2, 3, 0, 1];

    let record = resolve_trick(&mut players, &mut order, card("5C"), 4, &mut FirstIndex).unwrap();

    let seats: Vec<usize> = record.plays.iter().map(|p| p.seat).collect();
    assert_eq!(seats, vec![2, 3, 0, 1]);
    // 3H leads, AH (seat 3) is highest
    assert_eq!(record.winner_index, 1);
    assert_eq!(record.winner_seat, 3);
    assert_eq!(record.trick_no, 4);
    assert_eq!(order, vec![3, 0, 1, 2]);
}

#[test]
fn two_player_trump_beats_lead_with_zero_points() {
    let mut players = seat_players(&[&["2C", "3C", "4C"], &["2S", "3S", "4S"]]);
    let mut order = vec![0, 1];

    let record = resolve_trick(&mut players, &mut order, card("AS"), 1, &mut FirstIndex).unwrap();

    assert_eq!(record.plays[0].card, card("2C"));
    assert_eq!(record.plays[1].card, card("2S"));
    assert_eq!(record.winner_seat, 1);
    assert_eq!(record.points, 0);
    assert_eq!(order, vec![1, 0]);
}

#[test]
fn resolve_trick_with_empty_hand_errors() {
    let mut players = seat_players(&[&["2C"], &[]]);
    let mut order = vec![0, 1];
    let err = resolve_trick(&mut players, &mut order, card("AS"), 1, &mut FirstIndex).unwrap_err();
    assert_eq!(err, DomainError::EmptyHand { player: "B".into() });
}
