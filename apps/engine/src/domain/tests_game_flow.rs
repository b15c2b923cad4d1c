use crate::domain::game_flow::{create_match, play_match, Match};
use crate::domain::random::seeded_rng;
use crate::domain::rules::{FINAL_TRICKS, TOTAL_POINTS};
use crate::domain::test_random::FirstIndex;
use crate::domain::{Card, Deck, Phase, Team};
use crate::errors::domain::{ConfigurationKind, DomainError};

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// Deck in build order with AC (the bottom card) as trump.
fn ordered_deck() -> Deck {
    let mut deck = Deck::build();
    deck.shuffle(&mut FirstIndex);
    deck.designate_trump().expect("fresh deck accepts a trump");
    deck
}

fn config_kind(err: DomainError) -> Option<ConfigurationKind> {
    match err {
        DomainError::Configuration(kind, _) => Some(kind),
        _ => None,
    }
}

#[test]
fn create_match_accepts_two_or_four_players() {
    let mut rng = seeded_rng(1);
    assert!(create_match(&["A", "B"], &mut rng).is_ok());
    assert!(create_match(&["A", "B", "C", "D"], &mut rng).is_ok());
}

#[test]
fn create_match_rejects_other_counts() {
    let mut rng = seeded_rng(1);
    for names in [vec![], vec!["A"], vec!["A", "B", "C"], vec!["A", "B", "C", "D", "E"]] {
        let err = create_match(names.as_slice(), &mut rng).unwrap_err();
        assert_eq!(config_kind(err), Some(ConfigurationKind::PlayerCount), "{names:?}");
    }
}

#[test]
fn create_match_rejects_empty_names() {
    let mut rng = seeded_rng(1);
    let err = create_match(&["", "B"], &mut rng).unwrap_err();
    assert_eq!(config_kind(err), Some(ConfigurationKind::EmptyName));
    let err = create_match(&["A", "B", "  ", "D"], &mut rng).unwrap_err();
    assert_eq!(config_kind(err), Some(ConfigurationKind::EmptyName));
}

#[test]
fn new_match_is_not_started_with_full_deck() {
    let game = create_match(&["A", "B", "C", "D"], &mut seeded_rng(2)).unwrap();
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.deck().remaining(), 40);
    assert_eq!(game.order(), &[0, 1, 2, 3]);
    assert!(game.players().iter().all(|p| p.hand().is_empty()));
    assert_eq!(game.team_members(Team::A), vec!["A", "C"]);
    assert_eq!(game.team_members(Team::B), vec!["B", "D"]);
}

#[test]
fn with_deck_requires_trump() {
    let err = Match::with_deck(&["A", "B"], Deck::build()).unwrap_err();
    assert!(matches!(err, DomainError::Invariant(_)));
}

#[test]
fn initial_deal_gives_three_cards_each() {
    let mut game = Match::with_deck(&["A", "B"], ordered_deck()).unwrap();
    game.deal_initial().unwrap();
    assert_eq!(game.phase(), Phase::Dealing);
    assert_eq!(game.deck().remaining(), 34);
    // Dealt round-robin from the top of the deck
    let a: Vec<String> = game.players()[0].hand().iter().map(Card::to_string).collect();
    let b: Vec<String> = game.players()[1].hand().iter().map(Card::to_string).collect();
    assert_eq!(a, vec!["2H", "2D", "3H"]);
    assert_eq!(b, vec!["2S", "2C", "3S"]);
}

#[test]
fn phase_operations_out_of_order_are_rejected() {
    let mut game = Match::with_deck(&["A", "B"], ordered_deck()).unwrap();
    let mut rng = FirstIndex;

    assert!(matches!(game.play_trick(&mut rng), Err(DomainError::Invariant(_))));
    assert!(matches!(game.replenish(), Err(DomainError::Invariant(_))));
    assert!(matches!(game.finish(), Err(DomainError::Invariant(_))));

    game.deal_initial().unwrap();
    assert!(matches!(game.deal_initial(), Err(DomainError::Invariant(_))));
    assert!(matches!(game.replenish(), Err(DomainError::Invariant(_))));

    game.play_trick(&mut rng).unwrap();
    assert_eq!(game.phase(), Phase::TrickLoop);
    // The next trick has to wait for the hands to be topped up
    assert!(matches!(game.play_trick(&mut rng), Err(DomainError::Invariant(_))));
    game.replenish().unwrap();
    assert!(matches!(game.replenish(), Err(DomainError::Invariant(_))));
    assert!(matches!(game.finish(), Err(DomainError::Invariant(_))));
    assert!(game.players().iter().all(|p| p.hand().len() == 3));
}

#[test]
fn first_index_match_is_predictable() {
    let game = Match::with_deck(&["P1", "P2"], ordered_deck()).unwrap();
    let result = play_match(game, &mut FirstIndex).unwrap();

    assert_eq!(result.trump, card("AC"));
    let t1 = &result.tricks[0];
    assert_eq!(t1.plays[0].card, card("2H"));
    assert_eq!(t1.plays[1].card, card("2S"));
    // Neither card is trump (clubs): the lead holds
    assert_eq!(t1.winner_seat, 0);
    assert_eq!(t1.points, 0);

    // P1 keeps the lead, then 2D meets the trump 2C
    let t2 = &result.tricks[1];
    assert_eq!(t2.plays[0].seat, 0);
    assert_eq!(t2.plays[0].card, card("2D"));
    assert_eq!(t2.plays[1].card, card("2C"));
    assert_eq!(t2.winner_seat, 1);
    assert_eq!(t2.points, 0);

    // P2 now leads
    let t3 = &result.tricks[2];
    assert_eq!(t3.plays[0].player, "P2");
    assert_eq!(t3.plays[0].card, card("3S"));
    assert_eq!(t3.plays[1].card, card("3H"));
    assert_eq!(t3.winner_seat, 1);
}

#[test]
fn full_two_player_match_by_phases() {
    let mut rng = seeded_rng(2024);
    let mut game = create_match(&["Filipe", "Maja"], &mut rng).unwrap();
    game.deal_initial().unwrap();

    let mut awarded = 0;
    let mut loop_tricks = 0;
    while game.deck().remaining() > 0 {
        awarded += game.play_trick(&mut rng).unwrap().points;
        loop_tricks += 1;
        game.replenish().unwrap();
    }
    assert_eq!(loop_tricks, 17);
    assert_eq!(game.phase(), Phase::FinalTricks);
    assert!(game.players().iter().all(|p| p.hand().len() == 3));

    for _ in 0..FINAL_TRICKS {
        awarded += game.play_trick(&mut rng).unwrap().points;
    }
    assert!(matches!(game.play_trick(&mut rng), Err(DomainError::Invariant(_))));

    let outcome = game.finish().unwrap();
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.tricks_played(), 20);
    assert_eq!(awarded, TOTAL_POINTS);
    assert_eq!(outcome.team_a_total + outcome.team_b_total, TOTAL_POINTS);
    assert!(game.players().iter().all(|p| p.hand().is_empty()));
}

#[test]
fn four_player_match_keeps_teams_fixed() {
    let mut rng = seeded_rng(31);
    let result = create_match(&["Ana", "Bruno", "Carla", "Duarte"], &mut rng)
        .and_then(|game| play_match(game, &mut rng))
        .unwrap();

    assert_eq!(result.tricks.len(), 10);
    assert!(result.tricks.iter().all(|t| t.plays.len() == 4));
    assert!(result.tricks.iter().all(|t| t.trump == result.trump));

    let team_a: u32 = result
        .tricks
        .iter()
        .filter(|t| t.winner_seat % 2 == 0)
        .map(|t| t.points)
        .sum();
    assert_eq!(result.outcome.team_a_total, team_a);
    assert_eq!(
        result.outcome.team_a_total + result.outcome.team_b_total,
        TOTAL_POINTS
    );
    match result.outcome.winning_team {
        Some(Team::A) => assert_eq!(result.outcome.winners, vec!["Ana", "Carla"]),
        Some(Team::B) => assert_eq!(result.outcome.winners, vec!["Bruno", "Duarte"]),
        None => assert!(result.outcome.draw),
    }
}

#[test]
fn every_trick_is_led_by_previous_winner() {
    let mut rng = seeded_rng(404);
    let result = create_match(&["A", "B", "C", "D"], &mut rng)
        .and_then(|game| play_match(game, &mut rng))
        .unwrap();
    assert_eq!(result.tricks[0].plays[0].seat, 0);
    for pair in result.tricks.windows(2) {
        assert_eq!(pair[1].plays[0].seat, pair[0].winner_seat);
        assert_eq!(pair[1].trick_no, pair[0].trick_no + 1);
    }
}

#[test]
fn every_card_is_played_exactly_once() {
    let mut rng = seeded_rng(9);
    let result = create_match(&["A", "B"], &mut rng)
        .and_then(|game| play_match(game, &mut rng))
        .unwrap();
    let mut played: Vec<Card> = result
        .tricks
        .iter()
        .flat_map(|t| t.plays.iter().map(|p| p.card))
        .collect();
    played.sort();
    played.dedup();
    assert_eq!(played.len(), 40);
}

#[test]
fn same_seed_same_match() {
    let run = |seed| {
        let mut rng = seeded_rng(seed);
        create_match(&["A", "B", "C", "D"], &mut rng)
            .and_then(|game| play_match(game, &mut rng))
            .unwrap()
    };
    assert_eq!(run(77), run(77));
}
