//! Team totals and the final match outcome.

use serde::Serialize;

use crate::domain::player::Player;
use crate::domain::state::Team;

/// Final comparison of the two partnerships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub team_a_total: u32,
    pub team_b_total: u32,
    pub draw: bool,
    /// `None` on a draw.
    pub winning_team: Option<Team>,
    /// Names of the winning team's members in seat order; empty on a draw.
    pub winners: Vec<String>,
}

/// Sum of the scores of every player seated in `team`. `players` is indexed by seat.
pub fn team_total(players: &[Player], team: Team) -> u32 {
    players
        .iter()
        .enumerate()
        .filter(|(seat, _)| Team::of_seat(*seat) == team)
        .map(|(_, p)| p.score())
        .sum()
}

/// Compare team totals. Equal totals are a draw.
pub fn decide_outcome(players: &[Player]) -> MatchOutcome {
    let team_a_total = team_total(players, Team::A);
    let team_b_total = team_total(players, Team::B);

    let winning_team = match team_a_total.cmp(&team_b_total) {
        std::cmp::Ordering::Greater => Some(Team::A),
        std::cmp::Ordering::Less => Some(Team::B),
        std::cmp::Ordering::Equal => None,
    };

    let winners = winning_team
        .map(|team| {
            players
                .iter()
                .enumerate()
                .filter(|(seat, _)| Team::of_seat(*seat) == team)
                .map(|(_, p)| p.name().to_string())
                .collect()
        })
        .unwrap_or_default();

    MatchOutcome {
        team_a_total,
        team_b_total,
        draw: winning_team.is_none(),
        winning_team,
        winners,
    }
}
