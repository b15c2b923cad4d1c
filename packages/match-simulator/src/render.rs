//! Text transcript of a match.

use bisca_engine::{MatchOutcome, TrickRecord};

/// "Trick N:", one "name: card" line per play, then the winner.
pub fn trick_lines(trick: &TrickRecord) -> Vec<String> {
    let mut lines = Vec::with_capacity(trick.plays.len() + 2);
    lines.push(format!("Trick {}:", trick.trick_no));
    for play in &trick.plays {
        lines.push(format!("{}: {}", play.player, play.card));
    }
    lines.push(format!("→ {} (+{})", trick.winner().player, trick.points));
    lines
}

/// "Victory for A and C! 64 x 56" or "Draw! 60 x 60", team A's total first.
pub fn outcome_line(outcome: &MatchOutcome) -> String {
    let score = format!("{} x {}", outcome.team_a_total, outcome.team_b_total);
    if outcome.draw {
        format!("Draw! {score}")
    } else {
        format!("Victory for {}! {score}", outcome.winners.join(" and "))
    }
}
