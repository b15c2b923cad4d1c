//! Per-match records written to the output files.

use bisca_engine::domain::Team;
use bisca_engine::MatchResult;
use serde::Serialize;

/// Complete record of one simulated match.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub duration_ms: f64,
    pub result: MatchResult,
}

/// One row of the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub team_a_total: u32,
    pub team_b_total: u32,
    /// "A", "B" or "draw".
    pub winner: String,
    pub winners: String,
}

impl From<&GameRecord> for CsvSummaryRow {
    fn from(record: &GameRecord) -> Self {
        let outcome = &record.result.outcome;
        let winner = match outcome.winning_team {
            Some(Team::A) => "A",
            Some(Team::B) => "B",
            None => "draw",
        };
        Self {
            game_id: record.game_id,
            seed: record.seed,
            team_a_total: outcome.team_a_total,
            team_b_total: outcome.team_b_total,
            winner: winner.to_string(),
            winners: outcome.winners.join(" "),
        }
    }
}

pub fn build_game_record(game_id: u32, seed: u64, result: MatchResult, duration_ms: f64) -> GameRecord {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());
    GameRecord {
        game_id,
        seed,
        timestamp,
        duration_ms,
        result,
    }
}
