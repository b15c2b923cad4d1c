//! Aggregate statistics over a batch of matches.

use bisca_engine::domain::Team;
use bisca_engine::MatchOutcome;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub games: u32,
    pub team_a_wins: u32,
    pub team_b_wins: u32,
    pub draws: u32,
    team_a_points: u64,
    team_b_points: u64,
}

impl Summary {
    pub fn record(&mut self, outcome: &MatchOutcome) {
        self.games += 1;
        match outcome.winning_team {
            Some(Team::A) => self.team_a_wins += 1,
            Some(Team::B) => self.team_b_wins += 1,
            None => self.draws += 1,
        }
        self.team_a_points += u64::from(outcome.team_a_total);
        self.team_b_points += u64::from(outcome.team_b_total);
    }

    /// Average (team A, team B) totals; zeros before any game.
    pub fn averages(&self) -> (f64, f64) {
        if self.games == 0 {
            return (0.0, 0.0);
        }
        let n = f64::from(self.games);
        (self.team_a_points as f64 / n, self.team_b_points as f64 / n)
    }

    pub fn print(&self, elapsed: std::time::Duration) {
        println!("\n=== Simulation Summary ===");
        println!("Games completed: {}", self.games);
        println!("Total time: {elapsed:?}");
        if self.games == 0 {
            return;
        }
        let (avg_a, avg_b) = self.averages();
        println!("Team A wins: {}", self.team_a_wins);
        println!("Team B wins: {}", self.team_b_wins);
        println!("Draws: {}", self.draws);
        println!("Average totals: {avg_a:.1} x {avg_b:.1}");
    }
}
