//! Deterministic random sources for driving matches in tests.

use std::collections::VecDeque;

use bisca_engine::RandomSource;

/// Always picks position 0. A shuffle keeps build order, so the trump is AC
/// and every player plays the card they have held longest.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstIndex;

impl RandomSource for FirstIndex {
    fn index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Always picks the last position.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastIndex;

impl RandomSource for LastIndex {
    fn index(&mut self, len: usize) -> usize {
        len.saturating_sub(1)
    }
}

/// Replays a fixed list of picks (each reduced modulo `len`), then falls back to 0.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    picks: VecDeque<usize>,
    calls: usize,
}

impl Scripted {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            calls: 0,
        }
    }

    /// Number of indices handed out so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for Scripted {
    fn index(&mut self, len: usize) -> usize {
        self.calls += 1;
        self.picks.pop_front().map_or(0, |pick| pick % len)
    }
}
