//! State for the leaderboard widget.
//!
//! DESIGN
//! ======
//! The widget polls the ranking API on a fixed interval. A failed poll keeps
//! the previous rows on screen and records the error so the panel can flag
//! staleness without blanking a list the user may be reading.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use crate::net::types::LeaderboardEntry;

/// Shared state for the leaderboard panel.
#[derive(Clone, Debug, Default)]
pub struct LeaderboardState {
    /// Most recently fetched ranking rows, best rank first.
    pub entries: Vec<LeaderboardEntry>,
    /// True until the first fetch settles.
    pub loading: bool,
    /// Error from the most recent poll, if it failed.
    pub error: Option<String>,
}

impl LeaderboardState {
    /// Mark the initial fetch as outstanding.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Settle a poll: replace rows on success, keep stale rows on failure.
    pub fn apply_refresh(&mut self, fetched: Result<Vec<LeaderboardEntry>, String>) {
        self.loading = false;
        match fetched {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }
}
