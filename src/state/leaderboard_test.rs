use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_entry(rank: i64, user_id: &str, points: i64) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        user_id: user_id.to_owned(),
        name: format!("user-{user_id}"),
        level: 1,
        points,
    }
}

// =============================================================
// Defaults and refresh transitions
// =============================================================

#[test]
fn leaderboard_state_defaults() {
    let state = LeaderboardState::default();
    assert!(state.entries.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn successful_refresh_replaces_entries_and_clears_loading() {
    let mut state = LeaderboardState::default();
    state.begin_refresh();
    assert!(state.loading);

    state.apply_refresh(Ok(vec![make_entry(1, "u1", 900), make_entry(2, "u2", 400)]));

    assert!(!state.loading);
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.entries[0].rank, 1);
    assert!(state.error.is_none());
}

#[test]
fn failed_refresh_keeps_stale_entries_and_records_error() {
    let mut state = LeaderboardState::default();
    state.apply_refresh(Ok(vec![make_entry(1, "u1", 900)]));

    state.apply_refresh(Err("leaderboard request failed: 503".to_owned()));

    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.error.as_deref(), Some("leaderboard request failed: 503"));
}

#[test]
fn refresh_after_failure_clears_error() {
    let mut state = LeaderboardState::default();
    state.apply_refresh(Err("offline".to_owned()));
    assert!(state.error.is_some());

    state.apply_refresh(Ok(vec![make_entry(1, "u1", 900)]));

    assert!(state.error.is_none());
    assert_eq!(state.entries.len(), 1);
}
