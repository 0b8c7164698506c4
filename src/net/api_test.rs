use super::*;

#[test]
fn leaderboard_endpoint_formats_limit() {
    assert_eq!(leaderboard_endpoint(20), "/api/leaderboard?limit=20");
}

#[test]
fn user_stats_endpoint_formats_expected_path() {
    assert_eq!(user_stats_endpoint("u123"), "/api/users/u123/stats");
}

#[test]
fn leaderboard_failed_message_formats_status() {
    assert_eq!(leaderboard_failed_message(503), "leaderboard request failed: 503");
}

#[test]
fn challenge_failed_message_formats_status() {
    assert_eq!(challenge_failed_message(429), "challenge request failed: 429");
}

#[test]
fn verify_failed_message_formats_status() {
    assert_eq!(verify_failed_message(401), "wallet verify failed: 401");
}
