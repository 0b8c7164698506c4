//! Shared DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the community API's JSON payloads so serde decoding
//! stays schema-driven. Numeric fields use a tolerant deserializer because
//! the backend emits integer-valued floats for counters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in community member as returned by `/api/auth/me`.
///
/// The session holder treats this record as opaque proof of identity; only
/// rendering code reads individual fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Linked wallet address, if the account was created via wallet sign-in.
    pub wallet_address: Option<String>,
    /// Authentication method used to create the session (e.g. `"wallet"`).
    #[serde(default = "default_auth_method")]
    pub auth_method: String,
}

fn default_auth_method() -> String {
    "session".to_owned()
}

/// One row of the community ranking as returned by `/api/leaderboard`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the ranking.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub rank: i64,
    /// User this row belongs to.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Consciousness level reached.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub level: i64,
    /// Total points earned across quests, check-ins, and referrals.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub points: i64,
}

/// Aggregate progress statistics for one user, from `/api/users/{id}/stats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Current consciousness level.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub level: i64,
    /// XP earned inside the current level.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub xp_into_level: i64,
    /// XP required to advance to the next level.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub xp_for_next_level: i64,
    /// Quests completed so far.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub quests_completed: i64,
    /// Quests currently available.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub quests_total: i64,
    /// Members recruited through this user's invite link.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub referrals: i64,
    /// Consecutive daily check-ins.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub check_in_streak: i64,
    /// ISO 8601 date string of the user's first session, if available.
    pub member_since: Option<String>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
