//! REST API helpers for communicating with the community server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! ranking fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LeaderboardEntry, SessionUser, UserStats};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn leaderboard_endpoint(limit: u32) -> String {
    format!("/api/leaderboard?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_stats_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/stats")
}

#[cfg(any(test, feature = "hydrate"))]
fn leaderboard_failed_message(status: u16) -> String {
    format!("leaderboard request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn challenge_failed_message(status: u16) -> String {
    format!("challenge request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_failed_message(status: u16) -> String {
    format!("wallet verify failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the top `limit` ranking rows from `/api/leaderboard`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status, so the widget can keep its previous rows visible.
pub async fn fetch_leaderboard(limit: u32) -> Result<Vec<LeaderboardEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = leaderboard_endpoint(limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(leaderboard_failed_message(resp.status()));
        }
        resp.json::<Vec<LeaderboardEntry>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err("not available on server".to_owned())
    }
}

/// Fetch a user's progress statistics from `/api/users/{user_id}/stats`.
pub async fn fetch_user_stats(user_id: &str) -> Option<UserStats> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_stats_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserStats>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct WalletChallengeResponse {
    challenge: String,
}

/// Request a sign-in challenge for `address` via `POST /api/auth/wallet/challenge`.
///
/// The returned message must be signed by the wallet and submitted to
/// [`verify_wallet_signature`].
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn request_wallet_challenge(address: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "address": address });
        let resp = gloo_net::http::Request::post("/api/auth/wallet/challenge")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(challenge_failed_message(resp.status()));
        }
        let body: WalletChallengeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.challenge)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        Err("not available on server".to_owned())
    }
}

/// Submit a signed challenge via `POST /api/auth/wallet/verify`.
///
/// On success the server has issued a session cookie and returns the user
/// record it now considers signed in. The caller is expected to hand that
/// record to the session holder's `login`, which re-verifies it after the
/// cookie has had time to settle.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the signature is rejected.
pub async fn verify_wallet_signature(address: &str, signature: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "address": address, "signature": signature });
        let resp = gloo_net::http::Request::post("/api/auth/wallet/verify")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_failed_message(resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (address, signature);
        Err("not available on server".to_owned())
    }
}
