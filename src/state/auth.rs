//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-dependent rendering. The server-side
//! session cookie is the source of truth; this state only ever holds a user
//! that a `/api/auth/me` round-trip confirmed during this page lifetime.
//! A persisted localStorage hint exists purely to avoid a flash of signed-out
//! chrome before the first verification settles; it never satisfies an
//! authorization decision.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the verified user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Present iff a verification round-trip confirmed the session.
    pub user: Option<SessionUser>,
    /// True while a verification round-trip (or the login retry window)
    /// is outstanding.
    pub loading: bool,
}

/// Required mutation of the persisted session hint after a transition.
///
/// Transitions return this directive instead of touching localStorage so the
/// cache contract stays testable outside a browser.
#[derive(Clone, Debug, PartialEq)]
pub enum HintUpdate {
    /// Persist this record as the new hint.
    Store(SessionUser),
    /// Remove the hint.
    Clear,
}

impl AuthState {
    /// True iff a verified session exists. Never consults the persisted hint.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Mark a verification round-trip as outstanding.
    pub fn begin_verification(&mut self) {
        self.loading = true;
    }

    /// Settle a verification attempt.
    ///
    /// `Some(user)` confirms the session: the record becomes the verified
    /// user and must be mirrored into the hint. `None` collapses every
    /// failure mode (transport error, non-OK status, malformed body) into
    /// the signed-out state with the hint cleared — absence of proof of a
    /// session is treated as absence of a session.
    pub fn settle_verification(&mut self, verified: Option<SessionUser>) -> HintUpdate {
        self.loading = false;
        match verified {
            Some(user) => {
                self.user = Some(user.clone());
                HintUpdate::Store(user)
            }
            None => {
                self.user = None;
                HintUpdate::Clear
            }
        }
    }

    /// Drop the session locally. Synchronous; any server-side invalidation
    /// belongs to the caller that initiated the logout.
    pub fn clear_session(&mut self) -> HintUpdate {
        self.user = None;
        self.loading = false;
        HintUpdate::Clear
    }
}

/// Display name for optimistic header rendering.
///
/// Prefers the verified user; falls back to the persisted hint only while a
/// verification is still outstanding, so a returning user does not see a
/// flash of signed-out chrome. Once verification has settled signed-out, the
/// hint is ignored.
pub fn optimistic_name(state: &AuthState, hint: Option<&SessionUser>) -> Option<String> {
    if let Some(user) = &state.user {
        return Some(user.name.clone());
    }
    if state.loading {
        return hint.map(|user| user.name.clone());
    }
    None
}
