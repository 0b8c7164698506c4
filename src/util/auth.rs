//! Session-verification flows and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is the single owner of session state for the page. It is
//! provided once at the top of the UI tree; `use_auth` is the only sanctioned
//! way to reach it, and it panics on a missing provider rather than handing
//! out a default. Every suspension point (the `/api/auth/me` round-trip and
//! the post-login retry timer) re-checks the context's alive flag before
//! mutating state, so a torn-down tree never sees a late callback.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::SessionUser;
use crate::state::auth::AuthState;
use crate::util::session_cache;

/// Delay before re-verifying a freshly established session.
///
/// The wallet verify call returns before its session cookie is durably set,
/// so an immediate `/api/auth/me` can lose the race and report signed out.
/// This is a tunable heuristic, not a guarantee; a slow network can still
/// lose the race, which self-corrects on the next check or reload.
pub const LOGIN_VERIFY_DELAY_MS: u64 = 1000;

/// Owner of the page-wide session state and its pending verifications.
#[derive(Clone)]
pub struct AuthContext {
    /// Reactive session state read by guards and components.
    pub state: RwSignal<AuthState>,
    alive: Arc<AtomicBool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Cancel pending verifications and the login retry timer. Called from
    /// `on_cleanup` when the providing scope is torn down; late callbacks
    /// become no-ops instead of mutating disposed state.
    pub fn shutdown(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// True iff a verified session exists (reactive read).
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// Verify the current session cookie against `/api/auth/me`.
    ///
    /// Safe to invoke repeatedly; concurrent invocations run independently
    /// and the last settle wins. Every failure collapses to the signed-out
    /// state with the hint cleared, logged for diagnostics only.
    pub fn check_session(&self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let alive = self.alive.clone();
            state.update(AuthState::begin_verification);
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_current_user().await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                settle(state, fetched);
            });
        }
    }

    /// Accept `candidate` from a login flow that believes a server session
    /// now exists, then re-verify after [`LOGIN_VERIFY_DELAY_MS`].
    ///
    /// The candidate goes into the persisted hint only — never into the
    /// verified user — so `is_authenticated` stays false until the delayed
    /// verification confirms the session. `loading` is raised for the whole
    /// retry window so route guards hold steady instead of bouncing back to
    /// the login page.
    pub fn login(&self, candidate: SessionUser) {
        #[cfg(feature = "hydrate")]
        {
            session_cache::store_hint(&candidate);
            let state = self.state;
            let alive = self.alive.clone();
            state.update(AuthState::begin_verification);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    LOGIN_VERIFY_DELAY_MS,
                ))
                .await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let fetched = crate::net::api::fetch_current_user().await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                settle(state, fetched);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = candidate;
        }
    }

    /// Drop the session locally, synchronously. Does not call the server;
    /// remote invalidation belongs to the UI action that initiated logout.
    pub fn logout(&self) {
        let mut update = None;
        self.state.update(|a| update = Some(a.clear_session()));
        if let Some(update) = update {
            session_cache::apply(&update);
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
fn settle(state: RwSignal<AuthState>, fetched: Option<SessionUser>) {
    if fetched.is_none() {
        log::warn!("session verification failed; treating as signed out");
    }
    let mut update = None;
    state.update(|a| update = Some(a.settle_verification(fetched)));
    if let Some(update) = update {
        session_cache::apply(&update);
    }
}

/// Fetch the session context provided by `App`.
///
/// Panics if called outside the providing scope — session state read from
/// anywhere else is a usage error, not a silent default.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// True when auth has settled and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has settled signed-out.
pub fn install_unauth_redirect<F>(auth: &AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = auth.state;
    Effect::new(move || {
        if should_redirect_unauth(&state.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
