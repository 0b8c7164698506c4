//! Persisted session hint in browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the last-known user record so returning visitors see their own name
//! while the real session check is in flight. The hint may be stale or wrong;
//! authorization always goes through the verified `AuthState`.

use crate::net::types::SessionUser;
use crate::state::auth::HintUpdate;

#[cfg(feature = "hydrate")]
const HINT_KEY: &str = "conscious_coin_session_hint";

/// Read the persisted hint, if any. Render-time use only.
pub fn load_hint() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(HINT_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `user` as the new hint.
pub fn store_hint(user: &SessionUser) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(HINT_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the persisted hint.
pub fn clear_hint() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(HINT_KEY);
        }
    }
}

/// Apply a transition's hint directive to localStorage.
pub fn apply(update: &HintUpdate) {
    match update {
        HintUpdate::Store(user) => store_hint(user),
        HintUpdate::Clear => clear_hint(),
    }
}
