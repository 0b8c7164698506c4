use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(id: &str, name: &str) -> SessionUser {
    SessionUser {
        id: id.to_owned(),
        name: name.to_owned(),
        avatar_url: None,
        wallet_address: None,
        auth_method: "wallet".to_owned(),
    }
}

/// Simulated persisted hint slot, mutated the way `session_cache::apply` would.
fn apply_hint(slot: &mut Option<SessionUser>, update: &HintUpdate) {
    match update {
        HintUpdate::Store(user) => *slot = Some(user.clone()),
        HintUpdate::Clear => *slot = None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Verification settle
// =============================================================

#[test]
fn successful_verification_authenticates_and_stores_hint() {
    let mut state = AuthState::default();
    let mut hint = None;

    state.begin_verification();
    assert!(state.loading);

    let user = make_user("u1", "Ani");
    let update = state.settle_verification(Some(user.clone()));
    apply_hint(&mut hint, &update);

    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(user.clone()));
    assert_eq!(hint, Some(user));
    assert!(!state.loading);
}

#[test]
fn failed_verification_signs_out_and_clears_hint() {
    let mut state = AuthState::default();
    let mut hint = Some(make_user("u1", "Ani"));

    state.begin_verification();
    let update = state.settle_verification(None);
    apply_hint(&mut hint, &update);

    assert!(!state.is_authenticated());
    assert!(hint.is_none());
    assert!(!state.loading);
}

#[test]
fn failed_verification_revokes_previously_verified_user() {
    let mut state = AuthState::default();
    let mut hint = None;

    let update = state.settle_verification(Some(make_user("u1", "Ani")));
    apply_hint(&mut hint, &update);
    assert!(state.is_authenticated());

    state.begin_verification();
    let update = state.settle_verification(None);
    apply_hint(&mut hint, &update);

    assert!(!state.is_authenticated());
    assert!(hint.is_none());
}

#[test]
fn repeated_successful_verification_is_idempotent() {
    let mut once = AuthState::default();
    let mut hint_once = None;
    once.begin_verification();
    apply_hint(&mut hint_once, &once.settle_verification(Some(make_user("u1", "Ani"))));

    let mut twice = AuthState::default();
    let mut hint_twice = None;
    twice.begin_verification();
    apply_hint(&mut hint_twice, &twice.settle_verification(Some(make_user("u1", "Ani"))));
    twice.begin_verification();
    apply_hint(&mut hint_twice, &twice.settle_verification(Some(make_user("u1", "Ani"))));

    assert_eq!(once.user, twice.user);
    assert_eq!(once.loading, twice.loading);
    assert_eq!(hint_once, hint_twice);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn clear_session_signs_out_regardless_of_prior_state() {
    let mut state = AuthState::default();
    let mut hint = None;
    apply_hint(&mut hint, &state.settle_verification(Some(make_user("u1", "Ani"))));
    assert!(state.is_authenticated());

    let update = state.clear_session();
    apply_hint(&mut hint, &update);

    assert!(!state.is_authenticated());
    assert!(hint.is_none());
    assert!(!state.loading);
}

#[test]
fn clear_session_on_fresh_state_still_clears_hint() {
    let mut state = AuthState::default();
    let mut hint = Some(make_user("stale", "Old"));

    apply_hint(&mut hint, &state.clear_session());

    assert!(!state.is_authenticated());
    assert!(hint.is_none());
}

// =============================================================
// Optimistic login
// =============================================================

#[test]
fn optimistic_login_is_cache_only_not_authenticated() {
    // `login(candidate)` writes the candidate to the hint and marks the
    // retry window as loading; the verified user stays empty until the
    // delayed verification settles.
    let mut state = AuthState::default();
    let mut hint = None;

    let candidate = make_user("u1", "Ani");
    apply_hint(&mut hint, &HintUpdate::Store(candidate.clone()));
    state.begin_verification();

    assert!(!state.is_authenticated());
    assert_eq!(hint, Some(candidate));
}

#[test]
fn delayed_verification_prefers_server_record_over_candidate() {
    let mut state = AuthState::default();
    let mut hint = None;

    // Optimistic candidate from the wallet flow.
    apply_hint(&mut hint, &HintUpdate::Store(make_user("u1", "ani.eth")));
    state.begin_verification();

    // The server's record wins, including any canonicalized fields.
    let verified = make_user("u1", "Ani");
    apply_hint(&mut hint, &state.settle_verification(Some(verified.clone())));

    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(verified.clone()));
    assert_eq!(hint, Some(verified));
}

// =============================================================
// End-to-end scenario
// =============================================================

#[test]
fn failed_check_then_login_then_verified() {
    let mut state = AuthState::default();
    let mut hint = None;

    // Startup check fails (e.g. 401).
    state.begin_verification();
    apply_hint(&mut hint, &state.settle_verification(None));
    assert!(!state.is_authenticated());

    // Wallet flow hands over a candidate; before the retry fires, the
    // holder reports signed out.
    let candidate = make_user("u1", "Ani");
    apply_hint(&mut hint, &HintUpdate::Store(candidate));
    state.begin_verification();
    assert!(!state.is_authenticated());

    // The delayed verification confirms the session.
    apply_hint(&mut hint, &state.settle_verification(Some(make_user("u1", "Ani"))));
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

// =============================================================
// Optimistic display name
// =============================================================

#[test]
fn optimistic_name_prefers_verified_user() {
    let state = AuthState {
        user: Some(make_user("u1", "Ani")),
        loading: false,
    };
    let hint = make_user("u1", "stale-name");
    assert_eq!(optimistic_name(&state, Some(&hint)), Some("Ani".to_owned()));
}

#[test]
fn optimistic_name_uses_hint_only_while_loading() {
    let state = AuthState { user: None, loading: true };
    let hint = make_user("u1", "Ani");
    assert_eq!(optimistic_name(&state, Some(&hint)), Some("Ani".to_owned()));
}

#[test]
fn optimistic_name_ignores_hint_once_settled_signed_out() {
    let state = AuthState { user: None, loading: false };
    let hint = make_user("u1", "Ani");
    assert_eq!(optimistic_name(&state, Some(&hint)), None);
}

#[test]
fn optimistic_name_empty_without_user_or_hint() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(optimistic_name(&state, None), None);
}
