use super::*;
use crate::net::types::SessionUser;

#[test]
fn should_redirect_unauth_when_settled_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    // Covers the post-login retry window: `login` raises `loading`, so the
    // guard waits for the delayed verification instead of bouncing.
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(SessionUser {
            id: "u1".to_owned(),
            name: "Ani".to_owned(),
            avatar_url: None,
            wallet_address: None,
            auth_method: "wallet".to_owned(),
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
