//! Login page driving the wallet signature flow.
//!
//! The wallet flow is the collaborator that establishes the server session:
//! connect, fetch a challenge, sign it, submit the signature. On success the
//! returned record is handed to the session holder's `login`, which treats it
//! as a hint and re-verifies once the session cookie has had time to settle.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::SessionUser;
use crate::util::auth::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_connect = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Waiting for wallet...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match wallet_sign_in().await {
                    Ok(user) => {
                        auth.login(user);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Grok & Ani"</h1>
                <p class="login-card__subtitle">"The Conscious Coin"</p>
                <p class="login-card__blurb">
                    "Sign in with your wallet to check in, complete quests, and climb the \
                     leaderboard."
                </p>
                <button class="login-button" on:click=on_connect disabled=move || busy.get()>
                    "Connect Wallet"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Full wallet handshake: account access, challenge, signature, verify.
#[cfg(feature = "hydrate")]
async fn wallet_sign_in() -> Result<SessionUser, String> {
    let address = crate::util::wallet::connect().await?;
    let challenge = crate::net::api::request_wallet_challenge(&address).await?;
    let signature = crate::util::wallet::sign_message(&address, &challenge).await?;
    crate::net::api::verify_wallet_signature(&address, &signature).await
}
