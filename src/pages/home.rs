//! Authenticated landing page composing the community panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It guards on the session holder,
//! shows an optimistic greeting from the persisted hint while the startup
//! verification is in flight, and composes the quick-actions, leaderboard,
//! and progress panels above the marketing footer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::footer::SiteFooter;
use crate::components::leaderboard_panel::LeaderboardPanel;
use crate::components::quick_actions::QuickActionsPanel;
use crate::components::user_stats_panel::UserStatsPanel;
use crate::state::auth::optimistic_name;
use crate::util::auth::{install_unauth_redirect, use_auth};
use crate::util::session_cache;

/// Home page — community dashboard. Redirects to `/login` once the session
/// check settles signed-out.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate);

    let auth_state = auth.state;

    // Render-time hint read: greeting only, never authorization.
    let display_name = move || {
        let state = auth_state.get();
        let hint = session_cache::load_hint();
        optimistic_name(&state, hint.as_ref())
    };

    let logout_auth = auth.clone();
    let on_logout = move |_| {
        // Local-only drop of the session holder; the server-side cookie is
        // invalidated by the fire-and-forget call below.
        logout_auth.logout();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <Show
            when=move || !auth_state.get().loading && auth_state.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p class="home-page__status">
                            {move || {
                                if auth_state.get().loading {
                                    match display_name() {
                                        Some(name) => format!("Welcome back, {name} — verifying session..."),
                                        None => "Verifying session...".to_owned(),
                                    }
                                } else {
                                    "Redirecting to login...".to_owned()
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__toolbar toolbar">
                    <span class="toolbar__brand">"Grok & Ani"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <span class="toolbar__subtitle">"The Conscious Coin"</span>

                    <span class="toolbar__spacer"></span>

                    <span class="toolbar__self">
                        {move || display_name().unwrap_or_else(|| "anon".to_owned())}
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </header>

                <main class="home-page__grid">
                    <QuickActionsPanel/>
                    <UserStatsPanel/>
                    <LeaderboardPanel/>
                </main>

                <SiteFooter/>
            </div>
        </Show>
    }
}
