//! Leaderboard widget polling the community ranking API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ranking moves as other members check in and finish quests, so the
//! panel refreshes itself on a fixed interval while mounted and stops when
//! the page navigates away.

use leptos::prelude::*;

use crate::net::types::LeaderboardEntry;
use crate::state::leaderboard::LeaderboardState;
use crate::util::auth::use_auth;
use crate::util::progress::{format_points, rank_label};

/// Seconds between ranking refreshes. Tunable.
pub const LEADERBOARD_POLL_SECS: u64 = 15;

/// Rows requested per refresh.
const LEADERBOARD_LIMIT: u32 = 20;

/// Ranking panel — fetches on mount, then polls on a fixed interval.
/// The signed-in member's row is highlighted.
#[component]
pub fn LeaderboardPanel() -> impl IntoView {
    let auth_state = use_auth().state;
    let board = RwSignal::new(LeaderboardState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        board.update(LeaderboardState::begin_refresh);
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let fetched = crate::net::api::fetch_leaderboard(LEADERBOARD_LIMIT).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                board.update(|s| s.apply_refresh(fetched));
                gloo_timers::future::sleep(std::time::Duration::from_secs(LEADERBOARD_POLL_SECS))
                    .await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let self_id = move || auth_state.get().user.map(|user| user.id);

    view! {
        <section class="leaderboard" id="leaderboard">
            <header class="leaderboard__header">
                <h2 class="leaderboard__title">"Conscious Leaderboard"</h2>
                <Show when=move || board.get().error.is_some()>
                    <span class="leaderboard__stale" title=move || board.get().error.unwrap_or_default()>
                        "refresh failed"
                    </span>
                </Show>
            </header>

            <Show
                when=move || !board.get().loading
                fallback=move || view! { <p class="leaderboard__loading">"Loading rankings..."</p> }
            >
                <Show
                    when=move || !board.get().entries.is_empty()
                    fallback=move || view! { <p class="leaderboard__empty">"No rankings yet. Be the first to check in."</p> }
                >
                    <ol class="leaderboard__rows">
                        {move || {
                            let me = self_id();
                            board
                                .get()
                                .entries
                                .into_iter()
                                .map(|entry| {
                                    let highlight = me.as_deref() == Some(entry.user_id.as_str());
                                    view! { <LeaderboardRow entry=entry highlight=highlight/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ol>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn LeaderboardRow(entry: LeaderboardEntry, highlight: bool) -> impl IntoView {
    let row_class = if highlight {
        "leaderboard__row leaderboard__row--self"
    } else {
        "leaderboard__row"
    };

    view! {
        <li class=row_class>
            <span class="leaderboard__rank">{rank_label(entry.rank)}</span>
            <span class="leaderboard__name">{entry.name}</span>
            <span class="leaderboard__level">{format!("Lv {}", entry.level)}</span>
            <span class="leaderboard__points">{format_points(entry.points)}</span>
        </li>
    }
}
