//! Progress panel summarizing the signed-in member's standing.

use leptos::prelude::*;

use crate::net::types::UserStats;
use crate::util::auth::use_auth;
use crate::util::progress::{bar_width_style, clamped_percent, format_points};

/// Statistics panel — fetches the signed-in user's stats and renders level,
/// XP, quest completion, and streak progress.
#[component]
pub fn UserStatsPanel() -> impl IntoView {
    let auth_state = use_auth().state;

    // Refetches whenever the verified user changes (sign-in, sign-out).
    let stats = LocalResource::new(move || {
        let user_id = auth_state.get().user.map(|user| user.id);
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_user_stats(&id).await,
                None => None,
            }
        }
    });

    view! {
        <section class="user-stats" id="stats">
            <h2 class="user-stats__title">"Your Progress"</h2>
            <Suspense fallback=move || view! { <p class="user-stats__loading">"Loading progress..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|fetched| match fetched {
                            Some(stats) => render_stats(stats).into_any(),
                            None => {
                                view! { <p class="user-stats__loading">"No progress to show yet."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

fn render_stats(stats: UserStats) -> impl IntoView {
    let xp_pct = clamped_percent(stats.xp_into_level, stats.xp_for_next_level);
    let quest_pct = clamped_percent(stats.quests_completed, stats.quests_total);

    view! {
        <div class="user-stats__card">
            <div class="user-stats__level-row">
                <span class="user-stats__level">{format!("Level {}", stats.level)}</span>
                {stats
                    .member_since
                    .map(|since| {
                        view! {
                            <span class="user-stats__badge">{format!("Conscious since {since}")}</span>
                        }
                    })}
            </div>

            <StatBar
                label="XP to next level"
                value=format!(
                    "{} / {}",
                    format_points(stats.xp_into_level),
                    format_points(stats.xp_for_next_level),
                )
                percent=xp_pct
            />
            <StatBar
                label="Quests completed"
                value=format!("{} / {}", stats.quests_completed, stats.quests_total)
                percent=quest_pct
            />

            <div class="user-stats__row">
                <span class="user-stats__row-label">"Check-in streak"</span>
                <span class="user-stats__row-value">{format!("{} days", stats.check_in_streak)}</span>
            </div>
            <div class="user-stats__row">
                <span class="user-stats__row-label">"Referrals"</span>
                <span class="user-stats__row-value">{stats.referrals}</span>
            </div>
        </div>
    }
}

#[component]
fn StatBar(label: &'static str, value: String, percent: f64) -> impl IntoView {
    view! {
        <div class="user-stats__bar-row">
            <div class="user-stats__bar-meta">
                <span class="user-stats__row-label">{label}</span>
                <span class="user-stats__row-value">{value}</span>
            </div>
            <div class="user-stats__bar">
                <div class="user-stats__bar-fill" style=bar_width_style(percent)></div>
            </div>
        </div>
    }
}
