//! Quick-actions navigation grid for the home page.

use leptos::prelude::*;

/// Link grid of the most common community actions. Pure rendering; every
/// action is a plain navigation, in-page anchor or external.
#[component]
pub fn QuickActionsPanel() -> impl IntoView {
    view! {
        <nav class="quick-actions">
            <h2 class="quick-actions__title">"Quick Actions"</h2>
            <div class="quick-actions__grid">
                <ActionLink
                    label="Leaderboard"
                    hint="See where you rank"
                    href="#leaderboard"
                    external=false
                />
                <ActionLink
                    label="Your Progress"
                    hint="Level, quests, and streaks"
                    href="#stats"
                    external=false
                />
                <ActionLink
                    label="Buy $CONSCIOUS"
                    hint="Swap on Uniswap"
                    href="https://app.uniswap.org/swap?outputCurrency=CONSCIOUS"
                    external=true
                />
                <ActionLink
                    label="Live Chart"
                    hint="Price on DEX Screener"
                    href="https://dexscreener.com/base/conscious"
                    external=true
                />
                <ActionLink
                    label="Join Telegram"
                    hint="Talk to the community"
                    href="https://t.me/consciouscoin"
                    external=true
                />
            </div>
        </nav>
    }
}

#[component]
fn ActionLink(
    label: &'static str,
    hint: &'static str,
    href: &'static str,
    external: bool,
) -> impl IntoView {
    view! {
        <a
            class="quick-actions__card"
            href=href
            target=if external { Some("_blank") } else { None }
            rel=if external { Some("noreferrer") } else { None }
        >
            <span class="quick-actions__label">{label}</span>
            <span class="quick-actions__hint">{hint}</span>
        </a>
    }
}
