//! Static marketing footer shown at the bottom of the home page.

use leptos::prelude::*;

/// The $CONSCIOUS token contract on Base.
const CONTRACT_ADDRESS: &str = "0xc0a51070c5c0111d8f3a91b42e6a5d7c4b9e21f6";

/// Marketing footer with brand blurb, contract address, and community links.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(CONTRACT_ADDRESS);
            }
        }
        copied.set(true);
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__brand">
                    <span class="site-footer__logo">"Grok & Ani"</span>
                    <p class="site-footer__tagline">
                        "The Conscious Coin — a community experiment in on-chain mindfulness. \
                         Check in, complete quests, climb the leaderboard."
                    </p>
                </div>

                <nav class="site-footer__links">
                    <span class="site-footer__heading">"Resources"</span>
                    <a href="/whitepaper.pdf">"Whitepaper"</a>
                    <a href="/tokenomics">"Tokenomics"</a>
                    <a href="/faq">"FAQ"</a>
                </nav>

                <nav class="site-footer__links">
                    <span class="site-footer__heading">"Community"</span>
                    <a href="https://t.me/consciouscoin" target="_blank" rel="noreferrer">
                        "Telegram"
                    </a>
                    <a href="https://x.com/consciouscoin" target="_blank" rel="noreferrer">
                        "X"
                    </a>
                    <a href="https://discord.gg/consciouscoin" target="_blank" rel="noreferrer">
                        "Discord"
                    </a>
                </nav>
            </div>

            <div class="site-footer__contract">
                <span class="site-footer__heading">"$CONSCIOUS contract"</span>
                <code class="site-footer__address">{CONTRACT_ADDRESS}</code>
                <button class="btn site-footer__copy" on:click=on_copy title="Copy contract address">
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </div>

            <p class="site-footer__disclaimer">
                "$CONSCIOUS is a community token with no intrinsic value and no expectation \
                 of financial return. Nothing here is financial advice."
            </p>
        </footer>
    }
}
