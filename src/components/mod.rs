//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and community widgets while reading shared
//! state from Leptos context providers.

pub mod footer;
pub mod leaderboard_panel;
pub mod quick_actions;
pub mod user_stats_panel;
