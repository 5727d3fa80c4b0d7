//! Behavioural constants shared by the state modules and the view layer.
//!
//! Site-level settings (address, asset dir, environment) come from
//! `[package.metadata.leptos]` through `leptos::prelude::get_configuration`.

/// Delay before the chat greeting replaces the typing indicator.
pub const GREETING_DELAY_MS: f64 = 1500.0;
/// Delay before an "ask for help" reply replaces the typing indicator.
pub const HELP_DELAY_MS: f64 = 1000.0;
/// How often the time-of-day theme is re-evaluated.
pub const THEME_REFRESH_MS: u64 = 60 * 60 * 1000;
/// How often the simulated visitors may wander to another section.
pub const PRESENCE_REFRESH_MS: u64 = 15_000;
/// Tick length of the hero role typewriter.
pub const TYPEWRITER_TICK_MS: u64 = 60;
/// Ticks a fully typed role stays on screen.
pub const TYPEWRITER_HOLD_TICKS: u32 = 17;

pub const AMBIENT_TRACK: &str = "/assets/audio/ambient.mp3";
pub const AMBIENT_VOLUME: f64 = 0.1;

/// Number of fake visitors shown by the presence badge.
pub const SIMULATED_VISITORS: usize = 3;
/// Fake visitors start with a timestamp at most this far in the past.
pub const VISITOR_MAX_AGE_MS: i64 = 5 * 60 * 1000;
/// Chance that a visitor moves on each presence refresh.
pub const VISITOR_MOVE_CHANCE: f64 = 0.3;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Day the site was built, `YYYY-MM-DD`. Falls back to the raw stamp.
pub fn build_date() -> String {
    chrono::DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| BUILD_TIME.to_string())
}
