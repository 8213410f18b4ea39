use log::Level;

pub const DEFAULT_SECTION: &str = "home";
pub const THANK_YOU_MODAL: &str = "thankYouModal";

/// How long the simulated send keeps the submit button pending.
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const PENDING_LABEL: &str = "Sending...";

pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_TICK_MS: u32 = 30;

pub const PARTICLE_COUNT: usize = 60;

pub const FAB_SCROLL_THRESHOLD: f64 = 300.0;
pub const FAB_BOUNCE_MS: u32 = 1_000;

pub const LOADING_SKELETON_MS: u32 = 1_500;
pub const SHAKE_MS: u32 = 500;

// Distance from the bottom of the viewport an element must cross before it is revealed
pub const REVEAL_OFFSET: f64 = 150.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
