use log::Level;

/// Visible-area ratio a section must reach before it reveals itself.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// How long a counter takes to count up to its target.
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 1200.0;

pub const HERO_THRESHOLD: f64 = 0.3;
pub const STATS_THRESHOLD: f64 = 0.4;
pub const SECTION_THRESHOLD: f64 = 0.3;

pub const HERO_ROTATION_MS: u32 = 4000;

/// Process ring starts drawing once the globe has faded in.
pub const PROCESS_STROKE_DELAY_MS: u32 = 600;

/// Scroll offset after which the nav bar switches to its solid style.
pub const NAV_SCROLL_OFFSET: i32 = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
