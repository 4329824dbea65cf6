use log::Level;

/// Window scroll offset (px) past which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Viewport widths below this are treated as touch devices with no hover.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

// Fraction of a section that must be on screen before it reveals.
pub const HERO_THRESHOLD: f64 = 0.3;
pub const ABOUT_THRESHOLD: f64 = 0.3;
pub const SERVICES_THRESHOLD: f64 = 0.2;
pub const REVIEWS_THRESHOLD: f64 = 0.3;
pub const CONTACT_THRESHOLD: f64 = 0.2;

pub const COUNTER_TICK_MS: u32 = 16;
pub const REVIEW_ROTATION_MS: u32 = 5_000;
pub const FEATURE_EXPAND_DELAY_MS: u32 = 200;

pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUBMITTED_HOLD_MS: u32 = 3_000;

pub const SERVICE_STAGGER_MS: u32 = 200;
pub const REVIEW_STAGGER_MS: u32 = 150;
pub const STAR_STAGGER_MS: u32 = 100;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
