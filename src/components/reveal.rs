//! Class strings shared by every section's reveal-on-scroll transition.

pub const SHOWN: &str = "opacity-100 translate-y-0";
pub const HIDDEN: &str = "opacity-0 translate-y-6";
pub const SCALED_IN: &str = "opacity-100 scale-100";

pub fn reveal(visible: bool) -> &'static str {
    reveal_with(visible, SHOWN, HIDDEN)
}

pub fn reveal_with(visible: bool, shown: &'static str, hidden: &'static str) -> &'static str {
    if visible {
        shown
    } else {
        hidden
    }
}

/// Inline style staggering a card's transition by its position.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", index as u64 * u64::from(step_ms))
}
