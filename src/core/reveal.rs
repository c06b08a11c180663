use super::constants::{REVEAL_CASCADE_STEP_MS, REVEAL_MAX_DELAY_TIER};

pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "revealed";
pub const DELAY_CLASSES: [&str; REVEAL_MAX_DELAY_TIER] =
    ["reveal-delay-1", "reveal-delay-2", "reveal-delay-3"];

/// Delay tier for the n-th auto-tagged element of a section. The first one
/// reveals immediately.
#[inline]
pub fn delay_tier(index: usize) -> Option<usize> {
    (index > 0).then(|| index.min(REVEAL_MAX_DELAY_TIER))
}

#[inline]
pub fn delay_class(tier: usize) -> Option<&'static str> {
    tier.checked_sub(1).and_then(|i| DELAY_CLASSES.get(i).copied())
}

/// Offset of the n-th staged child after its container is revealed.
#[inline]
pub fn cascade_delay_ms(index: usize) -> i32 {
    (index as i32).saturating_mul(REVEAL_CASCADE_STEP_MS)
}

/// Selector matching every staged child.
pub fn staged_selector() -> String {
    DELAY_CLASSES
        .iter()
        .map(|c| format!(".{}", c))
        .collect::<Vec<_>>()
        .join(", ")
}
