use super::constants::{FLOATING_CARD_BASE_RATE, FLOATING_CARD_RATE_STEP, PARALLAX_RATE};

/// Rate for the n-th floating card; later cards drift faster.
#[inline]
pub fn floating_card_rate(index: usize) -> f64 {
    FLOATING_CARD_BASE_RATE + index as f64 * FLOATING_CARD_RATE_STEP
}

#[inline]
pub fn generic_offset(scrolled: f64) -> f64 {
    scrolled * PARALLAX_RATE
}

#[inline]
pub fn floating_card_offset(scrolled: f64, index: usize) -> f64 {
    scrolled * floating_card_rate(index)
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}
