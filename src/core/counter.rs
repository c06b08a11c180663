use super::constants::COUNTER_DURATION_MS;
use std::time::Duration;

/// Leading integer of an attribute value, the way `parseInt` reads it:
/// whitespace and an optional sign, then digits up to the first non-digit.
pub fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end].parse::<i64>().ok().map(|v| v * sign)
}

/// Time-based count-up from 0 to `target`.
#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    pub target: i64,
    pub duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self::with_duration(target, Duration::from_millis(COUNTER_DURATION_MS))
    }

    pub fn with_duration(target: i64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Value to display after `elapsed`, and whether the animation is done.
    /// Frame rate does not matter; only elapsed time does.
    pub fn sample(&self, elapsed: Duration) -> (i64, bool) {
        if self.target <= 0 || self.duration.is_zero() || elapsed >= self.duration {
            return (self.target, true);
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = (self.target as f64 * progress).floor() as i64;
        (value.min(self.target), false)
    }
}
