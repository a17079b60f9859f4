//! Wall-clock time source
//!
//! Callers hand a `Clock` to anything that stamps times, so tests can pin
//! the current time.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Real system time
    #[default]
    System,
    /// Always reports the given Unix timestamp
    Fixed(u64),
}

impl Clock {
    /// Current Unix time in seconds
    pub fn now(&self) -> u64 {
        match self {
            Clock::System => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            Clock::Fixed(t) => *t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(Clock::Fixed(42).now(), 42);
    }

    #[test]
    fn test_system_clock_is_after_genesis() {
        assert!(Clock::System.now() > 1_555_920_000);
    }
}
