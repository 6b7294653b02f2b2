//! Year clock for the chart timeline
//!
//! A bounded counter: starts at the first year, advances one year per tick,
//! and freezes once it reaches the last year.

use serde::{Deserialize, Serialize};

use crate::core::config::{DEFAULT_END_YEAR, DEFAULT_START_YEAR};

/// YearClock tracks the year currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearClock {
    year: i32,
    end_year: i32,
}

impl YearClock {
    /// Create a clock over `[start_year, end_year]`
    ///
    /// An inverted range is clamped so the clock starts already finished.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            year: start_year.min(end_year),
            end_year,
        }
    }

    /// Advance by one year. Returns false once the clock is finished.
    pub fn advance(&mut self) -> bool {
        if self.year >= self.end_year {
            return false;
        }
        self.year += 1;
        true
    }

    pub fn current_year(&self) -> i32 {
        self.year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn is_finished(&self) -> bool {
        self.year >= self.end_year
    }

    /// Ticks left before the clock freezes
    pub fn remaining_ticks(&self) -> u32 {
        (self.end_year - self.year).max(0) as u32
    }
}

impl Default for YearClock {
    fn default() -> Self {
        Self::new(DEFAULT_START_YEAR, DEFAULT_END_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_1950() {
        let clock = YearClock::default();
        assert_eq!(clock.current_year(), 1950);
        assert!(!clock.is_finished());
        assert_eq!(clock.remaining_ticks(), 71);
    }

    #[test]
    fn test_clock_advances_by_one() {
        let mut clock = YearClock::default();
        assert!(clock.advance());
        assert_eq!(clock.current_year(), 1951);
    }

    #[test]
    fn test_k_ticks_reach_min_of_bound() {
        for k in 0..=80u32 {
            let mut clock = YearClock::default();
            for _ in 0..k {
                clock.advance();
            }
            assert_eq!(clock.current_year(), (1950 + k as i32).min(2021));
        }
    }

    #[test]
    fn test_clock_freezes_at_end() {
        let mut clock = YearClock::default();
        while clock.advance() {}
        assert_eq!(clock.current_year(), 2021);
        assert!(clock.is_finished());

        // Further ticks are no-ops
        assert!(!clock.advance());
        assert_eq!(clock.current_year(), 2021);
        assert_eq!(clock.remaining_ticks(), 0);
    }

    #[test]
    fn test_inverted_range_starts_finished() {
        let clock = YearClock::new(2000, 1990);
        assert_eq!(clock.current_year(), 1990);
        assert!(clock.is_finished());
    }
}
