use std::fmt;

use crate::app::{AdventusError, Result};

pub const FIRST_YEAR: i32 = 2015;
pub const LAST_DAY: u32 = 25;

/// Identity of a single puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleKey {
    year: i32,
    day: u32,
}

impl PuzzleKey {
    pub fn new(year: i32, day: u32) -> Result<Self> {
        if year < FIRST_YEAR {
            return Err(AdventusError::InvalidPuzzle(format!(
                "year {} is before {}",
                year, FIRST_YEAR
            )));
        }
        if !(1..=LAST_DAY).contains(&day) {
            return Err(AdventusError::InvalidPuzzle(format!(
                "day {} is outside 1..={}",
                day, LAST_DAY
            )));
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Synthesized release date, `YYYY-12-DD`.
    pub fn date(&self) -> String {
        format!("{:04}-12-{:02}", self.year, self.day)
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}
