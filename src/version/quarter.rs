//! Calendar quarters used as the ordering unit for EOCP comparison

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

/// A calendar quarter paired with a year, e.g. `Q2/2024`
///
/// Field order matters: the derived ordering compares the year first and the
/// quarter second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuarterYear {
    year: i32,
    quarter: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuarterParseError {
    #[error("expected Qn/YYYY, got {0:?}")]
    Format(String),

    #[error("quarter must be between 1 and 4, got {0}")]
    QuarterOutOfRange(u8),
}

impl QuarterYear {
    pub fn new(quarter: u8, year: i32) -> Result<Self, QuarterParseError> {
        if !(1..=4).contains(&quarter) {
            return Err(QuarterParseError::QuarterOutOfRange(quarter));
        }
        Ok(Self { year, quarter })
    }

    /// Quarter for a zero-based month index (0 = January, 11 = December)
    pub fn from_month_index(month0: u32, year: i32) -> Option<Self> {
        if month0 > 11 {
            return None;
        }
        Some(Self {
            year,
            quarter: (month0 / 3 + 1) as u8,
        })
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

/// The UTC quarter containing `now`
pub fn current_quarter_year(now: DateTime<Utc>) -> QuarterYear {
    QuarterYear::from_month_index(now.month0(), now.year())
        .expect("chrono month0 is within 0..=11")
}

impl fmt::Display for QuarterYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}/{}", self.quarter, self.year)
    }
}

impl FromStr for QuarterYear {
    type Err = QuarterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || QuarterParseError::Format(s.to_string());

        let trimmed = s.trim();
        let rest = trimmed
            .strip_prefix('Q')
            .or_else(|| trimmed.strip_prefix('q'))
            .ok_or_else(format_err)?;
        let (quarter, year) = rest.split_once('/').ok_or_else(format_err)?;

        let quarter: u8 = quarter.trim().parse().map_err(|_| format_err())?;
        let year: i32 = year.trim().parse().map_err(|_| format_err())?;

        Self::new(quarter, year)
    }
}
