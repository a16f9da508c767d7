//! Calendar date handling
//!
//! Policies and claims are dated with plain calendar dates (`NaiveDate`).
//! This module provides:
//! - Strict parsing of external `YYYY-MM-DD` input
//! - The supported year window that guards queries against pathological dates
//! - `CoveragePeriod`, the inclusive date range a policy provides cover for

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to date input and date ranges
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date format, expected YYYY-MM-DD: {input}")]
    InvalidFormat {
        input: String,
    },

    #[error("Date out of supported range ({min}-{max}): {date}")]
    YearOutOfRange {
        date: NaiveDate,
        min: i32,
        max: i32,
    },

    #[error("Invalid supported year range: {min} is after {max}")]
    InvalidYearRange {
        min: i32,
        max: i32,
    },

    #[error("start date is required")]
    MissingStart,

    #[error("end date {end} must be on or after start date {start}")]
    InvertedPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Parses a canonical `YYYY-MM-DD` date
///
/// Anything else (single-digit months, other separators, compact forms,
/// surrounding whitespace, impossible calendar dates) is rejected and the
/// offending input is echoed in the error.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, TemporalError> {
    let invalid = || TemporalError::InvalidFormat {
        input: input.to_string(),
    };

    let bytes = input.as_bytes();
    let canonical = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !canonical {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())
}

/// Inclusive window of calendar years accepted by date-based queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedYears {
    min: i32,
    max: i32,
}

impl SupportedYears {
    pub const DEFAULT_MIN: i32 = 1900;
    pub const DEFAULT_MAX: i32 = 2100;

    pub fn new(min: i32, max: i32) -> Result<Self, TemporalError> {
        if min > max {
            return Err(TemporalError::InvalidYearRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.min..=self.max).contains(&date.year())
    }

    /// Returns the date unchanged if its year is inside the window
    pub fn check(&self, date: NaiveDate) -> Result<NaiveDate, TemporalError> {
        if self.contains(date) {
            Ok(date)
        } else {
            Err(TemporalError::YearOutOfRange {
                date,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for SupportedYears {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// The dates a policy provides cover for
///
/// Both ends are inclusive. A missing end means open-ended cover: the
/// period contains every date from `start` onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl CoveragePeriod {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if end < start {
                return Err(TemporalError::InvertedPeriod { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Builds a period from optional inputs, as received from callers
    pub fn from_parts(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, TemporalError> {
        let start = start.ok_or(TemporalError::MissingStart)?;
        Self::new(start, end)
    }

    pub fn bounded(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        Self::new(start, Some(end))
    }

    pub fn open_ended(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}
