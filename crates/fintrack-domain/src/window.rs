//! Calendar-month window resolution.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::TimestampMs;

/// A half-open `[start, end)` millisecond range covering one calendar month.
///
/// Months are zero-based (0 = January, 11 = December) to match the stored
/// record format. Bounds are computed from naive civil dates, so the caller's
/// reference timezone is whatever timezone the stored timestamps use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: TimestampMs,
    pub end: TimestampMs,
}

impl MonthWindow {
    /// Resolves a zero-based month index and year into window bounds.
    ///
    /// `start` is the first instant of the month, `end` the first instant of
    /// the following month; December rolls into January of the next year.
    /// Out-of-range input fails instead of clamping.
    pub fn resolve(month: u32, year: i32) -> Result<Self, MonthWindowError> {
        if month > 11 {
            return Err(MonthWindowError::MonthOutOfRange(month));
        }
        let start = first_instant(year, month)?;
        let (next_year, next_month) = if month == 11 { (year + 1, 0) } else { (year, month + 1) };
        let end = first_instant(next_year, next_month)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: TimestampMs) -> bool {
        date >= self.start && date < self.end
    }
}

fn first_instant(year: i32, month: u32) -> Result<TimestampMs, MonthWindowError> {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|instant| instant.and_utc().timestamp_millis())
        .ok_or(MonthWindowError::YearOutOfRange(year))
}

/// Errors that can occur when resolving a [`MonthWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthWindowError {
    MonthOutOfRange(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for MonthWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthWindowError::MonthOutOfRange(month) => {
                write!(f, "month index {} is outside 0-11", month)
            }
            MonthWindowError::YearOutOfRange(year) => {
                write!(f, "year {} is not representable", year)
            }
        }
    }
}

impl std::error::Error for MonthWindowError {}
