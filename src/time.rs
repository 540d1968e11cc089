//! CF time coordinate decoding and calendar-month keys
//!
//! NetCDF stores time as numeric offsets with a units string such as
//! `"days since 2023-01-01"`. This module turns those offsets into
//! [`NaiveDateTime`] timestamps and provides the `(year, month)` bucket key
//! used by the monthly statistics.

use crate::errors::{ClimateError, Result};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;

/// Calendars whose dates map directly onto chrono's proleptic Gregorian dates
const SUPPORTED_CALENDARS: [&str; 3] = ["standard", "gregorian", "proleptic_gregorian"];

/// Unit of a CF time offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    fn parse(unit: &str) -> Result<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "milliseconds" | "millisecond" | "msec" | "ms" => Ok(Self::Milliseconds),
            "seconds" | "second" | "secs" | "sec" | "s" => Ok(Self::Seconds),
            "minutes" | "minute" | "mins" | "min" => Ok(Self::Minutes),
            "hours" | "hour" | "hrs" | "hr" | "h" => Ok(Self::Hours),
            "days" | "day" | "d" => Ok(Self::Days),
            other => Err(ClimateError::TimeError(format!(
                "Unsupported time unit '{other}'"
            ))),
        }
    }

    /// Length of one unit in milliseconds
    #[must_use]
    pub const fn millis(self) -> f64 {
        match self {
            Self::Milliseconds => 1.0,
            Self::Seconds => 1_000.0,
            Self::Minutes => 60_000.0,
            Self::Hours => 3_600_000.0,
            Self::Days => 86_400_000.0,
        }
    }
}

/// Parsed `"<unit> since <reference>"` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeUnits {
    pub unit: TimeUnit,
    pub reference: NaiveDateTime,
}

impl TimeUnits {
    /// Parses a CF units attribute such as `"hours since 1900-01-01 00:00:00"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::TimeError`] if the string is not of the form
    /// `<unit> since <date>` or either part cannot be parsed.
    pub fn parse(units: &str) -> Result<Self> {
        let (unit, reference) = units
            .trim()
            .split_once(" since ")
            .ok_or_else(|| {
                ClimateError::TimeError(format!(
                    "Expected '<unit> since <reference>' but found '{units}'"
                ))
            })?;

        Ok(Self {
            unit: TimeUnit::parse(unit.trim())?,
            reference: parse_reference(reference.trim())?,
        })
    }

    /// Converts one numeric offset into a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::TimeError`] for non-finite offsets or offsets
    /// that fall outside chrono's representable range.
    pub fn decode(&self, offset: f64) -> Result<NaiveDateTime> {
        let millis = (offset * self.unit.millis()).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Err(ClimateError::TimeError(format!(
                "Time offset {offset} cannot be represented"
            )));
        }

        #[allow(clippy::cast_possible_truncation)]
        let millis = millis as i64;
        TimeDelta::try_milliseconds(millis)
            .and_then(|delta| self.reference.checked_add_signed(delta))
            .ok_or_else(|| {
                ClimateError::TimeError(format!("Time offset {offset} is out of range"))
            })
    }

    /// Decodes a whole coordinate array.
    ///
    /// # Errors
    ///
    /// Fails on the first offset that cannot be decoded.
    pub fn decode_all(&self, offsets: &[f64]) -> Result<Vec<NaiveDateTime>> {
        offsets.iter().map(|&offset| self.decode(offset)).collect()
    }
}

fn parse_reference(reference: &str) -> Result<NaiveDateTime> {
    let cleaned = reference
        .trim_end_matches(" UTC")
        .trim_end_matches('Z')
        .trim();

    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(cleaned, format) {
            return Ok(parsed);
        }
    }

    let date = NaiveDate::parse_from_str(cleaned, "%Y-%m-%d")?;
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| ClimateError::TimeError(format!("Invalid reference date '{reference}'")))
}

/// Checks the `calendar` attribute of a time coordinate.
///
/// # Errors
///
/// Returns [`ClimateError::TimeError`] for calendars other than the
/// Gregorian family (e.g. `noleap`, `360_day`).
pub fn check_calendar(calendar: Option<&str>) -> Result<()> {
    match calendar {
        None => Ok(()),
        Some(name) if SUPPORTED_CALENDARS.contains(&name.trim().to_ascii_lowercase().as_str()) => {
            Ok(())
        }
        Some(name) => Err(ClimateError::TimeError(format!(
            "Unsupported calendar '{name}'"
        ))),
    }
}

/// Calendar-month bucket key, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    #[must_use]
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// Midnight on the last day of the month, used to label monthly points.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::TimeError`] if the month is outside chrono's range.
    pub fn month_end(self) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.pred_opt())
            .and_then(|last| last.and_hms_opt(0, 0, 0))
            .ok_or_else(|| ClimateError::TimeError(format!("Invalid month {self}")))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
