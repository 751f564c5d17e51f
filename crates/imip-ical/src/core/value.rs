//! iCalendar value types (RFC 5545 §3.3).

use super::{DateTime, Duration};

/// A DATE value (RFC 5545 §3.3.4). Carries no time-of-day; properties
/// holding one mark the event as all-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    /// Creates a date.
    #[must_use]
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the chrono date, if the calendar fields are valid.
    #[must_use]
    pub fn naive(self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// Returns a copy shifted by the given number of days.
    #[must_use]
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        use chrono::Datelike;
        let shifted = self.naive()?.checked_add_signed(chrono::TimeDelta::days(days))?;
        Some(Self {
            year: u16::try_from(shifted.year()).ok()?,
            month: shifted.month() as u8,
            day: shifted.day() as u8,
        })
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// A parsed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i32),
    Date(Date),
    DateTime(DateTime),
    Duration(Duration),
    /// Value kept verbatim; used for property types the notification
    /// core never inspects (RRULE text, RECURRENCE-ID, ...).
    Unknown(String),
}

impl Value {
    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a date if it is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the value as a datetime if it is a datetime value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns the value as a duration if it is a duration value.
    #[must_use]
    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            Self::Duration(d) => Some(d),
            _ => None,
        }
    }
}
