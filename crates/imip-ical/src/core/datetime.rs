//! iCalendar DATE-TIME values (RFC 5545 §3.3.5).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// The three RFC 5545 date-time forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeForm {
    /// UTC time, rendered with a trailing `Z`.
    Utc,
    /// Floating time with no timezone association.
    Floating,
    /// Local time in the timezone named by a TZID parameter.
    Zoned { tzid: String },
}

/// A DATE-TIME value.
///
/// The calendar fields are wall-clock values in the timezone implied by
/// `form`; conversion to an instant happens in [`crate::expand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub form: DateTimeForm,
}

impl DateTime {
    /// Creates a UTC date-time.
    #[must_use]
    pub fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Utc,
        }
    }

    /// Creates a floating date-time.
    #[must_use]
    pub fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Floating,
        }
    }

    /// Creates a zoned date-time.
    #[must_use]
    pub fn zoned(
        tzid: impl Into<String>,
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Zoned { tzid: tzid.into() },
        }
    }

    /// Returns the TZID if this is a zoned date-time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            DateTimeForm::Utc | DateTimeForm::Floating => None,
        }
    }

    /// Returns the wall-clock date, if the calendar fields are valid.
    #[must_use]
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
    }

    /// Returns the wall-clock time, if the calendar fields are valid.
    #[must_use]
    pub fn naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
    }

    /// Returns the wall-clock date-time, if the calendar fields are valid.
    #[must_use]
    pub fn naive(&self) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::new(self.naive_date()?, self.naive_time()?))
    }

    /// Returns a copy shifted by the given signed duration, keeping the form.
    #[must_use]
    pub fn checked_add(&self, delta: chrono::TimeDelta) -> Option<Self> {
        let shifted = self.naive()?.checked_add_signed(delta)?;
        Some(Self::from_naive(shifted, self.form.clone()))
    }

    /// Builds a `DateTime` from chrono wall-clock fields.
    #[must_use]
    pub fn from_naive(naive: NaiveDateTime, form: DateTimeForm) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            year: u16::try_from(naive.year()).unwrap_or(u16::MAX),
            month: naive.month() as u8,
            day: naive.day() as u8,
            hour: naive.hour() as u8,
            minute: naive.minute() as u8,
            second: naive.second() as u8,
            form,
        }
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.form == DateTimeForm::Utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_utc() {
        let dt = DateTime::utc(2024, 5, 1, 13, 30, 0);
        assert_eq!(dt.to_string(), "20240501T133000Z");
    }

    #[test]
    fn display_floating() {
        let dt = DateTime::floating(2024, 5, 1, 13, 30, 0);
        assert_eq!(dt.to_string(), "20240501T133000");
    }

    #[test]
    fn zoned_tzid() {
        let dt = DateTime::zoned("Europe/Berlin", 2024, 5, 1, 13, 30, 0);
        assert_eq!(dt.tzid(), Some("Europe/Berlin"));
        assert_eq!(dt.to_string(), "20240501T133000");
    }

    #[test]
    fn checked_add_crosses_midnight() {
        let dt = DateTime::floating(2024, 5, 1, 23, 30, 0);
        let shifted = dt.checked_add(chrono::TimeDelta::hours(1)).unwrap();
        assert_eq!(shifted.day, 2);
        assert_eq!(shifted.hour, 0);
    }
}
