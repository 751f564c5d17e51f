//! iCalendar DURATION values (RFC 5545 §3.3.6).

/// A nominal duration, kept in its calendar components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub negative: bool,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Duration {
    /// The zero duration.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a duration of whole days.
    #[must_use]
    pub fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// Creates a duration of hours/minutes/seconds.
    #[must_use]
    pub fn hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            ..Self::default()
        }
    }

    /// Converts to a chrono `TimeDelta`.
    #[must_use]
    pub fn to_delta(self) -> chrono::TimeDelta {
        let total = chrono::TimeDelta::weeks(i64::from(self.weeks))
            + chrono::TimeDelta::days(i64::from(self.days))
            + chrono::TimeDelta::hours(i64::from(self.hours))
            + chrono::TimeDelta::minutes(i64::from(self.minutes))
            + chrono::TimeDelta::seconds(i64::from(self.seconds));
        if self.negative { -total } else { total }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        if self.weeks > 0 {
            return write!(f, "{}W", self.weeks);
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        } else if self.days == 0 {
            // PT0S is the canonical zero duration
            write!(f, "T0S")?;
        }
        Ok(())
    }
}
