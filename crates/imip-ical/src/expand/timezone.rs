//! Timezone resolution and UTC conversion for iCalendar date-times.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone
//! canonicalization.

use chrono::{DateTime as ChronoDateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;
use std::collections::HashMap;
use std::str::FromStr;

use crate::core::{DateTime, DateTimeForm};

/// Error during timezone conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Non-existent time during DST gap.
    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),

    /// Invalid calendar fields.
    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),
}

/// Resolver for timezone identifiers.
///
/// Maintains a cache of resolved timezones so a payload with many
/// date-times in the same zone normalizes the TZID only once.
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Common CalDAV/iCalendar TZIDs (Windows zone names, vendor
    /// prefixes, IANA aliases) are normalized to their IANA equivalents
    /// first.
    ///
    /// ## Errors
    /// Returns `ConversionError::UnknownTimezone` if the TZID cannot be
    /// resolved.
    ///
    /// ## Side Effects
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid);
        let tz = Tz::from_str(&normalized)
            .map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))?;

        tracing::trace!(tzid, normalized, "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);
        Ok(tz)
    }
}

impl Default for TimeZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes common CalDAV/iCalendar timezone identifiers to IANA names.
///
/// Many calendar clients emit non-standard TZID values; Windows zone
/// names are mapped through ICU, and IANA aliases are canonicalized
/// (e.g. Europe/Kiev -> Europe/Kyiv).
fn normalize_tzid(tzid: &str) -> String {
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);

    let iana_parser = IanaParserExtended::new();

    if let Some(tz) = WindowsParser::new().parse(stripped, None) {
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}

/// ## Summary
/// Converts a local wall-clock time to UTC using the named timezone.
///
/// ## Errors
/// Returns an error if the timezone cannot be resolved or the time falls
/// in a DST gap. Ambiguous times during a DST fold resolve to the first
/// occurrence, per RFC 5545 §3.3.5.
///
/// ## Side Effects
/// Updates the resolver's cache if a new timezone is resolved.
pub fn convert_to_utc(
    local_time: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
) -> Result<ChronoDateTime<Utc>, ConversionError> {
    let tz = resolver.resolve(tzid)?;

    match tz.from_local_datetime(&local_time) {
        LocalResult::None => Err(ConversionError::NonExistentTime(format!(
            "{local_time} in timezone {tzid}"
        ))),
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(dt1, _dt2) => Ok(dt1.with_timezone(&Utc)),
    }
}

/// ## Summary
/// Converts an iCalendar [`DateTime`] to a UTC instant.
///
/// Floating times are read as UTC; zoned times go through the resolver.
///
/// ## Errors
/// Returns an error if the calendar fields are invalid or the timezone
/// cannot be resolved.
pub fn datetime_to_utc(
    dt: &DateTime,
    resolver: &mut TimeZoneResolver,
) -> Result<ChronoDateTime<Utc>, ConversionError> {
    let naive = dt
        .naive()
        .ok_or_else(|| ConversionError::InvalidDateTime(dt.to_string()))?;

    match &dt.form {
        DateTimeForm::Utc | DateTimeForm::Floating => {
            Ok(ChronoDateTime::from_naive_utc_and_offset(naive, Utc))
        }
        DateTimeForm::Zoned { tzid } => convert_to_utc(naive, tzid, resolver),
    }
}
