//! Last-occurrence resolution for staleness checks.
//!
//! The engine refuses to notify about events that already ended. For a
//! plain event that is the end of its single instance; for a recurring
//! series it is the end of the final instance, expanded through the
//! RRULE with a hard horizon so unbounded rules stay cheap.

use chrono::{DateTime as ChronoDateTime, TimeDelta, Utc};
use rrule::{RRule, Unvalidated};

use imip_core::constants::RECURRENCE_HORIZON_TIMESTAMP;
use imip_ical::core::{Component, ICalendar};
use imip_ical::expand::{TimeZoneResolver, datetime_to_utc};

use crate::error::{NotifyError, NotifyResult};

/// Upper bound on expanded instances for bounded rules. Rules that hit
/// the cap are treated as reaching the horizon.
const EXPANSION_CAP: u16 = 1000;

/// The expansion horizon, 2038-01-01T00:00:00Z.
#[must_use]
pub fn expansion_horizon() -> ChronoDateTime<Utc> {
    ChronoDateTime::from_timestamp(RECURRENCE_HORIZON_TIMESTAMP, 0)
        .unwrap_or(ChronoDateTime::<Utc>::MAX_UTC)
}

/// ## Summary
/// Resolves the instant at which the last instance of the payload's
/// event ends.
///
/// Non-recurring events end at DTEND, or DTSTART plus DURATION, or one
/// day after a date-only DTSTART, or at DTSTART itself. Recurring events
/// are expanded; unbounded rules return the horizon immediately, bounded
/// ones iterate instance ends clamped to the horizon. The result is
/// never before the event's own start.
///
/// ## Errors
/// Fails when the payload has no event component, the event has no
/// DTSTART, a timezone cannot be resolved, or the RRULE does not parse.
pub fn last_occurrence(calendar: &ICalendar) -> NotifyResult<ChronoDateTime<Utc>> {
    let event = calendar
        .first_event()
        .ok_or(NotifyError::InvariantViolation("Payload has no event component"))?;

    let mut resolver = TimeZoneResolver::new();
    let start = event_start_utc(event, &mut resolver)?;
    let duration = instance_duration(event, start, &mut resolver)?;

    let last = match event.rrule() {
        None => start + duration,
        Some(rrule_text) => {
            expand_rrule(&rrule_text, start, duration)?
        }
    };

    Ok(last.max(start))
}

/// Resolves the event's DTSTART to a UTC instant. Date-only starts are
/// read as midnight UTC.
fn event_start_utc(
    event: &Component,
    resolver: &mut TimeZoneResolver,
) -> NotifyResult<ChronoDateTime<Utc>> {
    let dtstart = event
        .dtstart()
        .ok_or(NotifyError::InvariantViolation("Event has no DTSTART"))?;

    if let Some(date) = dtstart.as_date() {
        let naive = date
            .naive()
            .ok_or_else(|| NotifyError::ValidationError(format!("Invalid DTSTART date: {date}")))?;
        return Ok(ChronoDateTime::from_naive_utc_and_offset(
            naive.and_hms_opt(0, 0, 0).unwrap_or_default(),
            Utc,
        ));
    }

    let dt = dtstart.as_datetime().ok_or_else(|| {
        NotifyError::ValidationError("DTSTART is neither a date nor a date-time".to_owned())
    })?;
    Ok(datetime_to_utc(dt, resolver)?)
}

/// Length of one instance: DTEND minus start, or DURATION, or one day
/// for all-day events, otherwise zero.
fn instance_duration(
    event: &Component,
    start: ChronoDateTime<Utc>,
    resolver: &mut TimeZoneResolver,
) -> NotifyResult<TimeDelta> {
    if let Some(dtend) = event.dtend() {
        let end = if let Some(date) = dtend.as_date() {
            let naive = date.naive().ok_or_else(|| {
                NotifyError::ValidationError(format!("Invalid DTEND date: {date}"))
            })?;
            ChronoDateTime::from_naive_utc_and_offset(
                naive.and_hms_opt(0, 0, 0).unwrap_or_default(),
                Utc,
            )
        } else {
            let dt = dtend.as_datetime().ok_or_else(|| {
                NotifyError::ValidationError("DTEND is neither a date nor a date-time".to_owned())
            })?;
            datetime_to_utc(dt, resolver)?
        };
        return Ok(end - start);
    }

    if let Some(duration) = event.duration().and_then(|p| p.as_duration()) {
        return Ok(duration.to_delta());
    }

    if event.is_all_day() {
        return Ok(TimeDelta::days(1));
    }

    Ok(TimeDelta::zero())
}

/// Expands a recurrence rule and returns the end of its last instance,
/// clamped to [`expansion_horizon`].
fn expand_rrule(
    rrule_text: &str,
    start: ChronoDateTime<Utc>,
    duration: TimeDelta,
) -> NotifyResult<ChronoDateTime<Utc>> {
    let horizon = expansion_horizon();

    let rule: RRule<Unvalidated> = rrule_text
        .parse()
        .map_err(|e| NotifyError::ValidationError(format!("Invalid RRULE '{rrule_text}': {e}")))?;
    let set = rule
        .build(start.with_timezone(&rrule::Tz::UTC))
        .map_err(|e| NotifyError::ValidationError(format!("Invalid RRULE '{rrule_text}': {e}")))?;

    let unbounded = set
        .get_rrule()
        .iter()
        .any(|r| r.get_count().is_none() && r.get_until().is_none());
    if unbounded {
        tracing::trace!(rrule = rrule_text, "Unbounded recurrence, using horizon");
        return Ok(horizon);
    }

    let result = set.all(EXPANSION_CAP);
    let mut last = start + duration;
    for instance in result.dates {
        let end = instance.with_timezone(&Utc) + duration;
        if end >= horizon {
            return Ok(horizon);
        }
        last = last.max(end);
    }
    if result.limited {
        tracing::debug!(
            rrule = rrule_text,
            cap = EXPANSION_CAP,
            "Recurrence expansion capped, using horizon"
        );
        return Ok(horizon);
    }

    Ok(last)
}
