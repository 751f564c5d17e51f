//! Human-readable "when" strings for an occurrence.

use imip_ical::core::{Component, Date, DateTime, DateTimeForm};

use crate::l10n::Localizer;

/// ## Summary
/// Renders the occurrence's schedule as a localized one-line string.
///
/// All-day events show dates, with the exclusive DTEND pulled back one
/// day for display; single-day events show just the one date. Timed
/// events show weekday plus date-time, collapsing the end to a bare
/// time when it falls on the same day, with the timezone identifier
/// appended. Differing start/end zones render both sides in full, each
/// with its own identifier.
///
/// Returns `None` when the event has no DTSTART.
#[must_use]
pub fn when_string(l10n: &dyn Localizer, event: &Component) -> Option<String> {
    let dtstart = event.dtstart()?;

    if let Some(start) = dtstart.as_date() {
        return all_day_when(l10n, event, *start);
    }

    let start = dtstart.as_datetime()?;
    timed_when(l10n, event, start)
}

fn all_day_when(l10n: &dyn Localizer, event: &Component, start: Date) -> Option<String> {
    let end = event
        .dtend()
        .and_then(|p| p.as_date().copied())
        .or_else(|| {
            let delta = event.duration().and_then(|p| p.as_duration())?;
            start.checked_add_days(delta.to_delta().num_days())
        })
        .or_else(|| start.checked_add_days(1))?;

    // DTEND is exclusive: an event stored as 2020-01-01..2020-01-05
    // reads "Jan 1 - Jan 4".
    let display_end = end.checked_add_days(-1)?;

    let start_naive = start.naive()?;
    if display_end.naive()? <= start_naive {
        return Some(l10n.format_date(start_naive));
    }

    Some(format!(
        "{} - {}",
        l10n.format_date(start_naive),
        l10n.format_date(display_end.naive()?)
    ))
}

fn timed_when(l10n: &dyn Localizer, event: &Component, start: &DateTime) -> Option<String> {
    let end = event
        .dtend()
        .and_then(|p| p.as_datetime().cloned())
        .or_else(|| {
            let delta = event.duration().and_then(|p| p.as_duration())?;
            start.checked_add(delta.to_delta())
        })
        .unwrap_or_else(|| start.clone());

    let start_naive = start.naive()?;
    let end_naive = end.naive()?;

    let start_label = zone_label(&start.form);
    let end_label = zone_label(&end.form);

    let start_text = format!(
        "{}, {}",
        l10n.format_weekday(start_naive.date()),
        l10n.format_datetime(start_naive)
    );

    if start_label != end_label {
        // Cross-zone events always show both sides in full.
        return Some(format!(
            "{}{} - {}{}",
            start_text,
            suffix(start_label),
            l10n.format_datetime(end_naive),
            suffix(end_label)
        ));
    }

    let end_text = if start_naive.date() == end_naive.date() {
        l10n.format_time(end_naive.time())
    } else {
        format!(
            "{}, {}",
            l10n.format_weekday(end_naive.date()),
            l10n.format_datetime(end_naive)
        )
    };

    Some(format!("{start_text} - {end_text}{}", suffix(start_label)))
}

/// Display identifier for a date-time form; floating times have none.
fn zone_label(form: &DateTimeForm) -> Option<&str> {
    match form {
        DateTimeForm::Zoned { tzid } => Some(tzid),
        DateTimeForm::Utc => Some("UTC"),
        DateTimeForm::Floating => None,
    }
}

fn suffix(label: Option<&str>) -> String {
    label.map(|l| format!(" ({l})")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l10n::EnglishLocalizer;
    use imip_ical::core::{Duration, Property};

    fn when(event: &Component) -> Option<String> {
        when_string(&EnglishLocalizer, event)
    }

    #[test]
    fn single_all_day_event() {
        let event = Component::event()
            .with_property(Property::date("DTSTART", Date::new(2026, 7, 1)))
            .with_property(Property::date("DTEND", Date::new(2026, 7, 2)));
        assert_eq!(when(&event).as_deref(), Some("Jul 1, 2026"));
    }

    #[test]
    fn multi_day_all_day_event_adjusts_exclusive_end() {
        let event = Component::event()
            .with_property(Property::date("DTSTART", Date::new(2026, 7, 1)))
            .with_property(Property::date("DTEND", Date::new(2026, 7, 5)));
        assert_eq!(when(&event).as_deref(), Some("Jul 1, 2026 - Jul 4, 2026"));
    }

    #[test]
    fn all_day_without_end_is_one_day() {
        let event =
            Component::event().with_property(Property::date("DTSTART", Date::new(2026, 7, 1)));
        assert_eq!(when(&event).as_deref(), Some("Jul 1, 2026"));
    }

    #[test]
    fn timed_same_day_collapses_end_to_time() {
        let event = Component::event()
            .with_property(Property::datetime(
                "DTSTART",
                DateTime::zoned("Europe/Berlin", 2026, 7, 1, 9, 0, 0),
            ))
            .with_property(Property::datetime(
                "DTEND",
                DateTime::zoned("Europe/Berlin", 2026, 7, 1, 10, 30, 0),
            ));
        assert_eq!(
            when(&event).as_deref(),
            Some("Wed, Jul 1, 2026 9:00 AM - 10:30 AM (Europe/Berlin)")
        );
    }

    #[test]
    fn timed_multi_day_shows_both_dates() {
        let event = Component::event()
            .with_property(Property::datetime(
                "DTSTART",
                DateTime::zoned("Europe/Berlin", 2026, 7, 1, 22, 0, 0),
            ))
            .with_property(Property::datetime(
                "DTEND",
                DateTime::zoned("Europe/Berlin", 2026, 7, 2, 1, 0, 0),
            ));
        assert_eq!(
            when(&event).as_deref(),
            Some("Wed, Jul 1, 2026 10:00 PM - Thu, Jul 2, 2026 1:00 AM (Europe/Berlin)")
        );
    }

    #[test]
    fn cross_zone_shows_both_identifiers() {
        let event = Component::event()
            .with_property(Property::datetime(
                "DTSTART",
                DateTime::zoned("Europe/Berlin", 2026, 7, 1, 9, 0, 0),
            ))
            .with_property(Property::datetime(
                "DTEND",
                DateTime::zoned("America/New_York", 2026, 7, 1, 5, 0, 0),
            ));
        assert_eq!(
            when(&event).as_deref(),
            Some(
                "Wed, Jul 1, 2026 9:00 AM (Europe/Berlin) - Jul 1, 2026 5:00 AM (America/New_York)"
            )
        );
    }

    #[test]
    fn utc_form_is_labelled_utc() {
        let event = Component::event()
            .with_property(Property::datetime("DTSTART", DateTime::utc(2026, 7, 1, 9, 0, 0)))
            .with_property(Property::datetime("DTEND", DateTime::utc(2026, 7, 1, 10, 0, 0)));
        assert_eq!(
            when(&event).as_deref(),
            Some("Wed, Jul 1, 2026 9:00 AM - 10:00 AM (UTC)")
        );
    }

    #[test]
    fn floating_omits_zone_label() {
        let event = Component::event()
            .with_property(Property::datetime(
                "DTSTART",
                DateTime::floating(2026, 7, 1, 9, 0, 0),
            ))
            .with_property(Property::duration("DURATION", Duration::hms(1, 0, 0)));
        assert_eq!(when(&event).as_deref(), Some("Wed, Jul 1, 2026 9:00 AM - 10:00 AM"));
    }

    #[test]
    fn no_dtstart_yields_none() {
        assert!(when(&Component::event()).is_none());
    }
}
