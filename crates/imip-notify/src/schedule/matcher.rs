//! Change-set matching between the previous and current payloads.
//!
//! A scheduling payload can carry several event components (a series
//! plus recurrence exceptions). Only the instance that actually changed
//! should drive the notification, so structurally identical pairs are
//! removed before the engine picks the remaining one.

use imip_ical::core::{Component, ICalendar};

/// Clones the payload's event components, skipping VTIMEZONE and any
/// other non-event component.
#[must_use]
pub fn event_components(calendar: &ICalendar) -> Vec<Component> {
    calendar.events().into_iter().cloned().collect()
}

/// Structural identity key: textual values of the four change-tracking
/// properties. Anything else differing without touching these is not a
/// notifiable change.
fn identity(event: &Component) -> (Option<String>, Option<String>, Option<String>, Option<String>) {
    (
        event.last_modified(),
        event.get_property("SEQUENCE").map(imip_ical::core::Property::raw_value),
        event.rrule(),
        event.recurrence_id(),
    )
}

/// ## Summary
/// Removes every old/new pair of structurally identical occurrences
/// from both lists, leaving only genuinely changed ones.
///
/// Each old occurrence is matched against the new list on textual
/// equality of LAST-MODIFIED, SEQUENCE, RRULE, and RECURRENCE-ID; the
/// first match wins and both sides are removed.
pub fn strip_unmodified(old: &mut Vec<Component>, new: &mut Vec<Component>) {
    old.retain(|old_event| {
        let key = identity(old_event);
        match new.iter().position(|candidate| identity(candidate) == key) {
            Some(index) => {
                new.remove(index);
                false
            }
            None => true,
        }
    });
}
