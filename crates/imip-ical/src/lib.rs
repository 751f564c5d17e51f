//! Typed iCalendar model for scheduling notifications (RFC 5545).
//!
//! This crate carries the calendar-object model the notification engine
//! works on: components with typed accessors for the scheduling-relevant
//! properties, serialization for the `event.ics` mail attachment, and
//! TZID resolution to IANA timezones.

pub mod build;
pub mod core;
pub mod error;
pub mod expand;
