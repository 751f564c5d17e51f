//! iCalendar core models (RFC 5545).
//!
//! The occurrence model used throughout the notification engine. Every
//! scheduling-relevant property is reachable through a typed accessor;
//! nothing in the engine reads properties by ad-hoc name lookup.

mod component;
mod datetime;
mod duration;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::{DateTime, DateTimeForm};
pub use duration::Duration;
pub use parameter::Parameter;
pub use property::Property;
pub use value::{Date, Value};
