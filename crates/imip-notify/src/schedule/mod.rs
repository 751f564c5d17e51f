//! Scheduling-message notification pipeline.
//!
//! [`engine`] orchestrates the whole flow: [`recurrence`] decides
//! staleness, [`matcher`] isolates the changed occurrence, [`when`] and
//! [`body`] build the display data, [`token`] mints response tokens.

pub mod body;
pub mod engine;
pub mod matcher;
pub mod recurrence;
pub mod token;
pub mod when;
