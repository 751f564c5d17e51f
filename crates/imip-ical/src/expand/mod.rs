//! Timezone resolution for iCalendar date-times.

mod timezone;

pub use timezone::{ConversionError, TimeZoneResolver, convert_to_utc, datetime_to_utc};
