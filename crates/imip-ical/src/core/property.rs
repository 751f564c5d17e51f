//! iCalendar properties (RFC 5545 §3.1, §3.8).

use super::{Parameter, Value};

/// A fully typed iCalendar property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Parsed value.
    pub value: Value,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Text(value.into()),
        }
    }

    /// Creates a property with an integer value.
    #[must_use]
    pub fn integer(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Integer(value),
        }
    }

    /// Creates a property with a datetime value.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: super::DateTime) -> Self {
        let params = match dt.tzid() {
            Some(tzid) => vec![Parameter::tzid(tzid)],
            None => Vec::new(),
        };
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            value: Value::DateTime(dt),
        }
    }

    /// Creates a property with a date value.
    #[must_use]
    pub fn date(name: impl Into<String>, d: super::Date) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: vec![Parameter::value_type("DATE")],
            value: Value::Date(d),
        }
    }

    /// Creates a property with a duration value.
    #[must_use]
    pub fn duration(name: impl Into<String>, d: super::Duration) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Duration(d),
        }
    }

    /// Creates a calendar-address property (ORGANIZER/ATTENDEE).
    #[must_use]
    pub fn cal_address(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Unknown(uri.into()),
        }
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value("TZID")
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as an integer if it is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        self.value.as_integer()
    }

    /// Returns the value as a datetime if it is a datetime value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&super::DateTime> {
        self.value.as_datetime()
    }

    /// Returns the value as a date if it is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<&super::Date> {
        self.value.as_date()
    }

    /// Returns the value as a duration if it is a duration value.
    #[must_use]
    pub fn as_duration(&self) -> Option<&super::Duration> {
        self.value.as_duration()
    }

    /// Returns the value rendered to its wire representation.
    ///
    /// Used for structural (textual) comparison of properties the engine
    /// never interprets, such as RECURRENCE-ID and RRULE.
    #[must_use]
    pub fn raw_value(&self) -> String {
        match &self.value {
            Value::Text(s) | Value::Unknown(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Date(d) => d.to_string(),
            Value::DateTime(dt) => dt.to_string(),
            Value::Duration(d) => d.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DateTime;

    #[test]
    fn property_text() {
        let prop = Property::text("summary", "Meeting");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.as_text(), Some("Meeting"));
    }

    #[test]
    fn datetime_property_carries_tzid() {
        let prop = Property::datetime(
            "DTSTART",
            DateTime::zoned("Europe/Berlin", 2024, 5, 1, 9, 0, 0),
        );
        assert_eq!(prop.tzid(), Some("Europe/Berlin"));
    }

    #[test]
    fn raw_value_for_structural_comparison() {
        let prop = Property::datetime("DTSTART", DateTime::utc(2024, 5, 1, 9, 0, 0));
        assert_eq!(prop.raw_value(), "20240501T090000Z");
    }
}
