//! iCalendar property parameters (RFC 5545 §3.2).

/// A property parameter such as `TZID=Europe/Berlin` or `PARTSTAT=ACCEPTED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter value; `None` for degenerate value-less parameters.
    pub value: Option<String>,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Some(value.into()),
        }
    }

    /// Creates a TZID parameter.
    #[must_use]
    pub fn tzid(value: impl Into<String>) -> Self {
        Self::new("TZID", value)
    }

    /// Creates a VALUE type parameter.
    #[must_use]
    pub fn value_type(value: impl Into<String>) -> Self {
        Self::new("VALUE", value)
    }

    /// Creates a CN (common name) parameter.
    #[must_use]
    pub fn cn(value: impl Into<String>) -> Self {
        Self::new("CN", value)
    }

    /// Creates a PARTSTAT parameter.
    #[must_use]
    pub fn partstat(value: impl Into<String>) -> Self {
        Self::new("PARTSTAT", value)
    }

    /// Creates an RSVP parameter.
    #[must_use]
    pub fn rsvp(value: bool) -> Self {
        Self::new("RSVP", if value { "TRUE" } else { "FALSE" })
    }

    /// Creates a ROLE parameter.
    #[must_use]
    pub fn role(value: impl Into<String>) -> Self {
        Self::new("ROLE", value)
    }

    /// Creates a LANGUAGE parameter.
    #[must_use]
    pub fn language(value: impl Into<String>) -> Self {
        Self::new("LANGUAGE", value)
    }

    /// Returns the parameter value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
