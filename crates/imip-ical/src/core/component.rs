//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::{Property, Value};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTIMEZONE component.
    Timezone,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// VALARM component (nested within VEVENT).
    Alarm,
    /// Unknown/X-component.
    Unknown,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Timezone => "VTIMEZONE",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Alarm => "VALARM",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTIMEZONE" => Self::Timezone,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            "VALARM" => Self::Alarm,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An iCalendar component.
///
/// One VEVENT component is one occurrence in scheduling terms: either a
/// whole series (no RECURRENCE-ID) or a single instance of one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    /// Component type/name.
    pub kind: Option<ComponentKind>,
    /// Original component name (preserved for X-components).
    pub name: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind: Some(kind),
            name: kind.as_str().to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VTIMEZONE component.
    #[must_use]
    pub fn timezone() -> Self {
        Self::new(ComponentKind::Timezone)
    }

    /// Returns whether this is a VEVENT.
    #[must_use]
    pub fn is_event(&self) -> bool {
        self.kind == Some(ComponentKind::Event)
    }

    /// Returns whether this is a VTIMEZONE.
    #[must_use]
    pub fn is_timezone(&self) -> bool {
        self.kind == Some(ComponentKind::Timezone)
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with_property(mut self, prop: Property) -> Self {
        self.properties.push(prop);
        self
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties
            .iter()
            .filter(|p| p.name == name_upper)
            .collect()
    }

    // Typed accessors for the scheduling-relevant properties. The
    // notification engine goes through these exclusively.

    /// Returns the UID property value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property("UID")?.as_text()
    }

    /// Returns the SUMMARY property value if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property("SUMMARY")?.as_text()
    }

    /// Returns the DESCRIPTION property value if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_property("DESCRIPTION")?.as_text()
    }

    /// Returns the LOCATION property value if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.get_property("LOCATION")?.as_text()
    }

    /// Returns the URL property value if present.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        let prop = self.get_property("URL")?;
        match &prop.value {
            Value::Text(s) | Value::Unknown(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the SEQUENCE number, if present and numeric.
    #[must_use]
    pub fn sequence(&self) -> Option<i32> {
        let prop = self.get_property("SEQUENCE")?;
        prop.as_integer()
            .or_else(|| prop.as_text()?.parse().ok())
    }

    /// Returns the LAST-MODIFIED wire value if present.
    #[must_use]
    pub fn last_modified(&self) -> Option<String> {
        Some(self.get_property("LAST-MODIFIED")?.raw_value())
    }

    /// Returns the RECURRENCE-ID wire value if present.
    #[must_use]
    pub fn recurrence_id(&self) -> Option<String> {
        Some(self.get_property("RECURRENCE-ID")?.raw_value())
    }

    /// Returns the RRULE text if present.
    #[must_use]
    pub fn rrule(&self) -> Option<String> {
        Some(self.get_property("RRULE")?.raw_value())
    }

    /// Returns the DTSTART property if present.
    #[must_use]
    pub fn dtstart(&self) -> Option<&Property> {
        self.get_property("DTSTART")
    }

    /// Returns the DTEND property if present.
    #[must_use]
    pub fn dtend(&self) -> Option<&Property> {
        self.get_property("DTEND")
    }

    /// Returns the DURATION property if present.
    #[must_use]
    pub fn duration(&self) -> Option<&Property> {
        self.get_property("DURATION")
    }

    /// Returns the ORGANIZER property if present.
    #[must_use]
    pub fn organizer(&self) -> Option<&Property> {
        self.get_property("ORGANIZER")
    }

    /// Returns all ATTENDEE properties.
    #[must_use]
    pub fn attendees(&self) -> Vec<&Property> {
        self.get_properties("ATTENDEE")
    }

    /// Returns whether DTSTART carries no time-of-day, marking the event
    /// as all-day.
    #[must_use]
    pub fn is_all_day(&self) -> bool {
        self.dtstart().is_some_and(|p| p.as_date().is_some())
    }
}

/// Top-level iCalendar object.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Creates a new empty iCalendar with required properties.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::new(ComponentKind::Calendar);
        root.add_property(Property::text("VERSION", "2.0"));
        root.add_property(Property::text("PRODID", prodid));
        Self { root }
    }

    /// Returns the METHOD value if present.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.root.get_property("METHOD")?.as_text()
    }

    /// Sets the METHOD property.
    pub fn set_method(&mut self, method: impl Into<String>) {
        self.root.properties.retain(|p| p.name != "METHOD");
        self.root.add_property(Property::text("METHOD", method));
    }

    /// Adds a component.
    pub fn add_component(&mut self, component: Component) {
        self.root.add_child(component);
    }

    /// Adds a component, builder style.
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.root.add_child(component);
        self
    }

    /// Returns all components.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.root.children
    }

    /// Returns all VEVENT components.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.children.iter().filter(|c| c.is_event()).collect()
    }

    /// Returns the first VEVENT component, the authoritative occurrence
    /// in a single-change scheduling payload.
    #[must_use]
    pub fn first_event(&self) -> Option<&Component> {
        self.root.children.iter().find(|c| c.is_event())
    }

    /// Returns all VTIMEZONE components.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.root
            .children
            .iter()
            .filter(|c| c.is_timezone())
            .collect()
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new("-//imip//Scheduling notifications//EN")
    }
}
