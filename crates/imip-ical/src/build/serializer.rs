//! iCalendar document serialization (RFC 5545).

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::core::{Component, ICalendar, Property, Value};

/// Serializes a complete iCalendar object to its wire form.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    let mut out = String::new();
    serialize_component(&ical.root, &mut out);
    out
}

/// Serializes one component, including its children.
pub fn serialize_component(component: &Component, out: &mut String) {
    out.push_str("BEGIN:");
    out.push_str(&component.name);
    out.push_str("\r\n");

    for prop in &component.properties {
        serialize_property(prop, out);
    }
    for child in &component.children {
        serialize_component(child, out);
    }

    out.push_str("END:");
    out.push_str(&component.name);
    out.push_str("\r\n");
}

/// Serializes one property as a folded content line.
pub fn serialize_property(prop: &Property, out: &mut String) {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&param.name);
        if let Some(value) = param.value() {
            line.push('=');
            line.push_str(&escape_param_value(value));
        }
    }

    line.push(':');
    line.push_str(&match &prop.value {
        Value::Text(text) => escape_text(text),
        Value::Unknown(raw) => raw.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Date(d) => d.to_string(),
        Value::DateTime(dt) => dt.to_string(),
        Value::Duration(d) => d.to_string(),
    });

    out.push_str(&fold_line(&line));
    out.push_str("\r\n");
}
