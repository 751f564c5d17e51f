//! Field-level display data for notification bodies.
//!
//! Each field is rendered twice: an annotated HTML form that may mark
//! the previous value with strikethrough, and a plain-text form that
//! always shows the current value.

use imip_ical::core::{Component, Property};

use crate::l10n::{Localizer, Phrase};
use crate::message::mailto_address;
use crate::schedule::when::when_string;
use crate::template::ListItem;

const STRIKE_OPEN: &str = "<span style='text-decoration: line-through'>";
const STRIKE_CLOSE: &str = "</span>";

/// One field's two renderings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPair {
    pub html: String,
    pub plain: String,
}

/// Display data for the five body fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyData {
    pub when: FieldPair,
    pub title: FieldPair,
    pub description: FieldPair,
    pub link: FieldPair,
    pub location: FieldPair,
}

impl BodyData {
    /// ## Summary
    /// Builds display data for a created or updated occurrence.
    ///
    /// When a previous occurrence is given and a field's old value is
    /// non-empty and differs from the new one, the HTML rendering shows
    /// the old value struck through above the new one. A missing title
    /// falls back to the localized untitled placeholder on both sides.
    #[must_use]
    pub fn updated(l10n: &dyn Localizer, event: &Component, old: Option<&Component>) -> Self {
        let untitled = l10n.phrase(Phrase::UntitledEvent);

        let new_when = when_string(l10n, event).unwrap_or_default();
        let old_when = old.and_then(|o| when_string(l10n, o));

        let new_title = non_empty(event.summary()).unwrap_or(&untitled).to_owned();
        let old_title = old.map(|o| non_empty(o.summary()).unwrap_or(&untitled).to_owned());

        let new_description = non_empty(event.description()).unwrap_or_default().to_owned();
        let old_description =
            old.map(|o| non_empty(o.description()).unwrap_or_default().to_owned());

        let new_location = non_empty(event.location()).unwrap_or_default().to_owned();
        let old_location = old.map(|o| non_empty(o.location()).unwrap_or_default().to_owned());

        let new_url = non_empty(event.url()).unwrap_or_default().to_owned();
        let old_url = old.map(|o| non_empty(o.url()).unwrap_or_default().to_owned());

        Self {
            when: diffed(&new_when, escape_html(&new_when), old_when.as_deref()),
            title: diffed(&new_title, escape_html(&new_title), old_title.as_deref()),
            description: diffed(
                &new_description,
                escape_html(&new_description),
                old_description.as_deref(),
            ),
            link: diffed(&new_url, anchor_html(&new_url), old_url.as_deref()),
            location: diffed(
                &new_location,
                escape_html(&new_location),
                old_location.as_deref(),
            ),
        }
    }

    /// Builds display data for a cancelled occurrence: every non-empty
    /// current value is struck through, nothing is diffed.
    #[must_use]
    pub fn cancelled(l10n: &dyn Localizer, event: &Component) -> Self {
        let untitled = l10n.phrase(Phrase::UntitledEvent);

        let when = when_string(l10n, event).unwrap_or_default();
        let title = non_empty(event.summary()).unwrap_or(&untitled).to_owned();
        let description = non_empty(event.description()).unwrap_or_default().to_owned();
        let location = non_empty(event.location()).unwrap_or_default().to_owned();
        let url = non_empty(event.url()).unwrap_or_default().to_owned();

        Self {
            when: struck(&when, escape_html(&when)),
            title: struck(&title, escape_html(&title)),
            description: struck(&description, escape_html(&description)),
            link: struck(&url, anchor_html(&url)),
            location: struck(&location, escape_html(&location)),
        }
    }
}

/// Identity list items for the organizer and attendees: mailto anchors,
/// display names when present, a check mark on accepted participation.
#[must_use]
pub fn attendee_items(l10n: &dyn Localizer, event: &Component) -> Vec<ListItem> {
    let mut items = Vec::new();

    if let Some(organizer) = event.organizer() {
        let (html, plain) = identity_line(organizer);
        items.push(ListItem {
            label: l10n.phrase(Phrase::LabelOrganizer),
            html,
            plain,
        });
    }

    let attendees = event.attendees();
    if !attendees.is_empty() {
        let lines: Vec<(String, String)> = attendees.iter().map(|a| identity_line(a)).collect();
        items.push(ListItem {
            label: l10n.phrase(Phrase::LabelAttendees),
            html: lines
                .iter()
                .map(|(html, _)| html.as_str())
                .collect::<Vec<_>>()
                .join("<br/>"),
            plain: lines
                .iter()
                .map(|(_, plain)| plain.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        });
    }

    items
}

fn identity_line(identity: &Property) -> (String, String) {
    let uri = identity.raw_value();
    let email = mailto_address(&uri).unwrap_or(&uri).to_owned();
    let name = identity.get_param_value("CN");

    let mut html = format!(
        "<a href=\"{}\">{}</a>",
        escape_html(&uri),
        escape_html(name.unwrap_or(&email))
    );
    let mut plain = match name {
        Some(name) => format!("{name} <{email}>"),
        None => format!("<{email}>"),
    };

    let accepted = identity
        .get_param_value("PARTSTAT")
        .is_some_and(|p| p.eq_ignore_ascii_case("ACCEPTED"));
    if accepted {
        html.push_str(" \u{2714}\u{fe0e}");
        plain.push_str(" \u{2714}\u{fe0e}");
    }

    (html, plain)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Marks the old value struck through above the new rendering when the
/// old one exists, is non-empty, and differs from the new plain value.
fn diffed(new_plain: &str, new_html: String, old_plain: Option<&str>) -> FieldPair {
    match old_plain {
        Some(old) if !old.is_empty() && old != new_plain => FieldPair {
            html: format!("{STRIKE_OPEN}{}{STRIKE_CLOSE}<br />{new_html}", escape_html(old)),
            plain: new_plain.to_owned(),
        },
        _ => FieldPair {
            html: new_html,
            plain: new_plain.to_owned(),
        },
    }
}

/// Wraps a non-empty rendering in strikethrough; empty values stay empty.
fn struck(plain: &str, html: String) -> FieldPair {
    if plain.is_empty() {
        return FieldPair::default();
    }
    FieldPair {
        html: format!("{STRIKE_OPEN}{html}{STRIKE_CLOSE}"),
        plain: plain.to_owned(),
    }
}

fn anchor_html(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let escaped = escape_html(url);
    format!("<a href=\"{escaped}\">{escaped}</a>")
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
