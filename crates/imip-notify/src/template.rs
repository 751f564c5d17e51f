//! Minimal dual-format mail template.
//!
//! Collects a heading, labelled body list items, an optional button
//! pair, and footnotes, then renders an HTML body and a plain-text body
//! from the same structure.

use imip_core::constants::BODY_LABEL_WIDTH;

/// One labelled line of the body list, with both renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub label: String,
    pub html: String,
    pub plain: String,
}

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub url: String,
}

/// The composed notification mail, prior to transport hand-off.
#[derive(Debug, Clone, Default)]
pub struct MailTemplate {
    pub subject: String,
    pub heading: String,
    items: Vec<ListItem>,
    buttons: Option<(Button, Button)>,
    footnotes: Vec<(String, String)>,
}

impl MailTemplate {
    #[must_use]
    pub fn new(subject: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            heading: heading.into(),
            ..Self::default()
        }
    }

    /// Appends a body list item; items with an empty plain rendering
    /// are dropped.
    pub fn add_item(&mut self, item: ListItem) {
        if !item.plain.is_empty() {
            self.items.push(item);
        }
    }

    /// Sets the primary/secondary button pair.
    pub fn set_buttons(&mut self, primary: Button, secondary: Button) {
        self.buttons = Some((primary, secondary));
    }

    /// Appends a footnote as an (html, plain) pair.
    pub fn add_footnote(&mut self, html: impl Into<String>, plain: impl Into<String>) {
        self.footnotes.push((html.into(), plain.into()));
    }

    /// Renders the HTML body.
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<h2>");
        out.push_str(&self.heading);
        out.push_str("</h2>\n");
        if !self.items.is_empty() {
            out.push_str("<table>\n");
            for item in &self.items {
                out.push_str("<tr><td><strong>");
                out.push_str(&item.label);
                out.push_str("</strong></td><td>");
                out.push_str(&item.html);
                out.push_str("</td></tr>\n");
            }
            out.push_str("</table>\n");
        }
        if let Some((primary, secondary)) = &self.buttons {
            out.push_str(&format!(
                "<p><a href=\"{}\">{}</a> <a href=\"{}\">{}</a></p>\n",
                primary.url, primary.label, secondary.url, secondary.label
            ));
        }
        for (html, _) in &self.footnotes {
            out.push_str("<p><small>");
            out.push_str(html);
            out.push_str("</small></p>\n");
        }
        out
    }

    /// Renders the plain-text body; labels are padded to a fixed column
    /// width so values line up.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.heading);
        out.push_str("\n\n");
        for item in &self.items {
            out.push_str(&format!("{:<BODY_LABEL_WIDTH$}{}\n", item.label, item.plain));
        }
        if let Some((primary, secondary)) = &self.buttons {
            out.push_str(&format!(
                "\n{}: {}\n{}: {}\n",
                primary.label, primary.url, secondary.label, secondary.url
            ));
        }
        for (_, plain) in &self.footnotes {
            out.push('\n');
            out.push_str(plain);
            out.push('\n');
        }
        out
    }
}
