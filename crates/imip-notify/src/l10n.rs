//! Localization collaborator.
//!
//! Notification mails carry a small fixed set of phrases plus localized
//! date and time renderings. Both concerns sit behind [`Localizer`] so a
//! host application can plug its own translation catalog; the built-in
//! [`EnglishLocalizer`] covers the default wording.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A translatable phrase with its interpolated arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase<'a> {
    /// Placeholder title for events without a SUMMARY.
    UntitledEvent,
    SubjectCancelled { summary: &'a str },
    HeadingCancelled { summary: &'a str },
    SubjectReply { summary: &'a str },
    HeadingReplyAccepted { sender: &'a str },
    HeadingReplyTentative { sender: &'a str },
    HeadingReplyDeclined { sender: &'a str },
    HeadingReplyResponded { sender: &'a str },
    SubjectInvitation { summary: &'a str },
    HeadingInvitation { sender: &'a str, summary: &'a str },
    LabelTitle,
    LabelTime,
    LabelLocation,
    LabelLink,
    LabelDescription,
    LabelOrganizer,
    LabelAttendees,
    Accept,
    Decline,
    MoreOptions,
    MoreOptionsAt { url: &'a str },
    /// From display name, e.g. "Alice via Calendar".
    ViaProduct { sender: &'a str, product: &'a str },
}

/// Language-specific rendering of phrases and date/time values.
pub trait Localizer {
    /// BCP-47 tag of this localizer's language.
    fn language(&self) -> &str;

    /// Medium date, e.g. "Jul 1, 2024".
    fn format_date(&self, date: NaiveDate) -> String;

    /// Short time, e.g. "9:30 AM".
    fn format_time(&self, time: NaiveTime) -> String;

    /// Medium date with short time, e.g. "Jul 1, 2024 9:30 AM".
    fn format_datetime(&self, datetime: NaiveDateTime) -> String;

    /// Abbreviated weekday, e.g. "Mon".
    fn format_weekday(&self, date: NaiveDate) -> String;

    /// Renders a phrase with its arguments interpolated.
    fn phrase(&self, phrase: Phrase<'_>) -> String;
}

/// Picks a localizer for an attendee's declared language.
pub trait LocalizerFactory {
    /// Returns the localizer for `language`, or the default one when the
    /// tag is absent or unsupported.
    fn localizer(&self, language: Option<&str>) -> Box<dyn Localizer>;
}

/// Built-in English wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn language(&self) -> &str {
        "en"
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    fn format_time(&self, time: NaiveTime) -> String {
        time.format("%-I:%M %p").to_string()
    }

    fn format_datetime(&self, datetime: NaiveDateTime) -> String {
        datetime.format("%b %-d, %Y %-I:%M %p").to_string()
    }

    fn format_weekday(&self, date: NaiveDate) -> String {
        date.format("%a").to_string()
    }

    fn phrase(&self, phrase: Phrase<'_>) -> String {
        match phrase {
            Phrase::UntitledEvent => "Untitled event".to_owned(),
            Phrase::SubjectCancelled { summary } => format!("Cancelled: {summary}"),
            Phrase::HeadingCancelled { summary } => {
                format!("\"{summary}\" has been canceled")
            }
            Phrase::SubjectReply { summary } => format!("Re: {summary}"),
            Phrase::HeadingReplyAccepted { sender } => {
                format!("{sender} has accepted your invitation")
            }
            Phrase::HeadingReplyTentative { sender } => {
                format!("{sender} has tentatively accepted your invitation")
            }
            Phrase::HeadingReplyDeclined { sender } => {
                format!("{sender} has declined your invitation")
            }
            Phrase::HeadingReplyResponded { sender } => {
                format!("{sender} has responded your invitation")
            }
            Phrase::SubjectInvitation { summary } => format!("Invitation: {summary}"),
            Phrase::HeadingInvitation { sender, summary } => {
                format!("{sender} would like to invite you to \"{summary}\"")
            }
            Phrase::LabelTitle => "Title:".to_owned(),
            Phrase::LabelTime => "Time:".to_owned(),
            Phrase::LabelLocation => "Location:".to_owned(),
            Phrase::LabelLink => "Link:".to_owned(),
            Phrase::LabelDescription => "Description:".to_owned(),
            Phrase::LabelOrganizer => "Organizer:".to_owned(),
            Phrase::LabelAttendees => "Attendees:".to_owned(),
            Phrase::Accept => "Accept".to_owned(),
            Phrase::Decline => "Decline".to_owned(),
            Phrase::MoreOptions => "More options …".to_owned(),
            Phrase::MoreOptionsAt { url } => format!("More options at {url}"),
            Phrase::ViaProduct { sender, product } => format!("{sender} via {product}"),
        }
    }
}

/// Factory that always hands out English, for hosts without a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishOnly;

impl LocalizerFactory for EnglishOnly {
    fn localizer(&self, _language: Option<&str>) -> Box<dyn Localizer> {
        Box::new(EnglishLocalizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_date_formats() {
        let l10n = EnglishLocalizer;
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(l10n.format_date(date), "Jul 1, 2024");
        assert_eq!(l10n.format_time(time), "9:05 AM");
        assert_eq!(l10n.format_weekday(date), "Mon");
        assert_eq!(l10n.format_datetime(date.and_time(time)), "Jul 1, 2024 9:05 AM");
    }

    #[test]
    fn phrases_interpolate_arguments() {
        let l10n = EnglishLocalizer;
        assert_eq!(
            l10n.phrase(Phrase::SubjectInvitation { summary: "Lunch" }),
            "Invitation: Lunch"
        );
        assert_eq!(
            l10n.phrase(Phrase::HeadingInvitation {
                sender: "Alice",
                summary: "Lunch"
            }),
            "Alice would like to invite you to \"Lunch\""
        );
        assert_eq!(
            l10n.phrase(Phrase::ViaProduct {
                sender: "Alice",
                product: "Calendar"
            }),
            "Alice via Calendar"
        );
    }
}
