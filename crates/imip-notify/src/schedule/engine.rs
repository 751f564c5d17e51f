//! The notification decision engine.
//!
//! Receives one scheduling transaction, decides whether it warrants a
//! mail, composes the mail, and writes the outcome back onto the
//! transaction as a machine-readable schedule status. Collaborator
//! failures never escape: they are logged and downgraded to the failed
//! status.

use imip_core::config::Settings;
use imip_core::constants::{ICS_ATTACHMENT_FILENAME, ICS_MEDIA_TYPE_PREFIX};
use imip_ical::build::serialize;
use imip_ical::core::{Component, ICalendar, Property};

use crate::clock::Clock;
use crate::error::NotifyResult;
use crate::l10n::{Localizer, LocalizerFactory, Phrase};
use crate::links::ResponseLinks;
use crate::mail::{
    Attachment, Mailbox, MailTransport, OutboundMessage, SendOutcome, validate_address,
};
use crate::message::{
    ItipMessage, Method, STATUS_DELIVERY_FAILED, STATUS_NOT_SIGNIFICANT, STATUS_SENT,
};
use crate::schedule::body::{BodyData, attendee_items};
use crate::schedule::matcher::{event_components, strip_unmodified};
use crate::schedule::recurrence::last_occurrence;
use crate::schedule::token::{RandomSource, issue_token};
use crate::store::TokenStore;
use crate::template::{Button, ListItem, MailTemplate};

/// Final disposition of one scheduling transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted without a mail; neutral status recorded.
    Suppressed,
    /// Silently ignored; status left untouched.
    Dropped,
    /// Recipient address unusable; failed status recorded.
    Rejected,
    /// Mail handed to the transport; sent status recorded.
    Sent,
    /// Composition or delivery failed; failed status recorded.
    Failed,
}

/// Orchestrates notification decisions over the collaborator traits.
pub struct ImipScheduler<'a> {
    settings: &'a Settings,
    transport: &'a dyn MailTransport,
    store: &'a dyn TokenStore,
    random: &'a dyn RandomSource,
    links: &'a dyn ResponseLinks,
    localizers: &'a dyn LocalizerFactory,
    clock: &'a dyn Clock,
}

impl<'a> ImipScheduler<'a> {
    #[must_use]
    pub fn new(
        settings: &'a Settings,
        transport: &'a dyn MailTransport,
        store: &'a dyn TokenStore,
        random: &'a dyn RandomSource,
        links: &'a dyn ResponseLinks,
        localizers: &'a dyn LocalizerFactory,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            settings,
            transport,
            store,
            random,
            links,
            localizers,
            clock,
        }
    }

    /// ## Summary
    /// Processes one scheduling transaction end to end.
    ///
    /// `previous` is the stored calendar object as it looked before this
    /// change, used to present field-level diffs; `None` for brand-new
    /// invitations. The transaction's `schedule_status` is written
    /// according to the outcome; silent drops leave it untouched.
    pub fn schedule(&self, message: &mut ItipMessage, previous: Option<&ICalendar>) -> Outcome {
        match self.process(message, previous) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Failed to process scheduling message");
                message.schedule_status = Some(STATUS_DELIVERY_FAILED.to_owned());
                Outcome::Failed
            }
        }
    }

    fn process(
        &self,
        message: &mut ItipMessage,
        previous: Option<&ICalendar>,
    ) -> NotifyResult<Outcome> {
        if !message.significant_change {
            if message.schedule_status.is_none() {
                message.schedule_status = Some(STATUS_NOT_SIGNIFICANT.to_owned());
            }
            return Ok(Outcome::Suppressed);
        }

        let (Some(_), Some(recipient)) = (message.sender_address(), message.recipient_address())
        else {
            tracing::debug!(
                sender = %message.sender,
                recipient = %message.recipient,
                "Non-mailto scheduling identities, nothing to deliver"
            );
            return Ok(Outcome::Dropped);
        };
        let recipient = recipient.to_owned();

        // No mails for events that already took place.
        let last = last_occurrence(&message.calendar)?;
        if last < self.clock.now() {
            tracing::debug!(last_occurrence = %last, "Event is in the past, dropping");
            return Ok(Outcome::Dropped);
        }

        if !validate_address(&recipient) {
            message.schedule_status = Some(STATUS_DELIVERY_FAILED.to_owned());
            return Ok(Outcome::Rejected);
        }

        let mut new_events = event_components(&message.calendar);
        let mut old_events = previous.map(event_components).unwrap_or_default();
        strip_unmodified(&mut old_events, &mut new_events);

        // Shouldn't happen for a significant change, but the upstream
        // broker and this matcher can disagree.
        let Some(event) = new_events.pop() else {
            message.schedule_status = Some(STATUS_NOT_SIGNIFICANT.to_owned());
            return Ok(Outcome::Suppressed);
        };
        let old_event = old_events.pop();

        let outcome = self.send_mail(message, &event, old_event.as_ref(), last, &recipient)?;
        match outcome {
            SendOutcome::Delivered => {
                message.schedule_status = Some(STATUS_SENT.to_owned());
                Ok(Outcome::Sent)
            }
            SendOutcome::Rejected(failed) => {
                tracing::error!(failed = %failed.join(", "), "Unable to deliver message");
                message.schedule_status = Some(STATUS_DELIVERY_FAILED.to_owned());
                Ok(Outcome::Failed)
            }
        }
    }

    fn send_mail(
        &self,
        message: &ItipMessage,
        event: &Component,
        old_event: Option<&Component>,
        last: chrono::DateTime<chrono::Utc>,
        recipient: &str,
    ) -> NotifyResult<SendOutcome> {
        let attendee = matched_attendee(event, &message.recipient);
        let language = attendee.and_then(|a| a.get_param_value("LANGUAGE"));
        let l10n = self.localizers.localizer(language);
        let l10n = l10n.as_ref();

        let data = match message.method {
            Method::Cancel => BodyData::cancelled(l10n, event),
            Method::Request | Method::Reply => BodyData::updated(l10n, event, old_event),
        };

        let sender = message.sender_address().unwrap_or_default().to_owned();
        let sender_display = message
            .sender_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&sender)
            .to_owned();
        let recipient_display = message.recipient_name.clone();

        let (subject, heading) =
            subject_and_heading(l10n, message.method, attendee, &sender_display, &data.title.plain);

        let mut template = MailTemplate::new(subject, heading);
        template.add_item(ListItem {
            label: l10n.phrase(Phrase::LabelTitle),
            html: data.title.html,
            plain: data.title.plain,
        });
        template.add_item(ListItem {
            label: l10n.phrase(Phrase::LabelTime),
            html: data.when.html,
            plain: data.when.plain,
        });
        template.add_item(ListItem {
            label: l10n.phrase(Phrase::LabelLocation),
            html: data.location.html,
            plain: data.location.plain,
        });
        template.add_item(ListItem {
            label: l10n.phrase(Phrase::LabelLink),
            html: data.link.html,
            plain: data.link.plain,
        });
        if self.settings.invitations.list_attendees_enabled() {
            for item in attendee_items(l10n, event) {
                template.add_item(item);
            }
        }
        // Description goes last, like a mail body, since it can be long.
        template.add_item(ListItem {
            label: l10n.phrase(Phrase::LabelDescription),
            html: data.description.html,
            plain: data.description.plain,
        });

        if message.method == Method::Request
            && rsvp_or_required(attendee)
            && self.settings.invitations.links_allowed_for(recipient)
        {
            let token = issue_token(self.random, self.store, message, event, last)?;
            template.set_buttons(
                Button {
                    label: l10n.phrase(Phrase::Accept),
                    url: self.links.accept_url(&token),
                },
                Button {
                    label: l10n.phrase(Phrase::Decline),
                    url: self.links.decline_url(&token),
                },
            );
            let options_url = self.links.options_url(&token);
            template.add_footnote(
                format!(
                    "<a href=\"{options_url}\">{}</a>",
                    l10n.phrase(Phrase::MoreOptions)
                ),
                l10n.phrase(Phrase::MoreOptionsAt { url: &options_url }),
            );
        }

        let from_name = l10n.phrase(Phrase::ViaProduct {
            sender: &sender_display,
            product: &self.settings.mail.product_name,
        });

        let outbound = OutboundMessage {
            from: Mailbox::named(self.settings.mail.from_address.clone(), from_name),
            to: Mailbox {
                address: recipient.to_owned(),
                name: recipient_display,
            },
            reply_to: Some(Mailbox {
                address: sender,
                name: Some(sender_display),
            }),
            subject: template.subject.clone(),
            html_body: template.render_html(),
            text_body: template.render_plain(),
            attachment: build_attachment(message, event),
        };

        Ok(self.transport.send(&outbound)?)
    }
}

/// The attached calendar object carries only the changed VEVENT,
/// alongside the original non-event components and the method.
fn build_attachment(message: &ItipMessage, event: &Component) -> Attachment {
    let mut calendar = ICalendar::default();
    calendar.set_method(message.method.as_str());
    for component in message.calendar.components() {
        if !component.is_event() {
            calendar.add_component(component.clone());
        }
    }
    calendar.add_component(event.clone());

    Attachment {
        filename: ICS_ATTACHMENT_FILENAME.to_owned(),
        media_type: format!("{ICS_MEDIA_TYPE_PREFIX}{}", message.method),
        content: serialize(&calendar),
    }
}

/// Finds the ATTENDEE property whose calendar-user address matches the
/// transaction's recipient URI.
fn matched_attendee<'e>(event: &'e Component, recipient: &str) -> Option<&'e Property> {
    event
        .attendees()
        .into_iter()
        .find(|a| a.raw_value().eq_ignore_ascii_case(recipient))
}

/// Whether the attendee is expected to respond. RSVP=TRUE always is;
/// attendees without a ROLE are assumed required (RFC 5545 §3.2.16), as
/// are required and optional participants. Without a matched attendee
/// the RFC default RSVP=FALSE applies.
fn rsvp_or_required(attendee: Option<&Property>) -> bool {
    let Some(attendee) = attendee else {
        return false;
    };
    if attendee
        .get_param_value("RSVP")
        .is_some_and(|v| v.eq_ignore_ascii_case("TRUE"))
    {
        return true;
    }
    match attendee.get_param_value("ROLE") {
        None => true,
        Some(role) => {
            role.eq_ignore_ascii_case("REQ-PARTICIPANT") || role.eq_ignore_ascii_case("OPT-PARTICIPANT")
        }
    }
}

fn subject_and_heading(
    l10n: &dyn Localizer,
    method: Method,
    attendee: Option<&Property>,
    sender: &str,
    summary: &str,
) -> (String, String) {
    match method {
        Method::Cancel => (
            l10n.phrase(Phrase::SubjectCancelled { summary }),
            l10n.phrase(Phrase::HeadingCancelled { summary }),
        ),
        Method::Reply => {
            let partstat = attendee
                .and_then(|a| a.get_param_value("PARTSTAT"))
                .map(str::to_ascii_lowercase);
            let heading = match partstat.as_deref() {
                Some("accepted") => l10n.phrase(Phrase::HeadingReplyAccepted { sender }),
                Some("tentative") => l10n.phrase(Phrase::HeadingReplyTentative { sender }),
                Some("declined") => l10n.phrase(Phrase::HeadingReplyDeclined { sender }),
                _ => l10n.phrase(Phrase::HeadingReplyResponded { sender }),
            };
            (l10n.phrase(Phrase::SubjectReply { summary }), heading)
        }
        Method::Request => (
            l10n.phrase(Phrase::SubjectInvitation { summary }),
            l10n.phrase(Phrase::HeadingInvitation { sender, summary }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::l10n::EnglishOnly;
    use crate::links::BaseUrlLinks;
    use crate::mail::TransportError;
    use crate::store::MemoryTokenStore;
    use chrono::{TimeZone, Utc};
    use imip_ical::core::{DateTime, Parameter};
    use std::sync::Mutex;

    struct RecordingTransport {
        sent: Mutex<Vec<OutboundMessage>>,
        outcome: fn() -> Result<SendOutcome, TransportError>,
    }

    impl RecordingTransport {
        fn delivering() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                outcome: || Ok(SendOutcome::Delivered),
            }
        }

        fn rejecting() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                outcome: || Ok(SendOutcome::Rejected(vec!["a@example.com".to_owned()])),
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                outcome: || Err(TransportError("connection refused".to_owned())),
            }
        }

        fn sent(&self) -> Vec<OutboundMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl MailTransport for RecordingTransport {
        fn send(&self, message: &OutboundMessage) -> Result<SendOutcome, TransportError> {
            self.sent.lock().unwrap().push(message.clone());
            (self.outcome)()
        }
    }

    struct FixedRandom;

    impl RandomSource for FixedRandom {
        fn alphanumeric(&self, len: usize) -> String {
            "t".repeat(len)
        }
    }

    fn settings() -> Settings {
        use imip_core::config::{InvitationConfig, LoggingConfig, MailConfig};
        Settings {
            mail: MailConfig {
                from_address: "invitations-noreply@localhost".to_owned(),
                product_name: "Calendar".to_owned(),
            },
            invitations: InvitationConfig {
                link_recipients: "yes".to_owned(),
                list_attendees: "no".to_owned(),
            },
            logging: LoggingConfig {
                level: "debug".to_owned(),
            },
        }
    }

    fn future_event() -> Component {
        Component::event()
            .with_property(Property::text("UID", "uid-1"))
            .with_property(Property::text("SUMMARY", "Lunch"))
            .with_property(Property::datetime("DTSTART", DateTime::utc(2027, 6, 1, 12, 0, 0)))
            .with_property(Property::datetime("DTEND", DateTime::utc(2027, 6, 1, 13, 0, 0)))
            .with_property(Property::datetime(
                "LAST-MODIFIED",
                DateTime::utc(2026, 5, 1, 8, 0, 0),
            ))
            .with_property(Property::integer("SEQUENCE", 1))
            .with_property(
                Property::cal_address("ATTENDEE", "mailto:a@example.com")
                    .with_param(Parameter::rsvp(true)),
            )
    }

    fn request_message(event: Component) -> ItipMessage {
        ItipMessage {
            method: Method::Request,
            sender: "mailto:o@example.com".to_owned(),
            recipient: "mailto:a@example.com".to_owned(),
            sender_name: Some("Olive".to_owned()),
            recipient_name: None,
            sequence: 1,
            significant_change: true,
            calendar: ICalendar::default().with_component(event),
            schedule_status: None,
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap())
    }

    struct Fixture {
        settings: Settings,
        store: MemoryTokenStore,
        links: BaseUrlLinks,
        clock: FixedClock,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                settings: settings(),
                store: MemoryTokenStore::new(),
                links: BaseUrlLinks::new("https://cal.example.com"),
                clock: clock(),
            }
        }

        fn scheduler<'a>(&'a self, transport: &'a RecordingTransport) -> ImipScheduler<'a> {
            ImipScheduler::new(
                &self.settings,
                transport,
                &self.store,
                &FixedRandom,
                &self.links,
                &EnglishOnly,
                &self.clock,
            )
        }
    }

    #[test_log::test]
    fn insignificant_change_is_suppressed_with_status() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());
        message.significant_change = false;

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Suppressed);
        assert_eq!(message.schedule_status.as_deref(), Some(STATUS_NOT_SIGNIFICANT));
        assert!(transport.sent().is_empty());
    }

    #[test_log::test]
    fn existing_status_survives_suppression() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());
        message.significant_change = false;
        message.schedule_status = Some("3.7;Earlier status".to_owned());

        fixture.scheduler(&transport).schedule(&mut message, None);
        assert_eq!(message.schedule_status.as_deref(), Some("3.7;Earlier status"));
    }

    #[test_log::test]
    fn non_mailto_identities_drop_silently() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());
        message.recipient = "https://example.com/user".to_owned();

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Dropped);
        assert!(message.schedule_status.is_none());
        assert!(transport.sent().is_empty());
    }

    #[test_log::test]
    fn past_event_drops_silently() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let past = Component::event()
            .with_property(Property::text("UID", "uid-1"))
            .with_property(Property::datetime("DTSTART", DateTime::utc(2020, 6, 1, 12, 0, 0)))
            .with_property(Property::datetime("DTEND", DateTime::utc(2020, 6, 1, 13, 0, 0)));
        let mut message = request_message(past);

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Dropped);
        assert!(message.schedule_status.is_none());
    }

    #[test_log::test]
    fn invalid_recipient_is_rejected_with_failed_status() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());
        message.recipient = "mailto:not an address".to_owned();

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(message.schedule_status.as_deref(), Some(STATUS_DELIVERY_FAILED));
        assert!(transport.sent().is_empty());
    }

    #[test_log::test]
    fn unchanged_payload_is_suppressed() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let event = future_event();
        let previous = ICalendar::default().with_component(event.clone());
        let mut message = request_message(event);

        let outcome = fixture
            .scheduler(&transport)
            .schedule(&mut message, Some(&previous));

        assert_eq!(outcome, Outcome::Suppressed);
        assert_eq!(message.schedule_status.as_deref(), Some(STATUS_NOT_SIGNIFICANT));
    }

    #[test_log::test]
    fn delivered_request_sends_and_issues_token() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Sent);
        assert_eq!(message.schedule_status.as_deref(), Some(STATUS_SENT));

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        let mail = &sent[0];
        assert_eq!(mail.subject, "Invitation: Lunch");
        assert_eq!(mail.to.address, "a@example.com");
        assert_eq!(mail.from.address, "invitations-noreply@localhost");
        assert_eq!(mail.from.name.as_deref(), Some("Olive via Calendar"));
        assert_eq!(
            mail.reply_to.as_ref().map(|r| r.address.as_str()),
            Some("o@example.com")
        );
        assert!(mail.html_body.contains("/invitation/accept/"));
        assert!(mail.text_body.contains("More options at "));

        let tokens = fixture.store.records();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token.len(), 60);
        assert_eq!(tokens[0].uid, "uid-1");
    }

    #[test_log::test]
    fn attachment_carries_method_and_single_event() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());
        message.calendar.add_component(Component::timezone());

        fixture.scheduler(&transport).schedule(&mut message, None);

        let sent = transport.sent();
        let attachment = &sent[0].attachment;
        assert_eq!(attachment.filename, "event.ics");
        assert_eq!(attachment.media_type, "text/calendar; method=REQUEST");
        assert!(attachment.content.contains("METHOD:REQUEST"));
        assert!(attachment.content.contains("BEGIN:VTIMEZONE"));
        assert_eq!(attachment.content.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test_log::test]
    fn link_allow_list_blocks_buttons() {
        let mut fixture = Fixture::new();
        fixture.settings.invitations.link_recipients = "no".to_owned();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Sent);
        assert!(!transport.sent()[0].html_body.contains("/invitation/accept/"));
        assert!(fixture.store.records().is_empty());
    }

    #[test_log::test]
    fn domain_allow_list_admits_recipient() {
        let mut fixture = Fixture::new();
        fixture.settings.invitations.link_recipients = "other.org, example.com".to_owned();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());

        fixture.scheduler(&transport).schedule(&mut message, None);
        assert!(transport.sent()[0].html_body.contains("/invitation/accept/"));
    }

    #[test_log::test]
    fn reply_heading_follows_partstat() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let event = future_event().with_property(
            Property::cal_address("ATTENDEE", "mailto:o@example.com")
                .with_param(Parameter::partstat("DECLINED")),
        );
        let mut message = request_message(event);
        message.method = Method::Reply;
        // In a REPLY the attendee responds to the organizer.
        message.sender = "mailto:a@example.com".to_owned();
        message.recipient = "mailto:o@example.com".to_owned();
        message.sender_name = Some("Ada".to_owned());

        fixture.scheduler(&transport).schedule(&mut message, None);

        let mail = &transport.sent()[0];
        assert_eq!(mail.subject, "Re: Lunch");
        assert!(mail.html_body.contains("Ada has declined your invitation"));
        // Replies never carry response buttons.
        assert!(!mail.html_body.contains("/invitation/accept/"));
    }

    #[test_log::test]
    fn cancel_uses_cancelled_wording() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());
        message.method = Method::Cancel;

        fixture.scheduler(&transport).schedule(&mut message, None);

        let mail = &transport.sent()[0];
        assert_eq!(mail.subject, "Cancelled: Lunch");
        assert!(mail.html_body.contains("has been canceled"));
        assert!(mail.html_body.contains("line-through"));
        assert_eq!(mail.attachment.media_type, "text/calendar; method=CANCEL");
    }

    #[test_log::test]
    fn transport_rejection_records_failure() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::rejecting();
        let mut message = request_message(future_event());

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(message.schedule_status.as_deref(), Some(STATUS_DELIVERY_FAILED));
    }

    #[test_log::test]
    fn transport_error_is_caught_and_recorded() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::failing();
        let mut message = request_message(future_event());

        let outcome = fixture.scheduler(&transport).schedule(&mut message, None);

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(message.schedule_status.as_deref(), Some(STATUS_DELIVERY_FAILED));
    }

    #[test_log::test]
    fn attendee_list_respects_privacy_default() {
        let fixture = Fixture::new();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());

        fixture.scheduler(&transport).schedule(&mut message, None);
        assert!(!transport.sent()[0].text_body.contains("Attendees:"));
    }

    #[test_log::test]
    fn attendee_list_shown_when_enabled() {
        let mut fixture = Fixture::new();
        fixture.settings.invitations.list_attendees = "yes".to_owned();
        let transport = RecordingTransport::delivering();
        let mut message = request_message(future_event());

        fixture.scheduler(&transport).schedule(&mut message, None);
        assert!(transport.sent()[0].text_body.contains("Attendees:"));
    }

    #[test_log::test]
    fn rsvp_role_defaults() {
        let required = Property::cal_address("ATTENDEE", "mailto:a@example.com");
        assert!(rsvp_or_required(Some(&required)));

        let chair = Property::cal_address("ATTENDEE", "mailto:a@example.com")
            .with_param(Parameter::role("CHAIR"));
        assert!(!rsvp_or_required(Some(&chair)));

        let chair_rsvp = Property::cal_address("ATTENDEE", "mailto:a@example.com")
            .with_param(Parameter::role("CHAIR"))
            .with_param(Parameter::rsvp(true));
        assert!(rsvp_or_required(Some(&chair_rsvp)));

        assert!(!rsvp_or_required(None));
    }
}
