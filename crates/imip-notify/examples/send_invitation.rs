//! Runs one invitation through the engine with a stdout transport.
//!
//! ```sh
//! cargo run --example send_invitation
//! ```

use anyhow::Result;

use imip_core::config::Settings;
use imip_ical::core::{Component, DateTime, ICalendar, Parameter, Property};
use imip_notify::clock::SystemClock;
use imip_notify::l10n::EnglishOnly;
use imip_notify::links::BaseUrlLinks;
use imip_notify::mail::{MailTransport, OutboundMessage, SendOutcome, TransportError};
use imip_notify::message::{ItipMessage, Method};
use imip_notify::schedule::engine::ImipScheduler;
use imip_notify::schedule::token::ThreadRandom;
use imip_notify::store::MemoryTokenStore;

struct StdoutTransport;

impl MailTransport for StdoutTransport {
    fn send(&self, message: &OutboundMessage) -> Result<SendOutcome, TransportError> {
        println!("From:     {} <{}>", message.from.name.as_deref().unwrap_or(""), message.from.address);
        println!("To:       {}", message.to.address);
        println!("Subject:  {}", message.subject);
        println!();
        println!("{}", message.text_body);
        println!("--- {} ({}) ---", message.attachment.filename, message.attachment.media_type);
        println!("{}", message.attachment.content);
        Ok(SendOutcome::Delivered)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::load()?;
    let transport = StdoutTransport;
    let store = MemoryTokenStore::new();
    let random = ThreadRandom;
    let links = BaseUrlLinks::new("https://cal.example.com");
    let localizers = EnglishOnly;
    let clock = SystemClock;

    let event = Component::event()
        .with_property(Property::text("UID", "team-sync@example.com"))
        .with_property(Property::text("SUMMARY", "Team sync"))
        .with_property(Property::text("LOCATION", "Room 4"))
        .with_property(Property::datetime(
            "DTSTART",
            DateTime::zoned("Europe/Berlin", 2027, 7, 1, 9, 0, 0),
        ))
        .with_property(Property::datetime(
            "DTEND",
            DateTime::zoned("Europe/Berlin", 2027, 7, 1, 10, 30, 0),
        ))
        .with_property(Property::datetime(
            "LAST-MODIFIED",
            DateTime::utc(2027, 5, 1, 8, 0, 0),
        ))
        .with_property(Property::integer("SEQUENCE", 0))
        .with_property(Property::cal_address("ORGANIZER", "mailto:olive@example.com"))
        .with_property(
            Property::cal_address("ATTENDEE", "mailto:ada@example.com")
                .with_param(Parameter::cn("Ada"))
                .with_param(Parameter::rsvp(true)),
        );

    let mut message = ItipMessage {
        method: Method::Request,
        sender: "mailto:olive@example.com".to_owned(),
        recipient: "mailto:ada@example.com".to_owned(),
        sender_name: Some("Olive".to_owned()),
        recipient_name: Some("Ada".to_owned()),
        sequence: 0,
        significant_change: true,
        calendar: ICalendar::default().with_component(event),
        schedule_status: None,
    };

    let scheduler = ImipScheduler::new(
        &settings, &transport, &store, &random, &links, &localizers, &clock,
    );
    let outcome = scheduler.schedule(&mut message, None);

    println!();
    println!("Outcome:  {outcome:?}");
    println!("Status:   {}", message.schedule_status.as_deref().unwrap_or("(none)"));
    Ok(())
}
