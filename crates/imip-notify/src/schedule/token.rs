//! Invitation token issuance.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;

use imip_core::constants::INVITATION_TOKEN_LENGTH;
use imip_ical::core::Component;

use crate::message::ItipMessage;
use crate::store::{InvitationToken, StoreError, TokenStore};

/// Source of random token material.
pub trait RandomSource {
    /// Returns `len` random alphanumeric characters.
    fn alphanumeric(&self, len: usize) -> String;
}

/// Thread-local CSPRNG-backed source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn alphanumeric(&self, len: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}

/// ## Summary
/// Mints a fresh invitation token for the transaction's recipient and
/// persists its record. The record expires when the event's last
/// occurrence passes.
///
/// ## Errors
/// Returns a [`StoreError`] when the record cannot be persisted; the
/// token is not handed out in that case.
pub fn issue_token(
    random: &dyn RandomSource,
    store: &dyn TokenStore,
    message: &ItipMessage,
    event: &Component,
    expiration: DateTime<Utc>,
) -> Result<String, StoreError> {
    let token = random.alphanumeric(INVITATION_TOKEN_LENGTH);

    let record = InvitationToken {
        token: token.clone(),
        attendee: message.recipient_address().unwrap_or_default().to_owned(),
        organizer: message.sender_address().unwrap_or_default().to_owned(),
        uid: event.uid().unwrap_or_default().to_owned(),
        recurrence_id: event.recurrence_id(),
        sequence: message.sequence,
        expiration,
    };

    tracing::debug!(
        uid = %record.uid,
        attendee = %record.attendee,
        "Issued invitation token"
    );
    store.insert(record)?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Method;
    use crate::store::MemoryTokenStore;
    use chrono::TimeZone;
    use imip_ical::core::{ICalendar, Property};

    fn message() -> ItipMessage {
        ItipMessage {
            method: Method::Request,
            sender: "mailto:o@example.com".to_owned(),
            recipient: "mailto:a@example.com".to_owned(),
            sender_name: None,
            recipient_name: None,
            sequence: 3,
            significant_change: true,
            calendar: ICalendar::default(),
            schedule_status: None,
        }
    }

    #[test]
    fn token_is_sixty_alphanumeric_characters() {
        let token = ThreadRandom.alphanumeric(INVITATION_TOKEN_LENGTH);
        assert_eq!(token.len(), 60);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn successive_tokens_differ() {
        assert_ne!(
            ThreadRandom.alphanumeric(INVITATION_TOKEN_LENGTH),
            ThreadRandom.alphanumeric(INVITATION_TOKEN_LENGTH)
        );
    }

    #[test]
    fn issued_record_carries_transaction_fields() {
        let store = MemoryTokenStore::new();
        let event = Component::event()
            .with_property(Property::text("UID", "uid-1"))
            .with_property(Property::text("RECURRENCE-ID", "20260510T090000Z"));
        let expiration = Utc.with_ymd_and_hms(2026, 5, 10, 10, 0, 0).unwrap();

        let token =
            issue_token(&ThreadRandom, &store, &message(), &event, expiration).unwrap();

        let records = store.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.token, token);
        assert_eq!(record.attendee, "a@example.com");
        assert_eq!(record.organizer, "o@example.com");
        assert_eq!(record.uid, "uid-1");
        assert_eq!(record.recurrence_id.as_deref(), Some("20260510T090000Z"));
        assert_eq!(record.sequence, 3);
        assert_eq!(record.expiration, expiration);
    }
}
