//! Mail transport collaborator contract.
//!
//! The engine composes a complete message (identities, subject, HTML and
//! plain bodies, one calendar-object attachment) and hands it to a
//! [`MailTransport`]. Delivery results come back as an explicit
//! [`SendOutcome`] rather than an exception: transports distinguish
//! full delivery, per-recipient rejection, and hard failure.

use thiserror::Error;

/// A mail identity: address plus optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub address: String,
    pub name: Option<String>,
}

impl Mailbox {
    /// Creates a mailbox with a display name.
    #[must_use]
    pub fn named(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }

    /// Creates a bare mailbox.
    #[must_use]
    pub fn bare(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }
}

/// A file attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub media_type: String,
    pub content: String,
}

/// A fully composed notification mail.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub from: Mailbox,
    pub to: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    /// The calendar object describing the change, always exactly one.
    pub attachment: Attachment,
}

/// Delivery result reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// All recipients accepted the message.
    Delivered,
    /// Some recipients were rejected; carries their addresses.
    Rejected(Vec<String>),
}

/// Hard transport failure.
#[derive(Debug, Error)]
#[error("Mail transport failure: {0}")]
pub struct TransportError(pub String);

/// Outbound mail transport.
pub trait MailTransport {
    /// ## Summary
    /// Sends a composed message.
    ///
    /// ## Errors
    /// Returns a [`TransportError`] on hard failure; per-recipient
    /// rejection is reported through [`SendOutcome::Rejected`].
    fn send(&self, message: &OutboundMessage) -> Result<SendOutcome, TransportError>;
}

/// Syntactic validation of a bare mail address.
///
/// Deliberately lenient: one `@`, non-empty local part and domain, no
/// whitespace. Anything stricter belongs to the transport.
#[must_use]
pub fn validate_address(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !address.chars().any(char::is_whitespace)
}
