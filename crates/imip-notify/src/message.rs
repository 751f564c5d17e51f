//! The scheduling transaction handed to the notification engine.

use imip_ical::core::ICalendar;

/// Neutral status: the transaction was accepted but no mail is warranted.
pub const STATUS_NOT_SIGNIFICANT: &str =
    "1.0;We got the message, but it's not significant enough to warrant an email";

/// Success status: the notification mail was handed to the transport.
pub const STATUS_SENT: &str = "1.1; Scheduling message is sent via iMip";

/// Failure status: the notification mail could not be delivered.
pub const STATUS_DELIVERY_FAILED: &str = "5.0; EMail delivery failed";

/// iTIP method of a scheduling transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Request,
    Reply,
    Cancel,
}

impl Method {
    /// Returns the wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Request => "REQUEST",
            Self::Reply => "REPLY",
            Self::Cancel => "CANCEL",
        }
    }

    /// Parses a method name (case-insensitive). Unknown methods are
    /// treated as REQUEST, matching how the surrounding protocol layer
    /// falls back.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "REPLY" => Self::Reply,
            "CANCEL" => Self::Cancel,
            _ => Self::Request,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One iTIP scheduling transaction.
///
/// Carries exactly one change to a calendar event, per the iTIP broker
/// contract. The engine writes `schedule_status` back; it never reads it
/// except to avoid clobbering an earlier status on the neutral path.
#[derive(Debug, Clone)]
pub struct ItipMessage {
    pub method: Method,
    /// Sender URI, expected to use the mailto scheme.
    pub sender: String,
    /// Recipient URI, expected to use the mailto scheme.
    pub recipient: String,
    pub sender_name: Option<String>,
    pub recipient_name: Option<String>,
    pub sequence: i32,
    /// Upstream judgment that this change is notification-worthy.
    pub significant_change: bool,
    /// The changed occurrence(s) plus any timezone definitions.
    pub calendar: ICalendar,
    /// Machine-readable outcome, written by the engine.
    pub schedule_status: Option<String>,
}

impl ItipMessage {
    /// Returns the sender's bare mail address, if the URI uses the
    /// mailto scheme.
    #[must_use]
    pub fn sender_address(&self) -> Option<&str> {
        mailto_address(&self.sender)
    }

    /// Returns the recipient's bare mail address, if the URI uses the
    /// mailto scheme.
    #[must_use]
    pub fn recipient_address(&self) -> Option<&str> {
        mailto_address(&self.recipient)
    }
}

/// Strips the mailto scheme off a calendar-user address
/// (case-insensitive). Returns `None` for any other scheme.
#[must_use]
pub fn mailto_address(uri: &str) -> Option<&str> {
    let (scheme, rest) = uri.split_at_checked(7)?;
    scheme.eq_ignore_ascii_case("mailto:").then_some(rest)
}
