/// Length of the single-use invitation response token.
pub const INVITATION_TOKEN_LENGTH: usize = 60;

/// Unix timestamp of 2038-01-01T00:00:00Z, the horizon past which
/// recurrence expansion is cut off.
pub const RECURRENCE_HORIZON_TIMESTAMP: i64 = 2_145_916_800;

/// Label column width for the plain-text body list. Wide enough for the
/// longest bullet label in all supported languages.
pub const BODY_LABEL_WIDTH: usize = 15;

/// Filename of the calendar object attached to every notification mail.
pub const ICS_ATTACHMENT_FILENAME: &str = "event.ics";

pub const ICS_MEDIA_TYPE: &str = "text/calendar";

/// Media type prefix for the attachment; the iTIP method name is appended.
pub const ICS_MEDIA_TYPE_PREFIX: &str = const_str::concat!(ICS_MEDIA_TYPE, "; method=");
