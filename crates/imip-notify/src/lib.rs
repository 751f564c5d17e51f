//! iMIP notification core.
//!
//! Decides whether a scheduling transaction (an iTIP REQUEST, REPLY, or
//! CANCEL) warrants a notification mail, isolates the single changed
//! occurrence, describes the change to a human recipient, and hands the
//! composed message to a mail-transport collaborator. iMIP is the
//! email-based transport binding for iTIP (RFC 6047).
//!
//! Transmission, storage, localization catalogs, and URL routing are
//! consumed through the collaborator traits in [`mail`], [`store`],
//! [`l10n`], and [`links`]; the engine in [`schedule::engine`] owns the
//! decision logic.

pub mod clock;
pub mod error;
pub mod l10n;
pub mod links;
pub mod mail;
pub mod message;
pub mod schedule;
pub mod store;
pub mod template;

pub use error::{NotifyError, NotifyResult};
