use thiserror::Error;

/// Notification layer errors - combines all error types
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error(transparent)]
    IcalError(#[from] imip_ical::error::IcalError),

    #[error(transparent)]
    ConversionError(#[from] imip_ical::expand::ConversionError),

    #[error(transparent)]
    StoreError(#[from] crate::store::StoreError),

    #[error(transparent)]
    TransportError(#[from] crate::mail::TransportError),

    #[error(transparent)]
    CoreError(#[from] imip_core::error::CoreError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type NotifyResult<T> = std::result::Result<T, NotifyError>;
