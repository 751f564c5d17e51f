use thiserror::Error;

/// iCalendar model and conversion errors
#[derive(Error, Debug)]
pub enum IcalError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Conversion(#[from] crate::expand::ConversionError),

    #[error(transparent)]
    CoreError(#[from] imip_core::error::CoreError),
}

pub type IcalResult<T> = std::result::Result<T, IcalError>;
