use thiserror::Error;

use crate::config::PREDICTOR;
use crate::domain::FormField;

/// Local, pre-request constraint violation. `Display` is the exact banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Year must be after {min_year}")]
    YearTooEarly { min_year: i32 },
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,
    #[error("Day must be between 1 and {max_day}")]
    DayOutOfRange { max_day: i32 },
}

/// Raw text that could not be turned into a number for `field`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be a number (got {raw:?})")]
pub struct FieldParseError {
    pub field: FormField,
    pub raw: String,
}

impl FieldParseError {
    pub(crate) fn new(field: FormField, raw: &str) -> Self {
        Self {
            field,
            raw: raw.to_owned(),
        }
    }
}

/// Anything that went wrong after a request actually left the client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Server answered with an `error` message of its own.
    #[error("prediction server answered {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("prediction server answered {status} without an error message")]
    Status { status: u16 },
    #[error("could not reach prediction server: {0}")]
    Transport(String),
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Text for the error banner: the server's own message verbatim, otherwise the generic
    /// fallback.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Backend { message, .. } => message,
            _ => PREDICTOR.fallback_error,
        }
    }
}
