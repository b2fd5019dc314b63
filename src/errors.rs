//! Unified application error type.
//! Validation and remote failures of a calculation are modelled separately
//! (`ValidationError`, `RemoteError`) and combined in `CalcError`; the CLI
//! layer wraps everything in `AppError`.

use std::io;
use thiserror::Error;

/// Fallback shown when a failed calculation carries no message.
pub const GENERIC_CALC_ERROR: &str = "An error occurred while calculating working hours";

/// Fallback used by the HTTP wrapper when neither body nor status explain the failure.
pub const UNKNOWN_REMOTE_ERROR: &str = "An unknown error occurred";

/// Local, pre-flight failures. These never reach a service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all date and time fields")]
    MissingFields,

    #[error("End date/time must be after start date/time")]
    EndBeforeStart,

    #[error("Invalid date or time: {0}")]
    InvalidDateTime(String),

    #[error("Working hours must be within 0-23 and start before they end")]
    InvalidWorkWindow,
}

/// Network failure or non-success response from the calculation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    /// HTTP status, if a response was received at all.
    pub status: Option<u16>,
    pub message: String,
}

impl RemoteError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(Some(400), message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl CalcError {
    /// The single user-visible message for this failure.
    pub fn display_message(&self) -> String {
        match self {
            CalcError::Validation(v) => v.to_string(),
            CalcError::Remote(r) if r.message.trim().is_empty() => GENERIC_CALC_ERROR.to_string(),
            CalcError::Remote(r) => r.message.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    // ---------------------------
    // Calculation errors
    // ---------------------------
    #[error("{}", .0.display_message())]
    Calc(#[from] CalcError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Calc(CalcError::Validation(e))
    }
}

impl From<RemoteError> for AppError {
    fn from(e: RemoteError) -> Self {
        AppError::Calc(CalcError::Remote(e))
    }
}

pub type AppResult<T> = Result<T, AppError>;
