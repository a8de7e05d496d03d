/*
[INPUT]:  Error sources (validation, transport, HTTP status, serialization)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Chimoney adapter
#[derive(Error, Debug)]
pub enum ChimoneyError {
    /// Input rejected locally, nothing was sent
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP request could not be completed (connect, timeout, cancellation)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered outside the 2xx range
    #[error("Request failed with status {code}")]
    Status { code: u16, body: String },

    /// Success body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Local precondition failures raised before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid issue ID")]
    InvalidIssueId,
    #[error("invalid transaction ID")]
    InvalidTransactionId,
    #[error("invalid chi ref")]
    InvalidChiRef,
    #[error("invalid currency")]
    InvalidCurrency,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("invalid country")]
    InvalidCountry,
    #[error("invalid phone number")]
    InvalidPhoneNumber,
    #[error("invalid redeem data")]
    InvalidRedeemData,
    #[error("no {kind} payouts provided")]
    EmptyPayouts { kind: &'static str },
    #[error("invalid payment ID")]
    InvalidPaymentId,
    #[error("invalid wallet ID")]
    InvalidWalletId,
    #[error("invalid receiver")]
    InvalidReceiver,
    #[error("invalid sub-account ID")]
    InvalidSubAccountId,
    #[error("sub-account name is required")]
    MissingName,
    #[error("sub-account email is required")]
    MissingEmail,
}

impl ChimoneyError {
    /// Whether a caller-side retry could succeed.
    ///
    /// The adapter itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ChimoneyError::Transport(_) => true,
            ChimoneyError::Status { code, .. } => {
                *code == StatusCode::TOO_MANY_REQUESTS.as_u16() || *code >= 500
            }
            _ => false,
        }
    }

    /// Check if the error was raised before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, ChimoneyError::Validation(_))
    }

    /// HTTP status code carried by a [`ChimoneyError::Status`]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ChimoneyError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Create a status error from a response status and its body text
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        ChimoneyError::Status {
            code: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for Chimoney operations
pub type Result<T> = std::result::Result<T, ChimoneyError>;
