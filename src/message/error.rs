//! Status-coded errors surfaced by the message service.
//!
//! Every failure a caller can observe is one of three kinds, each tied to an
//! HTTP-style status and a short machine-readable code. Errors travel as
//! [`MessageError`] values and serialise as [`ErrorBody`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result type for message service and repository operations.
pub type MessageResult<T> = Result<T, MessageError>;

/// The closed set of error kinds surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested message does not exist.
    NotFound,
    /// The request failed validation.
    InvalidRequest,
    /// The backing store failed or rejected the write.
    InternalServerError,
}

impl ErrorKind {
    /// Returns the HTTP-style status code for this kind.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::InvalidRequest => 422,
            Self::InternalServerError => 500,
        }
    }

    /// Returns the short error code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidRequest => "invalid_request",
            Self::InternalServerError => "server_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a known error code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown error code: {0}")]
pub struct ParseErrorKindError(pub String);

impl FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "not_found" => Ok(Self::NotFound),
            "invalid_request" => Ok(Self::InvalidRequest),
            "server_error" => Ok(Self::InternalServerError),
            other => Err(ParseErrorKindError(other.to_owned())),
        }
    }
}

/// A status-coded error carrying a human-readable message.
///
/// Equality compares kind and message, so callers can match on the variant
/// or compare whole values without reconstructing strings.
///
/// # Examples
///
/// ```
/// use message_service::message::error::{ErrorKind, MessageError};
///
/// let err = MessageError::not_found("the id is not found");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.status(), 404);
/// assert_eq!(err.code(), "not_found");
/// assert_eq!(err.message(), "the id is not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The requested message does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The request failed validation (422).
    #[error("{0}")]
    InvalidRequest(String),

    /// The backing store failed or rejected the write (500).
    #[error("{0}")]
    InternalServerError(String),
}

impl MessageError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates an invalid-request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates an internal server error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalServerError(message.into())
    }

    /// Creates an error of the given kind.
    #[must_use]
    pub fn of_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        match kind {
            ErrorKind::NotFound => Self::not_found(message),
            ErrorKind::InvalidRequest => Self::invalid_request(message),
            ErrorKind::InternalServerError => Self::internal(message),
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::InternalServerError(_) => ErrorKind::InternalServerError,
        }
    }

    /// Returns the HTTP-style status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.kind().status()
    }

    /// Returns the short error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message)
            | Self::InvalidRequest(message)
            | Self::InternalServerError(message) => message,
        }
    }

    /// Returns the serialisable representation of this error.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status(),
            code: self.code().to_owned(),
            message: self.message().to_owned(),
        }
    }
}

/// Wire representation of a [`MessageError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP-style status code.
    pub status: u16,
    /// Short error code.
    pub code: String,
    /// Human-readable detail.
    pub message: String,
}

impl From<&MessageError> for ErrorBody {
    fn from(err: &MessageError) -> Self {
        err.to_body()
    }
}

impl From<MessageError> for ErrorBody {
    fn from(err: MessageError) -> Self {
        err.to_body()
    }
}

/// Errors returned while rebuilding a [`MessageError`] from an [`ErrorBody`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidErrorBody {
    /// The code is not one of the known kinds.
    #[error(transparent)]
    UnknownCode(#[from] ParseErrorKindError),

    /// The status does not belong to the code.
    #[error("status {status} does not match error code '{code}'")]
    StatusMismatch {
        /// The status carried by the body.
        status: u16,
        /// The code carried by the body.
        code: String,
    },
}

impl TryFrom<ErrorBody> for MessageError {
    type Error = InvalidErrorBody;

    fn try_from(body: ErrorBody) -> Result<Self, Self::Error> {
        let ErrorBody {
            status,
            code,
            message,
        } = body;
        let kind = ErrorKind::from_str(&code)?;
        if kind.status() != status {
            return Err(InvalidErrorBody::StatusMismatch { status, code });
        }
        Ok(Self::of_kind(kind, message))
    }
}

impl Serialize for MessageError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_body().serialize(serializer)
    }
}
