use std::fmt;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of an EdgeX error, used by callers to decide between
/// "retry" and "fix the request and resubmit"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unknown,
    CommunicationError,
    EntityDoesNotExist,
    ContractInvalid,
    ServerError,
    LimitExceeded,
    StatusConflict,
    DuplicateName,
    InvalidId,
    ServiceUnavailable,
    NotAllowed,
    ServiceLocked,
    NotImplemented,
    RangeNotSatisfiable,
}

impl ErrorKind {
    /// Map an HTTP status code to an error kind
    pub fn from_status(code: u16) -> Self {
        match code {
            400 => Self::ContractInvalid,
            404 => Self::EntityDoesNotExist,
            405 => Self::NotAllowed,
            409 => Self::StatusConflict,
            413 => Self::LimitExceeded,
            416 => Self::RangeNotSatisfiable,
            423 => Self::ServiceLocked,
            500 => Self::ServerError,
            501 => Self::NotImplemented,
            503 => Self::ServiceUnavailable,
            _ => Self::Unknown,
        }
    }

    /// HTTP status code conventionally reported for this kind
    pub fn status_code(self) -> u16 {
        match self {
            Self::ContractInvalid | Self::InvalidId => 400,
            Self::EntityDoesNotExist => 404,
            Self::NotAllowed => 405,
            Self::StatusConflict | Self::DuplicateName => 409,
            Self::LimitExceeded => 413,
            Self::RangeNotSatisfiable => 416,
            Self::ServiceLocked => 423,
            Self::NotImplemented => 501,
            Self::ServiceUnavailable => 503,
            Self::Unknown | Self::CommunicationError | Self::ServerError => 500,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::CommunicationError => "ServiceClientError",
            Self::EntityDoesNotExist => "NotFound",
            Self::ContractInvalid => "ContractInvalid",
            Self::ServerError => "UnexpectedServerError",
            Self::LimitExceeded => "LimitExceeded",
            Self::StatusConflict => "StatusConflict",
            Self::DuplicateName => "DuplicateName",
            Self::InvalidId => "InvalidId",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::NotAllowed => "NotAllowed",
            Self::ServiceLocked => "ServiceLocked",
            Self::NotImplemented => "NotImplemented",
            Self::RangeNotSatisfiable => "RangeNotSatisfiable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform error returned by every client call
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct EdgexError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

/// Result type for EdgeX client operations
pub type EdgexResult<T> = Result<T, EdgexError>;

impl EdgexError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create an error that keeps `source` as its cause
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a contract invalid error
    pub fn contract_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ContractInvalid, message)
    }

    /// Create an error from a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::from_status(status), message)
    }

    /// Add context to this error. The kind is preserved and the original
    /// error becomes the source of the returned one.
    pub fn wrap(self, message: impl Into<String>) -> Self {
        Self {
            kind: self.kind,
            message: message.into(),
            source: Some(Box::new(self)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code associated with the error kind
    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl From<reqwest::Error> for EdgexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::with_source(
                ErrorKind::ContractInvalid,
                "failed to decode response body",
                err,
            );
        }
        let message = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "failed to connect to service"
        } else {
            "failed to send request"
        };
        Self::with_source(ErrorKind::CommunicationError, message, err)
    }
}

impl From<serde_json::Error> for EdgexError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::ContractInvalid,
            "failed to parse JSON payload",
            err,
        )
    }
}

impl From<url::ParseError> for EdgexError {
    fn from(err: url::ParseError) -> Self {
        Self::with_source(ErrorKind::ContractInvalid, "invalid service URL", err)
    }
}
