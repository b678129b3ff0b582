//! Error types shared by the request builder, the envelope decoder and the client.

/// Caller input rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("page must be >= 1, got {0}")]
    PageOutOfRange(u32),
    #[error("size must be between 1 and 2000, got {0}")]
    SizeOutOfRange(u32),
    #[error("{0} is required")]
    EmptyArgument(&'static str),
    #[error("{0} cannot be `.` or `..`")]
    DotSegment(&'static str),
    #[error("{0} list is required")]
    EmptyList(&'static str),
    #[error("timestamp must be a positive integer, got {0}")]
    NonPositiveTimestamp(i64),
    #[error("path template `{template}` needs `{name}`")]
    MissingPathArgument {
        template: &'static str,
        name: &'static str,
    },
    #[error("path template `{template}` has no `{name}` segment")]
    UnexpectedPathArgument {
        template: &'static str,
        name: &'static str,
    },
    #[error("base URL `{0}` cannot carry a path")]
    UnusableBaseUrl(String),
}

/// Application-level failure: the envelope parsed but `code != 0`.
///
/// The `data` field of such envelopes is never decoded; Kaiascan fills it
/// inconsistently (an empty object, a zero-valued payload, or nothing at all).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API error {code}: {message}")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

/// Failure to reach the API or to get a 2xx answer from it.
#[cfg(feature = "client")]
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error! status: {status} ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("deadline elapsed before {url} answered")]
    DeadlineElapsed { url: String },
}

#[cfg(feature = "client")]
impl TransportError {
    /// HTTP status of a non-2xx answer.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { source, .. } => source.status(),
            Self::Build(_) | Self::DeadlineElapsed { .. } => None,
        }
    }

    /// Returns `true` if either the client timeout or a caller deadline fired.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request { source, .. } => source.is_timeout(),
            Self::DeadlineElapsed { .. } => true,
            Self::Build(_) | Self::Status { .. } => false,
        }
    }
}

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[cfg(feature = "client")]
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("error unmarshalling response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if the call was rejected before touching the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` for connection failures, timeouts and non-2xx statuses.
    pub fn is_transport(&self) -> bool {
        #[cfg(feature = "client")]
        if matches!(self, Self::Transport(_)) {
            return true;
        }
        false
    }

    /// Returns `true` if the body was not a well-formed envelope of the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// The API error carried by a well-formed envelope with a non-zero code.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of a non-2xx answer, if that is what failed.
    #[cfg(feature = "client")]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
