//! Error types for activity source operations.
//!
//! Every failure carries an [`ErrorContext`] naming the operation and the
//! source involved so a failed load can be reported without a backtrace.

use std::fmt;

/// Result type for activity source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Structured context for source errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch_activities")
    pub operation: Option<String>,
    /// Where the activities come from (URL or file path)
    pub source: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether repeating the call could succeed
    pub retryable: bool,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the source location.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Mark this error as retryable.
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref source) = self.source {
            parts.push(format!("source={}", source));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for activity source operations
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source could not be reached (network, I/O).
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// The payload was not a JSON array of activities.
    #[error("Decode error: {message} {context}")]
    DecodeError {
        message: String,
        context: ErrorContext,
    },

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {status}: {message} {context}")]
    StatusError {
        status: u16,
        message: String,
        context: ErrorContext,
    },

    /// The configured file or endpoint does not exist.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },
}

impl SourceError {
    /// Create a connection error with full context.
    pub fn connection_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a decode error with context.
    pub fn decode_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::DecodeError {
            message: message.into(),
            context,
        }
    }

    /// Create a status error. 5xx responses are marked retryable.
    pub fn status(status: u16, message: impl Into<String>, context: ErrorContext) -> Self {
        let context = if status >= 500 {
            context.retryable()
        } else {
            context
        };
        Self::StatusError {
            status,
            message: message.into(),
            context,
        }
    }

    /// Create a not found error with context.
    pub fn not_found_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Whether a later load could succeed. Reported with a failed load;
    /// the load itself is never repeated.
    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::DecodeError { context, .. }
            | Self::StatusError { context, .. }
            | Self::NotFound { context, .. }
            | Self::ConfigurationError { context, .. } => context,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::decode(err.to_string())
    }
}

#[cfg(feature = "remote-source")]
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        let context = match err.url() {
            Some(url) => ErrorContext::default().with_source(url.as_str()),
            None => ErrorContext::default(),
        };

        if err.is_decode() {
            SourceError::decode_with_context(err.to_string(), context)
        } else if let Some(status) = err.status() {
            SourceError::status(status.as_u16(), err.to_string(), context)
        } else {
            SourceError::connection_with_context(err.to_string(), context)
        }
    }
}
