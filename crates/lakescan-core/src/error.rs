//! Error types and result aliases for Lakescan.
//!
//! Only transport-level failures are represented here: a non-2xx status, a
//! connection problem, or an undecodable body aborts the whole crawl. Missing
//! optional fields in otherwise well-formed responses are modeled as `Option`
//! values on the response types and handled at each call site instead.

/// The result type used throughout Lakescan.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be constructed or the request never
    /// completed (DNS, TLS, connection reset, timeout).
    #[error("connection error: {message}")]
    Connection {
        /// Description of the transport failure.
        message: String,
        /// The underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service answered with a non-success status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("invalid response: {message}")]
    InvalidResponse {
        /// Description of the decode failure.
        message: String,
    },

    /// A SQL job reached a terminal state other than `COMPLETED`.
    #[error("job {job_id} ended in state {state}")]
    JobFailed {
        /// Identifier of the failed job.
        job_id: String,
        /// Terminal job state reported by the service.
        state: String,
    },
}

impl Error {
    /// Creates a new connection error with the given message.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new connection error with a source cause.
    #[must_use]
    pub fn connection_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
