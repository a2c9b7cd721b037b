//! Error types for the advisory client

/// Advisory request error
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// Live advisor used without a credential
    #[error("API key is missing, set API_KEY to enable the live advisor")]
    MissingApiKey,

    /// Request could not be sent or the response not read
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("advisor service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// Service answered without any candidate text
    #[error("advisor reply contained no text")]
    EmptyReply,

    /// Reply text is not the requested JSON shape
    #[error("malformed advisor reply: {0}")]
    MalformedReply(#[source] serde_json::Error),

    /// A request is already outstanding for this session
    #[error("an advisory request is already in flight")]
    RequestInFlight,
}

impl AdvisorError {
    /// Check if retrying the same request can succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::EmptyReply | Self::RequestInFlight => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::MissingApiKey | Self::MalformedReply(_) => false,
        }
    }
}
