use thiserror::Error;

/// Errors surfaced by Slack Web API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, TLS, timeout, body decode).
    #[error("slack api transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Slack answered with `ok: false`; carries the platform error code.
    #[error("slack api error: {0}")]
    Slack(String),

    /// Slack answered `ok: true` but the payload is missing a field the
    /// caller depends on.
    #[error("malformed slack response: missing {0}")]
    Malformed(&'static str),
}

impl ApiError {
    /// Build a [`ApiError::Slack`] from the optional `error` envelope field.
    pub(crate) fn slack(code: Option<String>) -> Self {
        Self::Slack(code.unwrap_or_else(|| "unknown_error".to_string()))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
