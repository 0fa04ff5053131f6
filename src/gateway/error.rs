use thiserror::Error;

/// Failure of a single advice fetch.
///
/// Transport failures, non-success statuses, and malformed bodies all
/// collapse into this one kind: the only recovery available to a caller is
/// to show a generic failure and let the user re-trigger, so finer
/// classification would go unused. The reason names the actual cause for
/// logs.
#[derive(Debug, Error)]
#[error("advice fetch failed: {reason}")]
pub struct GatewayError {
    reason: String,
}

impl GatewayError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
