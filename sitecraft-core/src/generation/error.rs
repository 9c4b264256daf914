use crate::markup::MarkupError;
use thiserror::Error;

/// Failure of the external generation path.
///
/// None of these reach the caller of the orchestrator as an error: each one
/// triggers the template fallback and is reported through [`advisory`].
///
/// [`advisory`]: GenerationError::advisory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("credential rejected (HTTP {status})")]
    Auth { status: u16 },

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("service temporarily unavailable")]
    ServiceUnavailable,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("relay acknowledged the request without returning content")]
    RelayMisconfigured,

    #[error("relay workflow error: {0}")]
    RelayWorkflow(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}

impl GenerationError {
    /// Warning text explaining why the template was used instead
    pub fn advisory(&self) -> String {
        match self {
            GenerationError::Transport(detail) => {
                format!("External generation unreachable ({detail}); used the built-in template.")
            }
            GenerationError::Auth { .. } => {
                "API key was rejected; check the credential. Used the built-in template."
                    .to_string()
            }
            GenerationError::RateLimited => {
                "Rate limit reached; wait a moment before retrying. Used the built-in template."
                    .to_string()
            }
            GenerationError::ServiceUnavailable => {
                "Generation service is temporarily unavailable. Used the built-in template."
                    .to_string()
            }
            GenerationError::InvalidResponse(detail) => {
                format!(
                    "Unexpected response from the generation service ({detail}); used the built-in template."
                )
            }
            GenerationError::RelayMisconfigured => concat!(
                "Relay answered \"workflow was started\" instead of returning the page. ",
                "Set its response mode to answer when the last node finishes. ",
                "Used the built-in template."
            )
            .to_string(),
            GenerationError::RelayWorkflow(detail) => {
                format!("Relay workflow failed ({detail}); used the built-in template.")
            }
            GenerationError::Provider(detail) => {
                format!(
                    "Generation service reported an error ({detail}); used the built-in template."
                )
            }
            GenerationError::Markup(err) => {
                format!(
                    "Generated content was not a usable document ({err}); used the built-in template."
                )
            }
        }
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Transport("request timed out".to_string())
        } else if err.is_connect() {
            GenerationError::Transport("connection failed".to_string())
        } else {
            GenerationError::Transport(err.to_string())
        }
    }
}

/// First `limit` characters of a response body, for error messages
pub(crate) fn snippet(body: &str, limit: usize) -> String {
    body.trim().chars().take(limit).collect()
}
