/// Persona pipeline error types
///
/// The generation-facing kinds (model unavailable, quota, malformed
/// response, deserialization) are kept distinct so callers can report
/// them individually instead of collapsing everything into one message.
#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset loading or shape error
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Model endpoint unreachable (transport failure or 5xx)
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// API quota or rate limit exceeded
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Model returned a response we could not use
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// Persisted chain could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Trained chain file is absent
    #[error("{0}")]
    NotTrained(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PersonaError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create dataset error
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        Self::Dataset(msg.into())
    }

    /// Create model-unavailable error
    pub fn model_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::ModelUnavailable(msg.into())
    }

    /// Create quota error
    pub fn quota_exceeded<S: Into<String>>(msg: S) -> Self {
        Self::QuotaExceeded(msg.into())
    }

    /// Create malformed-response error
    pub fn malformed_response<S: Into<String>>(msg: S) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create deserialization error
    pub fn deserialization<S: Into<String>>(msg: S) -> Self {
        Self::Deserialization(msg.into())
    }

    /// Create not-trained error for a missing chain file
    pub fn not_trained<S: std::fmt::Display>(path: S) -> Self {
        Self::NotTrained(format!("{} missing. Run training first.", path))
    }

    /// Whether a retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ModelUnavailable(_) | Self::QuotaExceeded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_trained_message() {
        let err = PersonaError::not_trained("persona_optimized_chain.json");
        assert!(err.to_string().contains("Run training first"));
        assert!(err.to_string().contains("persona_optimized_chain.json"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(PersonaError::model_unavailable("503").is_retryable());
        assert!(PersonaError::quota_exceeded("429").is_retryable());
        assert!(!PersonaError::malformed_response("empty").is_retryable());
        assert!(!PersonaError::config("missing key").is_retryable());
        assert!(!PersonaError::not_trained("x").is_retryable());
    }
}
