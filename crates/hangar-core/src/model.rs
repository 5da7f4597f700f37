//! Model invocation seam.
//!
//! The patch core is synchronous; obtaining the raw reply is the only
//! suspending operation and happens behind this trait, typically on a worker
//! thread. The result is delivered back to the buffer-owning thread before
//! parsing and application run - those are never concurrent with any other
//! mutation of the same buffer.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("rate limited by provider")]
    RateLimited,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("model returned an empty reply")]
    EmptyReply,
}

impl ModelError {
    /// Rate-limit-class errors are the ones callers may retry against a
    /// backup model identity. That retry policy lives in the caller.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ModelError::RateLimited)
    }
}

/// Obtains a raw model reply for an edit prompt.
///
/// Implementations own provider selection, authentication, and retries; the
/// engine only ever sees the final reply text or nothing.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedClient {
        reply: String,
    }

    #[async_trait]
    impl ModelClient for CannedClient {
        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_client_returns_reply() {
        let client = CannedClient {
            reply: "lines 1-1:\nok();".to_string(),
        };
        let reply = client.generate("prompt").await.expect("reply");
        assert!(reply.starts_with("lines 1-1:"));
    }

    #[test]
    fn test_rate_limit_classification() {
        assert!(ModelError::RateLimited.is_rate_limit());
        assert!(!ModelError::Transport("boom".to_string()).is_rate_limit());
        assert!(!ModelError::EmptyReply.is_rate_limit());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ModelError::Transport("connection reset".to_string()).to_string(),
            "transport error: connection reset"
        );
    }
}
