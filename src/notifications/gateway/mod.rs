pub mod dummy;
pub mod fcm;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushGatewayError {
    #[error("Failed to send push message: {0}")]
    SendFailure(String),

    #[error("Failed to initialize push gateway: {0}")]
    InitializationFailed(String),
}

/// One notification payload addressed to a list of device tokens, delivered
/// through a single multicast send.
#[derive(Debug, Clone, PartialEq)]
pub struct MulticastMessage {
    pub title: String,
    pub body: String,
    pub data: HashMap<String, String>,
    pub tokens: Vec<String>,
}

/// Delivery outcome for a single token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenOutcome {
    pub success: bool,
    pub error_detail: Option<String>,
}

impl TokenOutcome {
    pub fn delivered() -> Self {
        Self {
            success: true,
            error_detail: None,
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            error_detail: Some(detail.into()),
        }
    }
}

/// Per-token outcomes of a multicast send. Entries keep the order of the
/// input token list, one entry per token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MulticastOutcome {
    pub outcomes: Vec<TokenOutcome>,
}

impl MulticastOutcome {
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Delivers one message to every token in the message's token list and
    /// reports per-token outcomes. An `Err` means the backend call failed as
    /// a whole; individual undeliverable tokens are reported in the outcome.
    async fn send_multicast(
        &self,
        message: &MulticastMessage,
    ) -> Result<MulticastOutcome, PushGatewayError>;
}
