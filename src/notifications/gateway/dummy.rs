use async_trait::async_trait;
use tracing::info;

use super::{MulticastMessage, MulticastOutcome, PushGateway, PushGatewayError, TokenOutcome};

/// Log-only gateway for development setups without FCM credentials. Every
/// delivery is reported as successful.
pub struct DummyPushGateway;

#[async_trait]
impl PushGateway for DummyPushGateway {
    async fn send_multicast(
        &self,
        message: &MulticastMessage,
    ) -> Result<MulticastOutcome, PushGatewayError> {
        for token in &message.tokens {
            info!("Notification \"{}\" to {}", message.title, token);
        }

        Ok(MulticastOutcome {
            outcomes: vec![TokenOutcome::delivered(); message.tokens.len()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_reports_one_success_per_token() {
        let message = MulticastMessage {
            title: "Hi".to_string(),
            body: "Hello".to_string(),
            data: HashMap::new(),
            tokens: vec!["t1".to_string(), "t2".to_string(), "t3".to_string()],
        };

        let outcome = DummyPushGateway.send_multicast(&message).await.unwrap();

        assert_eq!(outcome.outcomes.len(), 3);
        assert_eq!(outcome.success_count(), 3);
        assert_eq!(outcome.failure_count(), 0);
    }
}
