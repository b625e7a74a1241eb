use std::sync::Arc;
use tracing::instrument;

use super::{
    entities::{DeliveryResult, SendNotificationRequest},
    error::DispatchError,
    gateway::PushGateway,
};

pub struct DispatchService<G: PushGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: PushGateway + ?Sized> DispatchService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validates the request and forwards it to the push backend as one
    /// multicast send. Per-token failures are data in the result; only a
    /// failure of the backend call itself is an error.
    #[instrument(skip_all, fields(tokens = request.tokens.len()))]
    pub async fn dispatch(
        &self,
        request: SendNotificationRequest,
    ) -> Result<DeliveryResult, DispatchError> {
        validate(&request)?;

        let token_count = request.tokens.len();
        let outcome = self.gateway.send_multicast(&request.into_message()).await?;

        // The gateway contract is one outcome per token, in input order
        if outcome.outcomes.len() != token_count {
            return Err(DispatchError::Backend(format!(
                "Push backend returned {} outcomes for {} tokens",
                outcome.outcomes.len(),
                token_count
            )));
        }

        Ok(outcome.into())
    }
}

fn validate(request: &SendNotificationRequest) -> Result<(), DispatchError> {
    if request.tokens.is_empty() {
        return Err(DispatchError::InvalidRequest(
            "tokens array is required and must not be empty".to_string(),
        ));
    }
    if request.tokens.iter().any(|token| token.is_empty()) {
        return Err(DispatchError::InvalidRequest(
            "tokens must not contain empty entries".to_string(),
        ));
    }
    if request.title.is_empty() || request.body.is_empty() {
        return Err(DispatchError::InvalidRequest(
            "title and body are required".to_string(),
        ));
    }
    Ok(())
}
