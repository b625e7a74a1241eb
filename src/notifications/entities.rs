use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::gateway::{MulticastMessage, MulticastOutcome};

/// Inbound dispatch request. Missing fields deserialize to empty values and
/// are rejected by validation before any backend call is made.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl SendNotificationRequest {
    pub fn into_message(self) -> MulticastMessage {
        MulticastMessage {
            title: self.title,
            body: self.body,
            data: self.data,
            tokens: self.tokens,
        }
    }
}

/// Aggregated outcome of one dispatch. `responses[i]` corresponds to
/// `tokens[i]` of the request, and the counts always sum to the number of
/// input tokens.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResult {
    pub success_count: usize,
    pub failure_count: usize,
    pub responses: Vec<TokenDeliveryResponse>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenDeliveryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl From<MulticastOutcome> for DeliveryResult {
    fn from(outcome: MulticastOutcome) -> Self {
        let success_count = outcome.success_count();
        let failure_count = outcome.failure_count();
        let responses = outcome
            .outcomes
            .into_iter()
            .map(|outcome| TokenDeliveryResponse {
                success: outcome.success,
                error_detail: outcome.error_detail,
            })
            .collect();

        Self {
            success_count,
            failure_count,
            responses,
        }
    }
}
