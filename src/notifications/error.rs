use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use super::gateway::PushGatewayError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Backend(String),
}

impl From<PushGatewayError> for DispatchError {
    fn from(err: PushGatewayError) -> Self {
        DispatchError::Backend(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        error!("{}", self);
        let status = match &self {
            DispatchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DispatchError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
