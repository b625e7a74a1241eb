use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::options,
};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::context::AppContext;

use super::{
    entities::{DeliveryResult, SendNotificationRequest},
    error::DispatchError,
};

const NOTIFICATIONS_TAG: &str = "notifications";

pub fn router() -> OpenApiRouter<Arc<AppContext>> {
    OpenApiRouter::new()
        .routes(routes!(send_notification))
        .route(
            "/send",
            options(preflight).fallback(method_not_allowed),
        )
}

#[utoipa::path(
    post,
    path = "/send",
    request_body = SendNotificationRequest,
    responses(
        (status = 200, description = "Notification dispatched, with per-token outcomes", body = DeliveryResult),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Push backend failure")
    ),
    tag = NOTIFICATIONS_TAG
)]
async fn send_notification(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<DeliveryResult>, DispatchError> {
    context.dispatch_service.dispatch(request).await.map(Json)
}

/// CORS preflight for browser clients. The blanket allow-origin header is
/// attached by the webserver layer.
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
