use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request, header};
use axum::middleware::{Next, from_fn};
use axum::response::IntoResponse;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{
    OpenApi,
    openapi::{Info, OpenApiBuilder},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::{context::AppContext, notifications, settings::WebserverSettings};

#[derive(OpenApi)]
struct ApiDoc;

pub async fn start(settings: &WebserverSettings, context: AppContext) -> Result<()> {
    let router = build_router(Arc::new(context));

    let addr = SocketAddr::new(
        settings.host.parse().expect("IP address can be parsed"),
        settings.port,
    );
    let listener = TcpListener::bind(addr)
        .await
        .expect("Binding to address works");
    let server = axum::serve(listener, router.into_make_service());

    let socket_addr = server.local_addr()?;
    info!(
        "Starting webserver on {}:{}",
        settings.host,
        socket_addr.port()
    );

    server.await.context("Server error")?;

    Ok(())
}

fn build_router(context: Arc<AppContext>) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/notifications", notifications::router())
        .with_state(context)
        .layer(from_fn(error_logging_middleware))
        // Browser clients may call from any origin
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .split_for_parts();

    let api = OpenApiBuilder::from(api)
        .info(Info::new("Pushcast Server API", "0.1.0"))
        .build();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

async fn error_logging_middleware(request: Request<Body>, next: Next) -> impl IntoResponse {
    let path = request.uri().path().to_owned();
    let method = request.method().clone();

    let response = next.run(request).await;

    if !response.status().is_success() {
        let status = response.status();

        // Log error with context but without body
        tracing::error!(
            status = ?status,
            path = %path,
            method = %method,
            "Request error"
        );
    }

    response
}
