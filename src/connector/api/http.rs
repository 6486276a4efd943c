use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Json;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::domain::{DomainError, PromptResponse, PROMPT_TOO_LONG_MESSAGE};

use super::container::Container;
use super::controller::CompletionController;
use super::cors::{cors_gate, CorsPolicy};
use super::ServerConfig;

/// Builds the HTTP app: the completion endpoint behind the CORS gate and a
/// cap on in-flight requests.
pub fn build_app(container: Arc<Container>, config: &ServerConfig) -> axum::Router {
    let cors = Arc::new(CorsPolicy::new(config.allowed_origins.clone()));
    let permits = Arc::new(Semaphore::new(config.max_concurrency()));

    axum::Router::new()
        .route("/", any(generate_completion))
        .route("/generateCompletion", any(generate_completion))
        .fallback(not_found)
        .with_state(container)
        .layer(middleware::from_fn_with_state(permits, limit_concurrency))
        .layer(middleware::from_fn_with_state(cors, cors_gate))
}

pub async fn serve(app: axum::Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on http://{}", listener.local_addr()?);
    info!("  POST /");
    info!("  POST /generateCompletion");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl-C, shutting down");
    }
}

async fn generate_completion(
    State(container): State<Arc<Container>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let controller = CompletionController::new(&container);
    let (status, payload) = match body {
        Ok(body) => controller.handle(&method, &body).await,
        Err(rejection) => {
            warn!("Could not read request body: {}", rejection.body_text());
            let error = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                DomainError::validation(PROMPT_TOO_LONG_MESSAGE)
            } else {
                DomainError::internal(format!(
                    "Failed to read request body: {}",
                    rejection.body_text()
                ))
            };
            controller.handle_unreadable_body(&method, error)
        }
    };

    let mut response = (status, Json(payload)).into_response();
    if status == StatusCode::METHOD_NOT_ALLOWED {
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST"));
    }
    response
}

async fn limit_concurrency(
    State(permits): State<Arc<Semaphore>>,
    request: Request,
    next: Next,
) -> Response {
    // The semaphore is never closed, so acquire only fails during teardown.
    let Ok(_permit) = permits.acquire().await else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    next.run(request).await
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(PromptResponse::failure("Not found")),
    )
}
