use axum::body::Body;
use axum::http::header;
use axum::response::Response;
use axum::{extract::FromRef, http::StatusCode, routing::get, Router};
use prometheus::{Encoder, TextEncoder};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes::{category_router, questions_router, quiz_router};

#[derive(FromRef, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// The full application router. Split out of [`run_server`] so tests can
/// drive the exact same stack in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quiz_router(state))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(pool: SqlitePool) -> anyhow::Result<()> {
    let addr = "0.0.0.0:8080";
    let router = app(AppState { pool });
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn fallback() -> ApiError {
    tracing::info!("Fallback");
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    encoder.encode(&metrics, &mut buf).unwrap();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(Body::from(buf))
        .unwrap()
}
