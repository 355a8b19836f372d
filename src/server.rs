use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;

use crate::orchestrator::Orchestrator;

/// The invariant acknowledgment body. The caller is a dumb scheduler, so
/// this is returned for every run, failed ones included.
pub const POLL_SENT: &str = "poll sent!\n";

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/cron", get(cron))
        .layer(middleware::from_fn(cors_headers))
        .with_state(state)
}

/// The single trigger endpoint. Runs the orchestration to completion and
/// acknowledges unconditionally; the outcome only shows up in the logs.
async fn cron(State(state): State<AppState>) -> impl IntoResponse {
    let _outcome = state.orchestrator.run().await;
    ([(header::CONTENT_TYPE, "text/plain")], POLL_SENT)
}

async fn cors_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(
            "Origin, X-Requested-With, Content-Type, Accept, Authorization",
        ),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PATCH, DELETE"),
    );
    response
}
