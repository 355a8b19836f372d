use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::ServiceExt;

use sondeur::generator::GenerateError;
use sondeur::generator::mock::MockGenerator;
use sondeur::orchestrator::Orchestrator;
use sondeur::publisher::mock::MockPublisher;
use sondeur::question::Question;
use sondeur::server::{AppState, POLL_SENT, router};

fn sample_question() -> Question {
    Question {
        question: "Quelle fonction JavaScript convertit une chaîne en entier ?".to_string(),
        options: vec!["parseInt".to_string(), "toInt".to_string()],
        correct_option_id: 0,
    }
}

fn app(script: Vec<Result<Question, GenerateError>>) -> Router {
    let generator = Arc::new(MockGenerator::new(script));
    let publisher = Arc::new(MockPublisher::new());
    let orchestrator = Arc::new(Orchestrator::new(generator, publisher));
    router(AppState { orchestrator })
}

async fn get_cron(app: Router) -> axum::response::Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/cron")
        .body(Body::empty())
        .expect("request build should succeed");
    app.oneshot(request).await.expect("router should respond")
}

#[tokio::test]
async fn cron_acknowledges_with_plain_text_body() {
    let response = get_cron(app(vec![Ok(sample_question())])).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/plain"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], POLL_SENT.as_bytes());
}

#[tokio::test]
async fn cron_acknowledges_even_when_every_generation_fails() {
    let response = get_cron(app(vec![
        Err(GenerateError::EmptyResponse),
        Err(GenerateError::EmptyResponse),
    ]))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"poll sent!\n");
}

#[tokio::test]
async fn responses_carry_the_fixed_cors_headers() {
    let response = get_cron(app(vec![Ok(sample_question())])).await;
    let headers = response.headers();

    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        headers.get("access-control-allow-headers").unwrap(),
        "Origin, X-Requested-With, Content-Type, Accept, Authorization"
    );
    assert_eq!(
        headers.get("access-control-allow-methods").unwrap(),
        "GET, POST, PATCH, DELETE"
    );
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = app(vec![]);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .expect("request build should succeed");
    let response = app.oneshot(request).await.expect("router should respond");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
