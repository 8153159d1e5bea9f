//! Router-level tests: requests go through extraction, handlers and error
//! mapping exactly as they would behind a listener.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use operacoes_service::{build_router, Calculator};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(Calculator::new())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "mensagem": "Bem-vindo(a) à API de Operações Matemáticas!" }));
}

#[tokio::test]
async fn soma_adds_operands() {
    let (status, body) = get("/soma?numero1=10&numero2=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "operacao": "soma", "numero1": 10.0, "numero2": 5.0, "resultado": 15.0 })
    );
}

#[tokio::test]
async fn subtracao_respects_operand_order() {
    let (status, body) = get("/subtracao?numero1=5&numero2=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operacao"], "subtração");
    assert_eq!(body["resultado"], -5.0);
}

#[tokio::test]
async fn multiplicacao_multiplies_operands() {
    let (status, body) = get("/multiplicacao?numero1=15&numero2=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operacao"], "multiplicação");
    assert_eq!(body["resultado"], 75.0);
}

#[tokio::test]
async fn divisao_divides_operands() {
    let (status, body) = get("/divisao?numero1=7.5&numero2=2.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "operacao": "divisão", "numero1": 7.5, "numero2": 2.5, "resultado": 3.0 })
    );
}

#[tokio::test]
async fn divisao_by_zero_is_a_bad_request() {
    for uri in [
        "/divisao?numero1=10&numero2=0",
        "/divisao?numero1=-3.5&numero2=0.0",
        "/divisao?numero1=0&numero2=-0",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "detail": "Divisão por zero não é permitida" }), "{uri}");
    }
}

#[tokio::test]
async fn non_numeric_operand_is_rejected_before_the_operation() {
    let (status, body) = get("/soma?numero1=abc&numero2=5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));

    // A malformed divisor never reaches the zero guard.
    let (status, body) = get("/divisao?numero1=10&numero2=zero").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_ne!(body["detail"], "Divisão por zero não é permitida");
}

#[tokio::test]
async fn non_finite_operands_are_rejected_before_the_operation() {
    for uri in [
        "/soma?numero1=nan&numero2=1",
        "/soma?numero1=inf&numero2=1",
        "/subtracao?numero1=1&numero2=-infinity",
        "/divisao?numero1=inf&numero2=inf",
        "/divisao?numero1=1&numero2=NaN",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body, json!({ "detail": "Os números devem ser finitos" }), "{uri}");
    }
}

#[tokio::test]
async fn overflowing_result_is_an_error_not_a_null_number() {
    for uri in [
        "/multiplicacao?numero1=1e308&numero2=10",
        "/soma?numero1=1.7e308&numero2=1.7e308",
        "/divisao?numero1=1e308&numero2=1e-308",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body, json!({ "detail": "O resultado não é um número finito" }), "{uri}");
    }
}

#[tokio::test]
async fn missing_operand_is_rejected() {
    let (status, body) = get("/multiplicacao?numero1=2").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.get("detail").is_some());

    let (status, _) = get("/subtracao").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn repeated_requests_yield_identical_bodies() {
    let first = get("/divisao?numero1=1&numero2=3").await;
    let second = get("/divisao?numero1=1&numero2=3").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_operation_is_not_found() {
    let (status, _) = get("/potencia?numero1=2&numero2=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_lists_every_operation() {
    let (status, body) = get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().expect("paths object");
    for path in ["/", "/soma", "/subtracao", "/multiplicacao", "/divisao"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(body["paths"]["/divisao"]["get"]["responses"]["400"].is_object());
}
