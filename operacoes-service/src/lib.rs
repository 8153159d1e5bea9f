//! # operacoes-service
//!
//! A stateless HTTP service exposing four arithmetic operations over two
//! query parameters, `numero1` and `numero2`:
//!
//! | Path             | Operation      |
//! |------------------|----------------|
//! | `/soma`          | addition       |
//! | `/subtracao`     | subtraction    |
//! | `/multiplicacao` | multiplication |
//! | `/divisao`       | division       |
//!
//! `GET /` returns a static greeting and `GET /api-docs/openapi.json` the
//! OpenAPI document. With the `swagger-ui` feature the document is also
//! browsable at `/swagger-ui`.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod handlers;

pub use config::{ConfigError, ServerConfig};
pub use domain::{Calculator, OperationError};
pub use error::ApiError;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Operações Matemáticas",
        description = "Addition, subtraction, multiplication and division over two query parameters."
    ),
    paths(
        handlers::welcome,
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide
    ),
    components(schemas(
        operacoes_core::OperationResult,
        operacoes_core::Welcome,
        operacoes_core::ErrorDetail
    ))
)]
pub struct ApiDoc;

pub fn default_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the complete application router around an explicitly constructed
/// [`Calculator`].
pub fn build_router(calculator: Calculator) -> Router {
    let rest = Router::new()
        .route("/", get(handlers::welcome))
        .route("/soma", get(handlers::add))
        .route("/subtracao", get(handlers::subtract))
        .route("/multiplicacao", get(handlers::multiply))
        .route("/divisao", get(handlers::divide))
        .with_state(calculator);

    rest.merge(docs_router())
        .layer(default_cors_layer())
        .layer(TraceLayer::new_for_http())
}

#[cfg(feature = "swagger-ui")]
fn docs_router() -> Router {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
        .into()
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_router() -> Router {
    Router::new().route(
        OPENAPI_JSON_PATH,
        get(|| async { axum::Json(ApiDoc::openapi()) }),
    )
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let app = build_router(Calculator::new());

    let listener = TcpListener::bind(config.address()).await?;
    let address = listener.local_addr()?;
    tracing::info!("🚀 Server running at http://{}", address);
    tracing::info!("📚 OpenAPI document at http://{}{}", address, OPENAPI_JSON_PATH);
    #[cfg(feature = "swagger-ui")]
    tracing::info!("📚 Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
