use anyhow::Result;
use operacoes_service::{ApiDoc, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,operacoes_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if std::env::var("PRINT_OPENAPI").is_ok() {
        println!("{}", ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    operacoes_service::run_server(config).await?;
    Ok(())
}
