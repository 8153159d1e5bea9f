use operacoes_service::ApiDoc;
use utoipa::OpenApi;

// Prints the OpenAPI JSON document of the service to standard output.
fn main() -> anyhow::Result<()> {
    let spec = ApiDoc::openapi().to_pretty_json()?;
    print!("{}", spec);
    Ok(())
}
