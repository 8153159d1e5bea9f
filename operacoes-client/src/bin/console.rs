//! Scripted walkthrough of every endpoint of the operations service.

use anyhow::Result;
use clap::Parser;
use operacoes_client::cli::ConnectionArgs;

/// Calls each operation once against a running service and prints the records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ConsoleArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    operacoes_client::init_tracing();
    let args = ConsoleArgs::parse();

    let client = args.connection.client()?;
    operacoes_client::run_demo(&client, &mut std::io::stdout().lock()).await?;
    Ok(())
}
