use anyhow::Result;
use clap::Parser;
use operacoes_client::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    operacoes_client::init_tracing();
    let cli = Cli::parse();
    let client = cli.connection.client()?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Calc {
            operator,
            numero1,
            numero2,
            json,
        } => {
            if json {
                let result = client.call(operator, numero1, numero2).await?;
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", client.invoke(operator, numero1, numero2).await?);
            }
        }
        Command::Welcome => println!("{}", client.welcome().await?.mensagem),
        Command::Demo => operacoes_client::run_demo(&client, &mut std::io::stdout().lock()).await?,
    }
    Ok(())
}
