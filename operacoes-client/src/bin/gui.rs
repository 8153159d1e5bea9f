use anyhow::Result;
use clap::Parser;
use eframe::egui;
use operacoes_client::cli::ConnectionArgs;
use operacoes_client::gui::{CalculatorApp, WINDOW_TITLE};

/// Graphical calculator backed by the operations service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct GuiArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

fn main() -> Result<()> {
    operacoes_client::init_tracing();
    let args = GuiArgs::parse();

    let client = args.connection.client()?;
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    tracing::info!("using service at {}", client.base_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 300.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(CalculatorApp::new(client, runtime)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the GUI: {}", e))?;

    Ok(())
}
