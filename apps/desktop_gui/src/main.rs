mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use ui::PredictorApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop form for the survival prediction service")]
struct Args {
    /// Prediction service base URL; defaults to predictor.toml / env / built-in.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = client_core::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Titanic Survival Predictor")
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Titanic Survival Predictor",
        options,
        Box::new(|_cc| Ok(Box::new(PredictorApp::new(cmd_tx, ui_rx)))),
    )
}
