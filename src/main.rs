mod common;
mod config;
mod format;
mod network;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use eframe::egui;
use network::AssistantClient;
use tokio::sync::mpsc;
use ui::ChatApp;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "faculty_chat",
    version,
    about = "Floating chat widget for the faculty assistant service"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let session_id = Uuid::new_v4().to_string();

    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let client_session = session_id.clone();
    tokio::spawn(async move {
        let client = AssistantClient::new(event_tx, cmd_rx, app_config.endpoint, client_session);
        client.run().await;
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([430.0, 650.0])
            .with_title("Assistant de la Faculté"),
        ..Default::default()
    };
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Assistant de la Faculté",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            Ok(Box::new(ChatApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                session_id.clone(),
            )))
        }),
    )
}
