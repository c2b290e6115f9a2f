//! Main Entrypoint for the Disc AI Console
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment and CLI flags.
//! 2. Initializing logging.
//! 3. Loading the reference material to discuss.
//! 4. Wiring the session controller to its collaborators (HTTP turn client,
//!    file-backed narration sink, stand-in capture capabilities).
//! 5. Running the interactive console loop.

use anyhow::Context;
use clap::Parser;
use discai_console::{
    app::App,
    config::Config,
    material,
    playback::FileSink,
    voice::{CannedTranscriber, StubCaptureDevice},
};
use discai_core::{HttpTurnClient, SessionController};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "discai", about = "Interactive two-agent discussion of an article")]
struct Args {
    /// Path to a JSON material file; the built-in sample is used when absent.
    #[arg(long)]
    material: Option<PathBuf>,

    /// Override the orchestration service endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// Start with narration muted.
    #[arg(long)]
    muted: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let material = material::load(args.material.as_deref())?;
    info!(topic = %material.title, "material loaded");

    let endpoint = args.endpoint.unwrap_or_else(|| config.endpoint.clone());
    let sink = FileSink::new(config.voices_dir.clone())
        .context("Failed to prepare the narration directory")?;

    let mut controller = SessionController::new(
        material,
        Arc::new(HttpTurnClient::new(endpoint)),
        Arc::new(sink),
        Arc::new(StubCaptureDevice),
        Arc::new(CannedTranscriber::new(config.voice_placeholder.clone())),
    );
    if args.muted {
        controller.toggle_mute();
    }

    let mut app = App::new(controller, config.agent_a_name, config.agent_b_name);
    app.run().await
}
