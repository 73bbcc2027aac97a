#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod utils;

mod app;
mod ui;

// Re-export commonly used types outside of crate (for bin/predict.rs)
pub use app::App;
pub use engine::{ControllerConfig, PredictionFormController};

use {
    anyhow::{Context, Result},
    clap::Parser,
    std::sync::Arc,
};

use crate::{config::PREDICTOR, data::HttpPredictionProvider, domain::FormState};

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction server
    #[arg(long, default_value = PREDICTOR.endpoint.base_url)]
    pub endpoint: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

/// Controller talking HTTP to `endpoint`, starting from `form`.
pub fn build_controller(endpoint: &str, form: FormState) -> Result<PredictionFormController> {
    let provider = HttpPredictionProvider::new(endpoint)?;
    let controller = PredictionFormController::new(Arc::new(provider), ControllerConfig::default())
        .context("failed to start the request runtime")?;
    Ok(controller.with_form(form))
}
