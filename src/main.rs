#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use {
    clap::Parser,
    eframe::NativeOptions,
    gold_predictor::{Cli, config::PERSISTENCE, run_app},
    std::{panic, path::PathBuf},
};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("gold_predictor"), my_code_level)
        .init();

    let args = Cli::parse();
    log::info!("Prediction server: {}", args.endpoint);

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([760.0, 880.0])
            .with_min_inner_size([520.0, 640.0])
            .with_title("Gold Price Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Gold Price Predictor",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
