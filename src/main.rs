use anyhow::Context;
use carprice::application::ml::model_loader;
use carprice::application::pricing_service::PredictionService;
use carprice::config::Config;
use carprice::interfaces::ui::{APP_TITLE, PriceFormApp};

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Car Price Prediction {} starting...", env!("CARGO_PKG_VERSION"));

    // 2. Load Config
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: model={:?}, input_policy={:?}",
        config.model_path,
        config.input_policy()
    );

    // 3. Load the model once; without it there is nothing to show
    let predictor = model_loader::load(&config.model_path)
        .with_context(|| format!("Cannot start without a model ({:?})", config.model_path))?;
    let service = PredictionService::new(predictor).with_input_policy(config.input_policy());

    // 4. Run UI (Blocks Main Thread)
    let app = PriceFormApp::new(service, config.currency_symbol.clone());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    info!("Window closed. Exiting...");
    Ok(())
}
