//! Headless price prediction.
//!
//! Loads the configured model artifact, prices one car and prints the
//! result. Useful for scripting and for checking an artifact before
//! deploying it behind the form.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- car --year 2015 --km-driven 42000 \
//!     --fuel Diesel --seller-type Dealer --transmission Manual --owner "First Owner"
//! cargo run --bin predict -- vector 2015 42000 0 1 0 0 --json
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Artifact to load (overridden by `--model`)
//! - `VALIDATE_INPUT` - Reject out-of-range years before inference (default: true)
//! - `CURRENCY_SYMBOL` - Suffix for the printed price (default: `$`)

use anyhow::{Context, Result};
use carprice::application::ml::model_loader;
use carprice::application::pricing_service::PredictionService;
use carprice::config::Config;
use carprice::domain::ml::feature_registry::FeatureVector;
use carprice::domain::pricing::{PriceQuote, format_price};
use carprice::domain::vehicle::{CarAttributes, Fuel, Owner, SellerType, Transmission};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the model artifact (defaults to MODEL_PATH)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Print the full quote as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a car described by form labels
    Car {
        #[arg(long)]
        year: u16,

        #[arg(long)]
        km_driven: u64,

        /// Diesel, Petrol, CNG, LPG or Electric
        #[arg(long)]
        fuel: Fuel,

        /// Individual, Dealer or "Trustmark Dealer"
        #[arg(long)]
        seller_type: SellerType,

        /// Manual or Automatic
        #[arg(long)]
        transmission: Transmission,

        /// "First Owner" .. "Fourth & Above Owner", or "Test Drive Car"
        #[arg(long)]
        owner: Owner,
    },

    /// Price an already-encoded row: year km_driven fuel seller_type transmission owner
    Vector {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = args.model {
        config = config.with_model_path(path);
    }

    let predictor = model_loader::load(&config.model_path)
        .with_context(|| format!("Failed to load model from {:?}", config.model_path))?;
    let service = PredictionService::new(predictor).with_input_policy(config.input_policy());
    info!(
        model = service.model_name(),
        input_policy = ?service.input_policy(),
        "Model ready"
    );

    let quote = match args.command {
        Command::Car {
            year,
            km_driven,
            fuel,
            seller_type,
            transmission,
            owner,
        } => {
            let car = CarAttributes {
                year,
                km_driven,
                fuel,
                seller_type,
                transmission,
                owner,
            };
            service.estimate(&car)?
        }
        Command::Vector { values } => {
            let features = FeatureVector::from_slice(&values)?;
            PriceQuote {
                price: service.predict(&features)?,
                features,
                model: service.model_name().to_string(),
            }
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!(
            "The Predicted Price: {}",
            format_price(quote.price, &config.currency_symbol)
        );
    }

    Ok(())
}
