use crate::application::pricing_service::InputPolicy;
use crate::config::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: [&str; 5] = [
    "MODEL_PATH",
    "VALIDATE_INPUT",
    "CURRENCY_SYMBOL",
    "UI_WINDOW_WIDTH",
    "UI_WINDOW_HEIGHT",
];

fn clear_vars() {
    for var in VARS {
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment.
        unsafe { env::remove_var(var) };
    }
}

fn set_var(key: &str, value: &str) {
    // SAFETY: callers hold ENV_LOCK.
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_config_defaults_from_empty_env() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    let config = Config::from_env().unwrap();

    assert_eq!(
        config.model_path,
        PathBuf::from("car_price_prediction_model.json")
    );
    assert_eq!(config.input_policy(), InputPolicy::Validate);
    assert_eq!(config.currency_symbol, "$");
    assert_eq!(config.window_width, 760.0);
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    set_var("MODEL_PATH", "/srv/models/forest.json");
    set_var("VALIDATE_INPUT", "false");
    set_var("CURRENCY_SYMBOL", " INR");
    set_var("UI_WINDOW_WIDTH", "1024");

    let config = Config::from_env().unwrap();

    assert_eq!(config.model_path, PathBuf::from("/srv/models/forest.json"));
    assert_eq!(config.input_policy(), InputPolicy::Trust);
    assert_eq!(config.currency_symbol, " INR");
    assert_eq!(config.window_width, 1024.0);

    // Cleanup
    clear_vars();
}

#[test]
fn test_invalid_validate_flag_is_an_error() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    set_var("VALIDATE_INPUT", "sometimes");
    let result = Config::from_env();
    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("VALIDATE_INPUT"));

    clear_vars();
}

#[test]
fn test_invalid_window_size_falls_back() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    set_var("UI_WINDOW_HEIGHT", "tall");
    let config = Config::from_env().unwrap();
    assert_eq!(config.window_height, 900.0);

    clear_vars();
}
