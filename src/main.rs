//! raycore - ray probe
//!
//! Loads the probe configuration, evaluates every configured ray at every
//! configured parameter and logs the resulting points.

use raycore::config::AppConfig;
use raycore::probe;

fn main() {
    // Load configuration before logging so the configured level can apply
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still takes precedence over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting raycore probe");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    match probe::run(&config.probe) {
        Ok(samples) => log::info!("Evaluated {} sample points", samples.len()),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
