//! Orbitsim - headless two-body gravity animation
//!
//! Renders a Newtonian two-body scene frame by frame and writes PNG snapshots.

use orbitsim::config::AppConfig;
use orbitsim::App;

fn main() {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let result = App::new(config).and_then(|mut app| app.run());
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
