//! Pong Loop entry point
//!
//! Initializes logging and settings, then hands control to the native window.

use pong_loop::Settings;
use pong_loop::platform::window;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pong Loop starting...");

    let settings = Settings::load();
    if let Err(e) = window::run(settings) {
        log::error!("{}", e);
        return Err(e.into());
    }
    Ok(())
}
