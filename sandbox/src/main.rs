//! Sandbox: a triangle, a grid of squares and a movable camera

mod example_layer;

use example_layer::ExampleLayer;
use game_engine::core::ConfigError;
use game_engine::prelude::*;
use std::path::Path;
use std::process::ExitCode;

const CONFIG_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/sandbox.toml");

/// Config from `sandbox.toml`, or defaults plus the reason it was unusable
fn load_config() -> (ApplicationConfig, Option<ConfigError>) {
    if !Path::new(CONFIG_FILE).exists() {
        return (ApplicationConfig::new("Sandbox"), None);
    }
    match ApplicationConfig::load_from_file(CONFIG_FILE) {
        Ok(config) => (config, None),
        Err(e) => (ApplicationConfig::new("Sandbox"), Some(e)),
    }
}

fn main() -> ExitCode {
    let (config, load_error) = load_config();
    let result = game_engine::entry::run(&config, |app| {
        // Logging is only up once the entry point has started
        if let Some(e) = load_error {
            app_warn!("Ignoring {}: {}", CONFIG_FILE, e);
        }
        let layer = ExampleLayer::new(app.render_command())?;
        app.push_layer(Box::new(layer));
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
