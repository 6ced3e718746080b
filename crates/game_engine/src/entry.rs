//! Process entry point for client applications

use crate::application::Application;
use crate::core::config::ApplicationConfig;
use crate::error::EngineResult;
use crate::foundation::logging;
use crate::{engine_error, engine_info, engine_warn};

/// Initialize logging, build the application, let `setup` push layers, run
///
/// Errors are logged before being returned, so `main` only has to map them
/// to an exit code.
pub fn run<F>(config: &ApplicationConfig, setup: F) -> EngineResult<()>
where
    F: FnOnce(&mut Application) -> EngineResult<()>,
{
    if let Err(e) = logging::init(&config.log_level) {
        engine_warn!("Logger already initialized: {}", e);
    }
    engine_info!("Starting '{}'", config.name);

    let result = Application::new(config).and_then(|mut app| {
        setup(&mut app)?;
        app.run()
    });

    match &result {
        Ok(()) => engine_info!("'{}' exited cleanly", config.name),
        Err(e) => engine_error!("'{}' failed: {}", config.name, e),
    }
    result
}
