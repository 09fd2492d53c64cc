//! ModHub Host: module discovery demo host.
//!
//! Main entry point that wires configuration and logging together and runs
//! one discovery pass over the configured module directory for the sample
//! greeter contract.

use tracing_subscriber::{EnvFilter, fmt};

use greeter_api::GREETER;
use modhub_core::config::AppConfig;
use modhub_core::error::AppError;
use modhub_loader::ModuleLoader;

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config) {
        tracing::error!("Host error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("MODHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Run one discovery pass and report what was found
fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ModHub host v{}", env!("CARGO_PKG_VERSION"));

    if !config.modules.auto_load {
        tracing::info!("Module auto-load disabled, nothing to do");
        return Ok(());
    }

    let loader = ModuleLoader::from_config(&config.modules);

    // SAFETY: the configured module directory is operator-controlled and
    // must contain only trusted module packages built against this host.
    let discovery = unsafe { loader.discover(&GREETER) }?;

    for diagnostic in &discovery.diagnostics {
        tracing::warn!(
            package = %diagnostic.package.display(),
            type_name = diagnostic.type_name.as_deref().unwrap_or("-"),
            "{}",
            diagnostic.message
        );
    }

    for greeter in &discovery.modules {
        tracing::info!(greeter = greeter.name(), "{}", greeter.greet("ModHub"));
    }

    tracing::info!(
        modules = discovery.modules.len(),
        diagnostics = discovery.diagnostics.len(),
        "Discovery complete"
    );

    Ok(())
}
