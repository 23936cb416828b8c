use std::env;
use std::path::PathBuf;
use anyhow::Context;
use chrono::Local;
use driver::{Config, SearchDriver, SearchInterface};
use quicc::utils::logging;

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Loads the configuration, sets up logging and runs the interactive console
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os("QUICC_CONFIG").map(PathBuf::from));
    let config = Config::load_or_default(config_path.as_deref())
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    setup_logging(&config);
    log_configuration(&config);

    let mut driver = SearchDriver::new(SearchInterface::stdio(), config);
    driver.run().await.context("QuICC console terminated")?;
    Ok(())
}

/// Environment variables take precedence over the `[logging]` section
fn setup_logging(config: &Config) {
    if env::var_os("QUICC_LOGGING").is_some() {
        logging::init_logging();
        return;
    }
    let log_file = env::var_os("QUICC_LOG_FILE")
        .map(PathBuf::from)
        .or_else(|| config.logging.log_file.clone());
    logging::init_logging_with(config.logging.enabled, log_file.as_deref());
}

fn log_configuration(config: &Config) {
    logging::log("DRIVER", "=== QuICC Configuration ===");
    logging::log("DRIVER", &format!("Start Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    logging::log("DRIVER", &format!("Simulator Max Input Width: {} bits", config.simulator.max_input_width));
    match config.simulator.seed {
        Some(seed) => logging::log("DRIVER", &format!("Simulator Seed: {}", seed)),
        None => logging::log("DRIVER", "Simulator Seed: random"),
    }
    logging::log("DRIVER", &format!("Memory Check: {}", config.simulator.check_memory));
    if let Some(path) = logging::log_file() {
        logging::log("DRIVER", &format!("Log File: {}", path.display()));
    }
    logging::log("DRIVER", "===========================");
}
