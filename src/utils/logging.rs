use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use once_cell::sync::OnceCell;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);
static LOG_DESTINATION: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Initializes logging based on environment variables:
/// - QUICC_LOGGING=true enables logging, QUICC_LOGGING=false or unset disables it.
/// - QUICC_LOG_FILE=<path> sends log lines to that file (appending) instead of stderr.
///
/// To enable logging in tests, run: QUICC_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    let enabled = match env::var("QUICC_LOGGING") {
        Ok(value) => match value.as_str() {
            "true" => true,
            "false" => false,
            _ => panic!("\nError: QUICC_LOGGING environment variable must be 'true' or 'false'\n\nTo run the program, use one of:\n  QUICC_LOGGING=true cargo run\n  QUICC_LOGGING=false cargo run\n"),
        },
        Err(_) => false,
    };
    let log_file = env::var("QUICC_LOG_FILE").ok().map(PathBuf::from);
    init_logging_with(enabled, log_file.as_deref());
}

/// Initializes logging explicitly. Only the first call installs a subscriber;
/// later calls just toggle whether `log` emits anything.
pub fn init_logging_with(enabled: bool, log_file: Option<&Path>) {
    ENABLE_LOGGING.store(enabled, Ordering::SeqCst);
    if !enabled {
        return;
    }
    LOG_DESTINATION.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false);
        match log_file.map(|path| OpenOptions::new().create(true).append(true).open(path)) {
            Some(Ok(file)) => {
                let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
                log_file.map(Path::to_path_buf)
            }
            Some(Err(e)) => {
                eprintln!("Failed to open log file, logging to stderr: {}", e);
                let _ = builder.with_writer(std::io::stderr).try_init();
                None
            }
            None => {
                let _ = builder.with_writer(std::io::stderr).try_init();
                None
            }
        }
    });
}

pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

/// File that log lines go to, if logging was initialized with one
pub fn log_file() -> Option<&'static Path> {
    LOG_DESTINATION.get().and_then(|dest| dest.as_deref())
}

pub fn log(prefix: &str, message: &str) {
    if is_enabled() {
        tracing::info!("  [{}]   {}", prefix, message);
    }
}
