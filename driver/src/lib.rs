pub mod config;
pub mod interface;
pub mod report;
pub mod run_search;
pub mod search_method;

pub use config::{Config, ConfigError};
pub use interface::{MainMenuOption, SearchInterface};
pub use run_search::{DriverError, RunMode, SearchDriver};
