pub mod types;
pub mod oracle;
pub mod catalog;
pub mod backend;
pub mod utils;

pub use catalog::{Catalog, Entrypoint};
pub use backend::{ExecutionBackend, FullSimulator, ResourceEstimator};
pub use types::{SearchMethod, SearchOutcome, SearchParameters, TargetSequence};
