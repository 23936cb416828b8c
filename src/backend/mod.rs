use std::f64::consts::PI;
use async_trait::async_trait;
use thiserror::Error;
use crate::catalog::Entrypoint;

pub mod estimator;
pub mod full_simulator;

pub use estimator::{MetricRow, ResourceEstimator, ResourceReport};
pub use full_simulator::FullSimulator;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Input width {width} exceeds the simulator limit of {max} bits")]
    InputTooWide { width: u32, max: u32 },
    #[error("Simulation needs {required} bytes but only {available} bytes are available")]
    InsufficientMemory { required: u64, available: u64 },
    #[error("Backend task failed: {0}")]
    TaskFailed(String),
}

/// An engine that can run an [`Entrypoint`].
///
/// Implementations walk the entrypoint's target sequence themselves and
/// report through their own `Output` type.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    type Output: Send;

    /// Backend name for logs and progress messages
    fn name(&self) -> &'static str;

    /// Run the search described by `entrypoint`
    async fn execute(&self, entrypoint: Entrypoint) -> Result<Self::Output, BackendError>;
}

/// Number of amplitude-amplification iterations that maximise the success
/// probability when `targets` of the `search_space` inputs are marked.
///
/// Uses `round(pi / (4 * theta) - 1/2)` with `theta = asin(sqrt(targets / search_space))`;
/// assumed counts at or above the search space size need no iterations.
pub fn grover_iterations(search_space: u64, targets: u64) -> u64 {
    let ratio = (targets as f64 / search_space as f64).min(1.0);
    let theta = ratio.sqrt().asin();
    let iterations = (PI / (4.0 * theta) - 0.5).round();
    if iterations.is_finite() && iterations > 0.0 {
        iterations as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grover_iterations_single_target() {
        assert_eq!(grover_iterations(256, 1), 12);
        assert_eq!(grover_iterations(1 << 10, 1), 25);
        assert_eq!(grover_iterations(4, 1), 1);
    }

    #[test]
    fn test_grover_iterations_shrink_with_more_targets() {
        let one = grover_iterations(1 << 16, 1);
        let four = grover_iterations(1 << 16, 4);
        assert!(four < one);
        assert_eq!(grover_iterations(1 << 16, 4), 100);
    }

    #[test]
    fn test_grover_iterations_saturate() {
        assert_eq!(grover_iterations(2, 2), 0);
        assert_eq!(grover_iterations(2, 1 << 20), 0);
    }
}
