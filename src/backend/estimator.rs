//! Resource estimation backend.
//! Prices an amplitude-amplification search over the whole target sequence without
//! evaluating the oracle, and summarises the cost as a `Metric / Sum / Max` table.

use async_trait::async_trait;
use crate::catalog::Entrypoint;
use crate::oracle::encoded_len;
use crate::utils::logging;
use super::{grover_iterations, BackendError, ExecutionBackend};

// ------------------------------------------------------------------------------------------------
// Report
// ------------------------------------------------------------------------------------------------

/// One line of the resource report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub metric: &'static str,
    /// Total over all attempts
    pub sum: u128,
    /// Largest single-attempt value
    pub max: u128,
}

/// Tabular cost report produced by [`ResourceEstimator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReport {
    rows: Vec<MetricRow>,
}

impl ResourceReport {
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    pub fn metric(&self, name: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|row| row.metric == name)
    }

    /// Tab-separated rendering with a `Metric\tSum\tMax` header
    pub fn to_tsv(&self) -> String {
        let mut out = String::from("Metric\tSum\tMax");
        for row in &self.rows {
            out.push_str(&format!("\n{}\t{}\t{}", row.metric, row.sum, row.max));
        }
        out
    }

    fn record(&mut self, metric: &'static str, value: u128) {
        match self.rows.iter_mut().find(|row| row.metric == metric) {
            Some(row) => {
                row.sum += value;
                row.max = row.max.max(value);
            }
            None => self.rows.push(MetricRow { metric, sum: value, max: value }),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Backend
// ------------------------------------------------------------------------------------------------

/// Cost model for amplitude amplification; never performs the search
#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceEstimator;

impl ResourceEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Builds the report for `entrypoint` synchronously
    pub fn estimate(entrypoint: &Entrypoint) -> ResourceReport {
        let params = entrypoint.parameters();
        let oracle = entrypoint.oracle();
        let input_width = params.input_width();
        let search_space = params.search_space_size();
        let compression_calls = u128::from(oracle.compression_calls(encoded_len(input_width)));
        // Search register, oracle workspace, digest register and the phase qubit
        let qubits = u128::from(input_width)
            + u128::from(oracle.state_width())
            + u128::from(params.output_width())
            + 1;

        let mut report = ResourceReport { rows: Vec::new() };
        for &target in params.targets() {
            let iterations = u128::from(grover_iterations(search_space, target));
            tracing::debug!(assumed = target, iterations = iterations as u64, "attempt priced");
            // Each iteration computes and uncomputes the oracle
            let evaluations = 2 * iterations;
            report.record("Attempts", 1);
            report.record("GroverIterations", iterations);
            report.record("OracleEvaluations", evaluations);
            report.record("OracleCompressionCalls", evaluations * compression_calls);
            report.record("DiffusionOperations", iterations);
            report.record("Measurements", u128::from(input_width));
            report.record("QubitCount", qubits);
        }
        report
    }
}

#[async_trait]
impl ExecutionBackend for ResourceEstimator {
    type Output = ResourceReport;

    fn name(&self) -> &'static str {
        "resource estimator"
    }

    async fn execute(&self, entrypoint: Entrypoint) -> Result<ResourceReport, BackendError> {
        logging::log("ESTIMATOR", &format!(
            "Estimating {} over {} bits with targets {}",
            entrypoint.parameters().operation(),
            entrypoint.parameters().input_width(),
            entrypoint.parameters().targets()
        ));
        let report = tokio::task::spawn_blocking(move || Self::estimate(&entrypoint))
            .await
            .map_err(|e| BackendError::TaskFailed(e.to_string()))?;
        logging::log("ESTIMATOR", &format!("Report has {} metrics", report.rows().len()));
        Ok(report)
    }
}
