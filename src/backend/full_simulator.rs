//! Full execution backend.
//! Simulates amplitude amplification on a state vector over every input of the search space,
//! measures, and verifies the measured input classically against the oracle.

use async_trait::async_trait;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sysinfo::System;
use crate::catalog::Entrypoint;
use crate::oracle::Oracle;
use crate::types::SearchOutcome;
use crate::utils::logging;
use super::{grover_iterations, BackendError, ExecutionBackend};

/// Default cap on the input width accepted by the simulator
pub const DEFAULT_MAX_SIMULATED_WIDTH: u32 = 20;

// Amplitude (f64) plus the marked flag, per basis state
const BYTES_PER_STATE: u64 = 9;

/// State-vector simulator for the search
#[derive(Debug, Clone)]
pub struct FullSimulator {
    max_input_width: u32,
    seed: Option<u64>,
    check_memory: bool,
}

impl Default for FullSimulator {
    fn default() -> Self {
        Self {
            max_input_width: DEFAULT_MAX_SIMULATED_WIDTH,
            seed: None,
            check_memory: true,
        }
    }
}

impl FullSimulator {
    pub fn new(max_input_width: u32, seed: Option<u64>) -> Self {
        Self {
            max_input_width,
            seed,
            check_memory: true,
        }
    }

    /// Skips the available-memory check
    pub fn without_memory_check(mut self) -> Self {
        self.check_memory = false;
        self
    }

    pub fn max_input_width(&self) -> u32 {
        self.max_input_width
    }

    fn ensure_capacity(&self, input_width: u32) -> Result<(), BackendError> {
        if input_width > self.max_input_width {
            return Err(BackendError::InputTooWide {
                width: input_width,
                max: self.max_input_width,
            });
        }
        // A state vector whose size does not fit in u64 is refused even without the memory check
        let required = match state_vector_bytes(input_width) {
            Some(required) => required,
            None => {
                return Err(BackendError::InsufficientMemory {
                    required: u64::MAX,
                    available: available_memory(),
                })
            }
        };
        if self.check_memory {
            let available = available_memory();
            if available > 0 && required > available {
                return Err(BackendError::InsufficientMemory { required, available });
            }
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl ExecutionBackend for FullSimulator {
    type Output = SearchOutcome;

    fn name(&self) -> &'static str {
        "full simulator"
    }

    async fn execute(&self, entrypoint: Entrypoint) -> Result<SearchOutcome, BackendError> {
        self.ensure_capacity(entrypoint.parameters().input_width())?;
        let mut rng = self.rng();
        tokio::task::spawn_blocking(move || simulate(&entrypoint, &mut rng))
            .await
            .map_err(|e| BackendError::TaskFailed(e.to_string()))
    }
}

/// Bytes needed to hold the state of an `input_width`-bit search, if representable
fn state_vector_bytes(input_width: u32) -> Option<u64> {
    1u64.checked_shl(input_width)?.checked_mul(BYTES_PER_STATE)
}

fn available_memory() -> u64 {
    let mut system = System::new();
    system.refresh_memory();
    system.available_memory()
}

// ------------------------------------------------------------------------------------------------
// Simulation
// ------------------------------------------------------------------------------------------------

/// Walks the target sequence, one amplified measurement per target, until a verified match
pub fn simulate<R: Rng>(entrypoint: &Entrypoint, rng: &mut R) -> SearchOutcome {
    let params = entrypoint.parameters();
    let oracle = entrypoint.oracle().as_ref();
    let input_width = params.input_width();
    let target = params.output_to_match();

    let marked = mark_solutions(oracle, input_width, target);
    let solutions = marked.iter().filter(|&&m| m).count();
    tracing::debug!(solutions, inputs = marked.len(), "oracle diagonal built");
    logging::log("SIMULATOR", &format!(
        "{} has {} preimage(s) of {:X} among {} inputs",
        params.operation(),
        solutions,
        target,
        marked.len()
    ));

    for (attempt, &assumed) in params.targets().iter().enumerate() {
        let iterations = grover_iterations(params.search_space_size(), assumed);
        let measured = amplify_and_measure(&marked, iterations, rng);
        tracing::debug!(attempt, assumed, iterations, measured, "measured");
        if oracle.matches(measured, input_width, target) {
            logging::log("SIMULATOR", &format!(
                "Attempt {} (assumed {} targets, {} iterations) measured {:X}: match",
                attempt + 1, assumed, iterations, measured
            ));
            return SearchOutcome::Found(measured);
        }
        logging::log("SIMULATOR", &format!(
            "Attempt {} (assumed {} targets, {} iterations) measured {:X}: no match",
            attempt + 1, assumed, iterations, measured
        ));
    }
    SearchOutcome::Exhausted
}

/// Phase-oracle diagonal: which inputs digest to `target`
fn mark_solutions(oracle: &dyn Oracle, input_width: u32, target: &BigUint) -> Vec<bool> {
    (0..1u64 << input_width)
        .map(|input| oracle.matches(input, input_width, target))
        .collect()
}

/// Prepares the uniform superposition, applies `iterations` rounds of
/// (oracle phase flip, inversion about the mean) and samples one basis state
fn amplify_and_measure<R: Rng>(marked: &[bool], iterations: u64, rng: &mut R) -> u64 {
    let size = marked.len() as f64;
    let mut state = vec![1.0 / size.sqrt(); marked.len()];

    for _ in 0..iterations {
        for (amplitude, &is_marked) in state.iter_mut().zip(marked) {
            if is_marked {
                *amplitude = -*amplitude;
            }
        }
        let mean = state.iter().sum::<f64>() / size;
        for amplitude in state.iter_mut() {
            *amplitude = 2.0 * mean - *amplitude;
        }
    }

    let mut threshold: f64 = rng.gen();
    for (index, amplitude) in state.iter().enumerate() {
        threshold -= amplitude * amplitude;
        if threshold < 0.0 {
            return index as u64;
        }
    }
    // Rounding left a sliver of probability unassigned
    (state.len() - 1) as u64
}
