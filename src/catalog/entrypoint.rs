use std::sync::Arc;
use crate::backend::{BackendError, ExecutionBackend};
use crate::oracle::Oracle;
use crate::types::SearchParameters;

/// A runnable preimage search: one oracle bound to one parameter bundle.
///
/// The same entrypoint can be handed to any [`ExecutionBackend`]; the kind of
/// result depends on the backend (a cost report or a search outcome).
#[derive(Debug, Clone)]
pub struct Entrypoint {
    oracle: Arc<dyn Oracle>,
    parameters: SearchParameters,
}

impl Entrypoint {
    pub fn new(oracle: Arc<dyn Oracle>, parameters: SearchParameters) -> Self {
        Self { oracle, parameters }
    }

    pub fn oracle(&self) -> &Arc<dyn Oracle> {
        &self.oracle
    }

    pub fn parameters(&self) -> &SearchParameters {
        &self.parameters
    }

    /// Runs the search on `backend`. The whole target sequence is handed over in
    /// one call; retrying across attempts is the backend's job.
    pub async fn run<B>(&self, backend: &B) -> Result<B::Output, BackendError>
    where
        B: ExecutionBackend + ?Sized,
    {
        backend.execute(self.clone()).await
    }
}
