use std::collections::HashMap;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use thiserror::Error;
use crate::types::{ParameterError, SearchParameters, TargetSequence};

pub mod entrypoint;
pub mod registry;

pub use entrypoint::Entrypoint;
pub use registry::{OperationDescriptor, OutputWidth};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Operation {name} has a fixed output width of {expected} bits, got {actual}")]
    WidthMismatch { name: String, expected: u32, actual: u32 },
    #[error("Invalid search parameters: {0}")]
    Parameters(#[from] ParameterError),
}

/// Lookup structure over the operation registry
pub struct Catalog {
    operations: Vec<OperationDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(operations: Vec<OperationDescriptor>) -> Self {
        let index = operations
            .iter()
            .enumerate()
            .map(|(i, op)| (op.name, i))
            .collect();
        Self { operations, index }
    }

    /// Catalog of every supported operation
    pub fn standard() -> Self {
        Self::new(registry::standard_operations())
    }

    pub fn get(&self, name: &str) -> Result<&OperationDescriptor, CatalogError> {
        self.index
            .get(name)
            .map(|&i| &self.operations[i])
            .ok_or_else(|| CatalogError::UnknownOperation(name.to_string()))
    }

    /// Output width of `name`; `Dynamic` means the caller must ask the operator
    pub fn output_width(&self, name: &str) -> Result<OutputWidth, CatalogError> {
        self.get(name).map(|op| op.output_width)
    }

    /// Every operation name, usable with the resource estimator
    pub fn analysis_operations(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.name).collect()
    }

    /// Operation names small enough for the full simulator
    pub fn simulation_operations(&self) -> Vec<&'static str> {
        self.operations
            .iter()
            .filter(|op| op.simulatable)
            .map(|op| op.name)
            .collect()
    }

    /// Binds the named operation's oracle to a validated parameter bundle
    pub fn build_entrypoint(
        &self,
        name: &str,
        targets: TargetSequence,
        input_width: u32,
        output_width: u32,
        output_to_match: BigUint,
    ) -> Result<Entrypoint, CatalogError> {
        let descriptor = self.get(name)?;
        if let OutputWidth::Fixed(expected) = descriptor.output_width {
            if expected != output_width {
                return Err(CatalogError::WidthMismatch {
                    name: name.to_string(),
                    expected,
                    actual: output_width,
                });
            }
        }
        let parameters = SearchParameters::new(
            descriptor.name,
            targets,
            input_width,
            output_width,
            output_to_match,
        )?;
        let oracle = (descriptor.build_oracle)(output_width);
        Ok(Entrypoint::new(oracle, parameters))
    }
}

lazy_static! {
    static ref CATALOG: Catalog = Catalog::standard();
}

/// Shared catalog instance
pub fn get_catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_widths() {
        let catalog = get_catalog();
        assert_eq!(catalog.output_width("CRC-8").unwrap(), OutputWidth::Fixed(8));
        assert_eq!(catalog.output_width("SHA-512/224").unwrap(), OutputWidth::Fixed(224));
        assert_eq!(catalog.output_width("SHAKE256").unwrap(), OutputWidth::Dynamic);
    }

    #[test]
    fn test_unknown_operation_fails() {
        let catalog = get_catalog();
        assert!(matches!(catalog.output_width("BLAKE3"), Err(CatalogError::UnknownOperation(_))));
        let result = catalog.build_entrypoint("BLAKE3", TargetSequence::single(), 8, 8, BigUint::from(1u32));
        assert!(matches!(result, Err(CatalogError::UnknownOperation(_))));
    }

    #[test]
    fn test_menu_order_and_subset() {
        let catalog = get_catalog();
        let all = catalog.analysis_operations();
        assert_eq!(all.len(), 17);
        assert_eq!(all.first(), Some(&"CRC-8"));
        assert_eq!(all.last(), Some(&"SHAKE256"));
        assert_eq!(catalog.simulation_operations(), vec!["CRC-8", "CRC-16"]);
    }

    #[test]
    fn test_entrypoint_rejects_mismatched_width() {
        let result = get_catalog().build_entrypoint("CRC-8", TargetSequence::single(), 8, 16, BigUint::from(1u32));
        assert!(matches!(result, Err(CatalogError::WidthMismatch { expected: 8, actual: 16, .. })));
    }

    #[test]
    fn test_entrypoint_rejects_oversized_output() {
        let result = get_catalog().build_entrypoint("CRC-8", TargetSequence::single(), 8, 8, BigUint::from(0x100u32));
        assert!(matches!(result, Err(CatalogError::Parameters(ParameterError::OutputTooWide { .. }))));
    }

    #[test]
    fn test_dynamic_width_reaches_oracle() {
        let entrypoint = get_catalog()
            .build_entrypoint("SHAKE128", TargetSequence::single(), 16, 20, BigUint::from(0xFFFFFu32))
            .unwrap();
        assert_eq!(entrypoint.oracle().output_width(), 20);
        assert_eq!(entrypoint.parameters().output_width(), 20);
    }
}
