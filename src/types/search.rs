use std::fmt;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;
use regex::Regex;
use super::constants::{MAX_INPUT_WIDTH, MIN_INPUT_WIDTH};
use super::{ParameterError, TargetSequence};

lazy_static! {
    // Hex digits only: no sign, no `0x` prefix, no separators
    static ref HEX_DIGITS: Regex = Regex::new(r"^[0-9a-fA-F]*$").unwrap();
}

/// Largest value representable in `width` bits, i.e. `2^width - 1`
pub fn max_value_for_width(width: u32) -> BigUint {
    (BigUint::one() << width) - BigUint::one()
}

/// Parses operator-supplied hex text into a non-negative integer.
///
/// A `0` digit is prepended to the raw text, so an empty string parses as zero.
/// Returns `None` for anything that is not plain hex digits.
pub fn parse_hex_digest(text: &str) -> Option<BigUint> {
    if !HEX_DIGITS.is_match(text) {
        return None;
    }
    let padded = format!("0{}", text);
    BigUint::parse_bytes(padded.as_bytes(), 16)
}

/// Result of a full search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An input whose digest matches the requested output
    Found(u64),
    /// Every attempt of the target sequence failed
    Exhausted,
}

impl SearchOutcome {
    pub fn found(&self) -> Option<u64> {
        match self {
            SearchOutcome::Found(value) => Some(*value),
            SearchOutcome::Exhausted => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(value) => write!(f, "Found({:X})", value),
            SearchOutcome::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// Immutable bundle describing one preimage search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    operation: String,
    targets: TargetSequence,
    input_width: u32,
    output_width: u32,
    output_to_match: BigUint,
}

impl SearchParameters {
    /// Creates a parameter bundle, checking the input width range and that
    /// `output_to_match` fits in `output_width` bits
    pub fn new(
        operation: impl Into<String>,
        targets: TargetSequence,
        input_width: u32,
        output_width: u32,
        output_to_match: BigUint,
    ) -> Result<Self, ParameterError> {
        if !(MIN_INPUT_WIDTH..=MAX_INPUT_WIDTH).contains(&input_width) {
            return Err(ParameterError::InputWidthOutOfRange(input_width));
        }
        if output_width == 0 {
            return Err(ParameterError::ZeroOutputWidth);
        }
        if output_to_match.bits() > u64::from(output_width) {
            return Err(ParameterError::OutputTooWide {
                value: format!("{:X}", output_to_match),
                width: output_width,
            });
        }
        Ok(Self {
            operation: operation.into(),
            targets,
            input_width,
            output_width,
            output_to_match,
        })
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn targets(&self) -> &TargetSequence {
        &self.targets
    }

    pub fn input_width(&self) -> u32 {
        self.input_width
    }

    pub fn output_width(&self) -> u32 {
        self.output_width
    }

    pub fn output_to_match(&self) -> &BigUint {
        &self.output_to_match
    }

    /// Number of candidate inputs, `2^input_width`
    pub fn search_space_size(&self) -> u64 {
        1u64 << self.input_width
    }
}
