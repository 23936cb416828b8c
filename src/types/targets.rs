use std::fmt;
use super::constants::{
    MAX_ARITHMETIC_TARGETS, MAX_GEOMETRIC_ATTEMPTS, MAX_MULTI_TARGETS, MIN_GEOMETRIC_ATTEMPTS, MIN_MULTI_TARGETS,
};
use super::ParameterError;

/// Strategy used to pick the assumed number of matching inputs per search attempt
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum SearchMethod {
    /// One attempt assuming exactly one match
    Single,
    /// One attempt assuming a user-supplied number of matches
    Multiple,
    /// Attempts assuming 1, 2, 3, ... matches
    Arithmetic,
    /// Attempts assuming 1, 2, 4, ... matches
    Geometric,
}

impl SearchMethod {
    /// All methods in menu order
    pub const ALL: [SearchMethod; 4] = [
        SearchMethod::Single,
        SearchMethod::Multiple,
        SearchMethod::Arithmetic,
        SearchMethod::Geometric,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SearchMethod::Single => "single",
            SearchMethod::Multiple => "multiple",
            SearchMethod::Arithmetic => "arithmetic",
            SearchMethod::Geometric => "geometric",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|method| method.label() == label)
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered, non-empty list of assumed match counts, one per search attempt.
///
/// Every element is positive. The sequence is handed to a backend as a whole;
/// the backend walks it front to back and stops at the first success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSequence(Vec<u64>);

impl TargetSequence {
    /// Builds a sequence from raw targets, rejecting empty input and zero targets
    pub fn new(targets: Vec<u64>) -> Result<Self, ParameterError> {
        if targets.is_empty() {
            return Err(ParameterError::EmptyTargetSequence);
        }
        if targets.iter().any(|&t| t == 0) {
            return Err(ParameterError::ZeroTarget);
        }
        Ok(Self(targets))
    }

    /// `[1]`
    pub fn single() -> Self {
        Self(vec![1])
    }

    /// `[n]` for `n` in `[2, MAX_MULTI_TARGETS]`
    pub fn multiple(num_targets: u64) -> Result<Self, ParameterError> {
        if num_targets < MIN_MULTI_TARGETS {
            return Err(ParameterError::TooFewTargets(num_targets));
        }
        if num_targets > MAX_MULTI_TARGETS {
            return Err(ParameterError::TooManyTargets { value: num_targets, max: MAX_MULTI_TARGETS });
        }
        Ok(Self(vec![num_targets]))
    }

    /// `[1, 2, ..., max_targets]` for `max_targets` in `[2, MAX_ARITHMETIC_TARGETS]`
    pub fn arithmetic(max_targets: u64) -> Result<Self, ParameterError> {
        if max_targets < MIN_MULTI_TARGETS {
            return Err(ParameterError::TooFewTargets(max_targets));
        }
        if max_targets > MAX_ARITHMETIC_TARGETS {
            return Err(ParameterError::TooManyTargets { value: max_targets, max: MAX_ARITHMETIC_TARGETS });
        }
        Ok(Self((1..=max_targets).collect()))
    }

    /// `[2^0, 2^1, ..., 2^(num_attempts - 1)]` for `num_attempts` in `[2, 31]`
    pub fn geometric(num_attempts: u32) -> Result<Self, ParameterError> {
        if !(MIN_GEOMETRIC_ATTEMPTS..=MAX_GEOMETRIC_ATTEMPTS).contains(&num_attempts) {
            return Err(ParameterError::GeometricAttemptsOutOfRange(num_attempts));
        }
        Ok(Self((0..num_attempts).map(|i| 1u64 << i).collect()))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed sequence
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TargetSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TargetSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "[{}]", items.join(", "))
    }
}
