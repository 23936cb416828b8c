use std::fmt;
use std::marker::PhantomData;
use num_bigint::BigUint;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use super::Oracle;
use crate::types::max_value_for_width;

/// Keccak permutation width in bits
pub const KECCAK_STATE_WIDTH: u32 = 1600;

/// Extendable-output function (SHAKE128, SHAKE256) truncated to a caller-chosen width
pub struct XofOracle<X> {
    name: &'static str,
    rate: usize,
    output_width: u32,
    _xof: PhantomData<fn() -> X>,
}

impl<X> XofOracle<X> {
    pub fn new(name: &'static str, rate: usize, output_width: u32) -> Self {
        Self {
            name,
            rate,
            output_width,
            _xof: PhantomData,
        }
    }

    fn output_bytes(&self) -> usize {
        self.output_width.div_ceil(8) as usize
    }
}

impl<X> fmt::Debug for XofOracle<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XofOracle")
            .field("name", &self.name)
            .field("rate", &self.rate)
            .field("output_width", &self.output_width)
            .finish()
    }
}

impl<X: Default + Update + ExtendableOutput> Oracle for XofOracle<X> {
    fn name(&self) -> &str {
        self.name
    }

    fn output_width(&self) -> u32 {
        self.output_width
    }

    /// Squeezes `ceil(w / 8)` bytes and keeps the low `w` bits
    fn evaluate(&self, message: &[u8]) -> BigUint {
        let mut hasher = X::default();
        hasher.update(message);
        let mut reader = hasher.finalize_xof();
        let mut squeezed = vec![0u8; self.output_bytes()];
        reader.read(&mut squeezed);
        BigUint::from_bytes_be(&squeezed) & max_value_for_width(self.output_width)
    }

    fn block_size(&self) -> usize {
        self.rate
    }

    fn state_width(&self) -> u32 {
        KECCAK_STATE_WIDTH
    }

    fn compression_calls(&self, message_len: usize) -> u64 {
        let absorb = (message_len + 1).div_ceil(self.rate);
        let extra_squeezes = self.output_bytes().div_ceil(self.rate).saturating_sub(1);
        (absorb + extra_squeezes) as u64
    }
}
