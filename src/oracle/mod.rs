//! Classical oracles for the supported hash and checksum functions.
//! An oracle maps an encoded search input to its digest, read as a big-endian integer.

use std::fmt;
use num_bigint::BigUint;

pub mod crc;
pub mod digest;
pub mod keccak;

pub use self::crc::CrcOracle;
pub use self::digest::{DigestOracle, Padding};
pub use self::keccak::XofOracle;

/// A hash or checksum function viewed as a search oracle
pub trait Oracle: Send + Sync + fmt::Debug {
    /// Operation name as shown in the catalog
    fn name(&self) -> &str;

    /// Digest size in bits
    fn output_width(&self) -> u32;

    /// Computes the digest of `message` as a big-endian integer of `output_width` bits
    fn evaluate(&self, message: &[u8]) -> BigUint;

    /// Bytes consumed per compression (or table) step
    fn block_size(&self) -> usize;

    /// Size of the function's internal chaining state, in bits
    fn state_width(&self) -> u32;

    /// Number of compression-function invocations needed to digest `message_len` bytes
    fn compression_calls(&self, message_len: usize) -> u64;

    /// Evaluates the oracle on a search input of `input_width` bits and compares
    /// the digest with `target`
    fn matches(&self, input: u64, input_width: u32, target: &BigUint) -> bool {
        self.evaluate(&encode_input(input, input_width)) == *target
    }
}

/// Number of bytes used to encode an input of `input_width` bits
pub fn encoded_len(input_width: u32) -> usize {
    input_width.div_ceil(8) as usize
}

/// Encodes `input` as `ceil(input_width / 8)` big-endian bytes
pub fn encode_input(input: u64, input_width: u32) -> Vec<u8> {
    let len = encoded_len(input_width);
    input.to_be_bytes()[8 - len..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_input_uses_minimal_big_endian_bytes() {
        assert_eq!(encode_input(0xAB, 8), vec![0xAB]);
        assert_eq!(encode_input(0x3FF, 10), vec![0x03, 0xFF]);
        assert_eq!(encode_input(1, 1), vec![0x01]);
        assert_eq!(encode_input(0x0102_0304_0506_0708, 62).len(), 8);
    }

    #[test]
    fn test_encoded_len_rounds_up() {
        assert_eq!(encoded_len(1), 1);
        assert_eq!(encoded_len(8), 1);
        assert_eq!(encoded_len(9), 2);
        assert_eq!(encoded_len(62), 8);
    }
}
