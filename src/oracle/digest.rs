use std::fmt;
use std::marker::PhantomData;
use num_bigint::BigUint;
use sha2::Digest;
use super::Oracle;

/// How a fixed-output hash pads its message into blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Merkle-Damgard: a 0x80 byte plus a trailing message-length field of the given size
    MerkleDamgard { length_field: usize },
    /// Keccak sponge: at least one padding byte, absorbed at the block (rate) size
    Sponge,
}

/// Any fixed-output hash from the RustCrypto `Digest` family (MD5, SHA-1, SHA-2, SHA-3)
pub struct DigestOracle<D> {
    name: &'static str,
    block_size: usize,
    state_width: u32,
    padding: Padding,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> DigestOracle<D> {
    pub fn new(name: &'static str, block_size: usize, state_width: u32, padding: Padding) -> Self {
        Self {
            name,
            block_size,
            state_width,
            padding,
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for DigestOracle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestOracle")
            .field("name", &self.name)
            .field("block_size", &self.block_size)
            .field("state_width", &self.state_width)
            .field("padding", &self.padding)
            .finish()
    }
}

impl<D: Digest> Oracle for DigestOracle<D> {
    fn name(&self) -> &str {
        self.name
    }

    fn output_width(&self) -> u32 {
        (<D as Digest>::output_size() * 8) as u32
    }

    fn evaluate(&self, message: &[u8]) -> BigUint {
        BigUint::from_bytes_be(&D::digest(message))
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn state_width(&self) -> u32 {
        self.state_width
    }

    fn compression_calls(&self, message_len: usize) -> u64 {
        let padded = match self.padding {
            Padding::MerkleDamgard { length_field } => message_len + 1 + length_field,
            Padding::Sponge => message_len + 1,
        };
        padded.div_ceil(self.block_size) as u64
    }
}
