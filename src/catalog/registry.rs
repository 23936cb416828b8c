//! Central registry for all operations offered by the front end.
//! Maps operation names to their output width, simulation eligibility and oracle constructor,
//! so that menus, width lookup and entrypoint dispatch share one source of truth.

use std::sync::Arc;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

use crate::oracle::{CrcOracle, DigestOracle, Oracle, Padding, XofOracle};
use crate::oracle::keccak::KECCAK_STATE_WIDTH;

/// Output width of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputWidth {
    /// Width fixed by the function
    Fixed(u32),
    /// Width chosen by the operator at selection time
    Dynamic,
}

/// Registry entry for one operation
pub struct OperationDescriptor {
    pub name: &'static str,
    pub output_width: OutputWidth,
    /// Whether the operation is small enough for the full simulator
    pub simulatable: bool,
    /// Builds the oracle for the resolved output width
    pub build_oracle: fn(u32) -> Arc<dyn Oracle>,
}

const MD_64: Padding = Padding::MerkleDamgard { length_field: 8 };
const MD_128: Padding = Padding::MerkleDamgard { length_field: 16 };

/// All operations, in menu order
pub fn standard_operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor {
            name: "CRC-8",
            output_width: OutputWidth::Fixed(8),
            simulatable: true,
            build_oracle: |_| Arc::new(CrcOracle::Crc8),
        },
        OperationDescriptor {
            name: "CRC-16",
            output_width: OutputWidth::Fixed(16),
            simulatable: true,
            build_oracle: |_| Arc::new(CrcOracle::Crc16),
        },
        OperationDescriptor {
            name: "CRC-32",
            output_width: OutputWidth::Fixed(32),
            simulatable: false,
            build_oracle: |_| Arc::new(CrcOracle::Crc32),
        },
        OperationDescriptor {
            name: "MD5",
            output_width: OutputWidth::Fixed(128),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Md5>::new("MD5", 64, 128, MD_64)),
        },
        OperationDescriptor {
            name: "SHA-1",
            output_width: OutputWidth::Fixed(160),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha1>::new("SHA-1", 64, 160, MD_64)),
        },
        OperationDescriptor {
            name: "SHA-224",
            output_width: OutputWidth::Fixed(224),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha224>::new("SHA-224", 64, 256, MD_64)),
        },
        OperationDescriptor {
            name: "SHA-256",
            output_width: OutputWidth::Fixed(256),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha256>::new("SHA-256", 64, 256, MD_64)),
        },
        OperationDescriptor {
            name: "SHA-384",
            output_width: OutputWidth::Fixed(384),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha384>::new("SHA-384", 128, 512, MD_128)),
        },
        OperationDescriptor {
            name: "SHA-512",
            output_width: OutputWidth::Fixed(512),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha512>::new("SHA-512", 128, 512, MD_128)),
        },
        OperationDescriptor {
            name: "SHA-512/224",
            output_width: OutputWidth::Fixed(224),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha512_224>::new("SHA-512/224", 128, 512, MD_128)),
        },
        OperationDescriptor {
            name: "SHA-512/256",
            output_width: OutputWidth::Fixed(256),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha512_256>::new("SHA-512/256", 128, 512, MD_128)),
        },
        OperationDescriptor {
            name: "SHA3-224",
            output_width: OutputWidth::Fixed(224),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha3_224>::new("SHA3-224", 144, KECCAK_STATE_WIDTH, Padding::Sponge)),
        },
        OperationDescriptor {
            name: "SHA3-256",
            output_width: OutputWidth::Fixed(256),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha3_256>::new("SHA3-256", 136, KECCAK_STATE_WIDTH, Padding::Sponge)),
        },
        OperationDescriptor {
            name: "SHA3-384",
            output_width: OutputWidth::Fixed(384),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha3_384>::new("SHA3-384", 104, KECCAK_STATE_WIDTH, Padding::Sponge)),
        },
        OperationDescriptor {
            name: "SHA3-512",
            output_width: OutputWidth::Fixed(512),
            simulatable: false,
            build_oracle: |_| Arc::new(DigestOracle::<Sha3_512>::new("SHA3-512", 72, KECCAK_STATE_WIDTH, Padding::Sponge)),
        },
        OperationDescriptor {
            name: "SHAKE128",
            output_width: OutputWidth::Dynamic,
            simulatable: false,
            build_oracle: |width| Arc::new(XofOracle::<Shake128>::new("SHAKE128", 168, width)),
        },
        OperationDescriptor {
            name: "SHAKE256",
            output_width: OutputWidth::Dynamic,
            simulatable: false,
            build_oracle: |width| Arc::new(XofOracle::<Shake256>::new("SHAKE256", 136, width)),
        },
    ]
}
