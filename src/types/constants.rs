/// Smallest accepted size of the search space, in bits
pub const MIN_INPUT_WIDTH: u32 = 1;

/// Largest accepted size of the search space, in bits (must fit a signed 64-bit counter)
pub const MAX_INPUT_WIDTH: u32 = 62;

/// Smallest target count accepted by the `multiple` and `arithmetic` methods
pub const MIN_MULTI_TARGETS: u64 = 2;

/// Largest target count accepted by the `multiple` method (a signed 32-bit count)
pub const MAX_MULTI_TARGETS: u64 = i32::MAX as u64;

/// Largest target count accepted by the `arithmetic` method; one attempt is stored per target
pub const MAX_ARITHMETIC_TARGETS: u64 = 1 << 20;

/// Smallest number of attempts for the `geometric` method
pub const MIN_GEOMETRIC_ATTEMPTS: u32 = 2;

/// Largest number of attempts for the `geometric` method (last target is 2^30)
pub const MAX_GEOMETRIC_ATTEMPTS: u32 = 31;

/// Bounds for the user-supplied output length of extendable-output functions
pub const MIN_XOF_OUTPUT_WIDTH: u32 = 1;
pub const MAX_XOF_OUTPUT_WIDTH: u32 = 8192;
