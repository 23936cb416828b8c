use ::crc::{Crc, CRC_16_ARC, CRC_32_ISO_HDLC, CRC_8_SMBUS};
use num_bigint::BigUint;
use super::Oracle;

const CRC_8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);
const CRC_16: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);
const CRC_32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Cyclic redundancy checks (CRC-8/SMBUS, CRC-16/ARC, CRC-32/ISO-HDLC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrcOracle {
    Crc8,
    Crc16,
    Crc32,
}

impl Oracle for CrcOracle {
    fn name(&self) -> &str {
        match self {
            CrcOracle::Crc8 => "CRC-8",
            CrcOracle::Crc16 => "CRC-16",
            CrcOracle::Crc32 => "CRC-32",
        }
    }

    fn output_width(&self) -> u32 {
        match self {
            CrcOracle::Crc8 => 8,
            CrcOracle::Crc16 => 16,
            CrcOracle::Crc32 => 32,
        }
    }

    fn evaluate(&self, message: &[u8]) -> BigUint {
        match self {
            CrcOracle::Crc8 => BigUint::from(CRC_8.checksum(message)),
            CrcOracle::Crc16 => BigUint::from(CRC_16.checksum(message)),
            CrcOracle::Crc32 => BigUint::from(CRC_32.checksum(message)),
        }
    }

    fn block_size(&self) -> usize {
        1
    }

    fn state_width(&self) -> u32 {
        self.output_width()
    }

    fn compression_calls(&self, message_len: usize) -> u64 {
        message_len as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Standard check values over the ASCII string "123456789"
    #[test]
    fn test_check_values() {
        let check = b"123456789";
        assert_eq!(CrcOracle::Crc8.evaluate(check), BigUint::from(0xF4u32));
        assert_eq!(CrcOracle::Crc16.evaluate(check), BigUint::from(0xBB3Du32));
        assert_eq!(CrcOracle::Crc32.evaluate(check), BigUint::from(0xCBF4_3926u32));
    }

    #[test]
    fn test_one_table_step_per_byte() {
        assert_eq!(CrcOracle::Crc16.compression_calls(2), 2);
        assert_eq!(CrcOracle::Crc32.state_width(), 32);
    }
}
