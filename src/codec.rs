//! Mode selection, capacity computation, and payload bit-packing.

use crate::bitstream::BitStream;
use crate::error::{QrError, QrResult};
use crate::metadata::{EccLevel, Version};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Octet = 0b0100,
}

/// Wire value of the 4-bit terminator mode indicator. Not a variant of
/// `Mode` itself since it never carries a payload.
const TERMINATOR_INDICATOR: u32 = 0b0000;

impl Mode {
    pub fn from_str(s: &str) -> QrResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" => Ok(Self::Numeric),
            "alphanumeric" => Ok(Self::Alphanumeric),
            "octet" => Ok(Self::Octet),
            _ => Err(QrError::InvalidMode),
        }
    }

    pub(crate) fn indicator(self) -> u32 {
        self as u32
    }

    /// Width of the length-indicator field for this mode at `version`.
    pub(crate) fn length_bits(self, version: Version) -> usize {
        let v = version.value();
        match self {
            Self::Numeric => {
                if v < 10 {
                    10
                } else if v < 27 {
                    12
                } else {
                    14
                }
            }
            Self::Alphanumeric => {
                if v < 10 {
                    9
                } else if v < 27 {
                    11
                } else {
                    13
                }
            }
            Self::Octet => {
                if v < 10 {
                    8
                } else {
                    16
                }
            }
        }
    }

    fn numeric_digit(c: u8) -> u32 {
        (c - b'0') as u32
    }

    fn alphanumeric_digit(c: u8) -> u32 {
        match c {
            b'0'..=b'9' => (c - b'0') as u32,
            b'A'..=b'Z' => (c - b'A' + 10) as u32,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("non-alphanumeric byte {c} reached the alphanumeric packer"),
        }
    }

    /// Validates `text` matches this mode's permitted character set,
    /// returning the (possibly uppercased) bytes to pack.
    pub(crate) fn validate(self, text: &str) -> QrResult<Vec<u8>> {
        match self {
            Self::Numeric => {
                if text.bytes().all(|b| b.is_ascii_digit()) {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(QrError::PayloadModeMismatch)
                }
            }
            Self::Alphanumeric => {
                let upper = text.to_ascii_uppercase();
                if upper.bytes().all(|b| is_alphanumeric_byte(b)) {
                    Ok(upper.into_bytes())
                } else {
                    Err(QrError::PayloadModeMismatch)
                }
            }
            Self::Octet => Ok(text.as_bytes().to_vec()),
        }
    }

    fn push_numeric(data: &[u8], bs: &mut BitStream) {
        for chunk in data.chunks(3) {
            let value = chunk.iter().fold(0u32, |acc, &b| acc * 10 + Self::numeric_digit(b));
            let bits = match chunk.len() {
                3 => 10,
                2 => 7,
                1 => 4,
                _ => unreachable!(),
            };
            bs.push_bits(value, bits);
        }
    }

    fn push_alphanumeric(data: &[u8], bs: &mut BitStream) {
        for chunk in data.chunks(2) {
            if chunk.len() == 2 {
                let value = Self::alphanumeric_digit(chunk[0]) * 45
                    + Self::alphanumeric_digit(chunk[1]);
                bs.push_bits(value, 11);
            } else {
                bs.push_bits(Self::alphanumeric_digit(chunk[0]), 6);
            }
        }
    }

    fn push_octet(data: &[u8], bs: &mut BitStream) {
        for &b in data {
            bs.push_bits(b as u32, 8);
        }
    }

    /// Appends `data`'s payload bits (mode indicator, length indicator and
    /// packed payload) to `bs`. `char_count` is the character count for
    /// Numeric/Alphanumeric, or the byte count for Octet.
    pub(crate) fn push_segment(self, data: &[u8], char_count: usize, version: Version, bs: &mut BitStream) {
        bs.push_bits(self.indicator(), 4);
        bs.push_bits(char_count as u32, self.length_bits(version));
        match self {
            Self::Numeric => Self::push_numeric(data, bs),
            Self::Alphanumeric => Self::push_alphanumeric(data, bs),
            Self::Octet => Self::push_octet(data, bs),
        }
    }
}

fn is_alphanumeric_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'A'..=b'Z' | b' ' | b'$' | b'%' | b'*' | b'+' | b'-' | b'.' | b'/' | b':')
}

/// Detects NUMERIC/ALPHANUMERIC/OCTET for unspecified text payloads. Note
/// this detection is case-sensitive (lowercase letters fall through to
/// Octet) even though an explicitly-requested Alphanumeric mode accepts
/// and uppercases lowercase input in `validate`.
pub(crate) fn detect_mode(text: &str) -> Mode {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        Mode::Numeric
    } else if text.bytes().all(is_alphanumeric_byte) {
        Mode::Alphanumeric
    } else {
        Mode::Octet
    }
}

/// Total usable data bits for `version`/`ecl`, per §4.3: finder/timing/
/// format overhead subtracted, version-info overhead subtracted at v≥7,
/// alignment-pattern overhead subtracted per the version's center count.
pub(crate) fn data_bits(version: Version, ecl: EccLevel) -> usize {
    let v = version.value() as i64;
    let mut n_full_bits = 16 * v * v + 128 * v + 64;
    if v >= 7 {
        n_full_bits -= 36;
    }
    let m = version.alignment_centers().len() as i64;
    if m > 0 {
        n_full_bits -= 25 * m * m - 10 * m - 55;
    }

    let ecc_overhead = 8 * (version.ecc_per_block(ecl) as i64) * (version.num_blocks(ecl) as i64);
    ((n_full_bits & !7) - ecc_overhead) as usize
}

/// Max payload length (chars for Numeric/Alphanumeric, bytes for Octet)
/// that fits in `version`/`ecl` for `mode`.
pub(crate) fn max_payload_len(mode: Mode, version: Version, ecl: EccLevel) -> usize {
    let bits = data_bits(version, ecl) as i64 - 4 - mode.length_bits(version) as i64;
    if bits < 0 {
        return 0;
    }
    let nbits = bits as usize;
    match mode {
        Mode::Numeric => {
            let rem = nbits % 10;
            (nbits / 10) * 3 + if rem < 4 { 0 } else if rem < 7 { 1 } else { 2 }
        }
        Mode::Alphanumeric => {
            let rem = nbits % 11;
            (nbits / 11) * 2 + if rem < 6 { 0 } else { 1 }
        }
        Mode::Octet => nbits / 8,
    }
}

/// Encodes the validated payload into a byte stream sized exactly to
/// `data_bits(version, ecl)`: mode indicator, length indicator, packed
/// payload, terminator (bounds-checked, may be truncated), byte-aligned,
/// then padded with the 0xEC/0x11 codeword cycle.
pub(crate) fn encode(mode: Mode, payload: &[u8], char_count: usize, version: Version, ecl: EccLevel) -> Vec<u8> {
    let capacity_bits = data_bits(version, ecl);
    let mut bs = BitStream::new(capacity_bits);

    mode.push_segment(payload, char_count, version, &mut bs);

    let remaining = bs.capacity() - bs.len();
    let terminator_bits = remaining.min(4);
    bs.push_bits(TERMINATOR_INDICATOR, terminator_bits);

    bs.align_to_byte();
    bs.pad_to_capacity();

    bs.into_bytes()
}

#[cfg(test)]
mod codec_tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b'0', 0)]
    #[test_case(b'9', 9)]
    #[test_case(b'A', 10)]
    #[test_case(b'Z', 35)]
    #[test_case(b' ', 36)]
    #[test_case(b':', 44)]
    fn test_alphanumeric_digit(c: u8, expected: u32) {
        assert_eq!(Mode::alphanumeric_digit(c), expected);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("Alphanumeric").unwrap(), Mode::Alphanumeric);
        assert_eq!(Mode::from_str("kanji"), Err(QrError::InvalidMode));
    }

    #[test]
    fn test_detect_mode_numeric() {
        assert_eq!(detect_mode("0123456789"), Mode::Numeric);
    }

    #[test]
    fn test_detect_mode_alphanumeric() {
        assert_eq!(detect_mode("HELLO WORLD"), Mode::Alphanumeric);
    }

    #[test]
    fn test_detect_mode_octet() {
        assert_eq!(detect_mode("Hello, world!"), Mode::Octet);
    }

    #[test]
    fn test_validate_alphanumeric_accepts_lowercase() {
        let bytes = Mode::Alphanumeric.validate("hello").unwrap();
        assert_eq!(bytes, b"HELLO");
    }

    #[test]
    fn test_validate_numeric_rejects_non_digits() {
        assert_eq!(Mode::Numeric.validate("12a"), Err(QrError::PayloadModeMismatch));
    }

    #[test]
    fn test_data_bits_version1_l() {
        // Version 1-L has 19 data codewords = 152 bits, a well-known value.
        let version = Version::new(1).unwrap();
        assert_eq!(data_bits(version, EccLevel::L), 152);
    }

    #[test]
    fn test_max_payload_len_v1_l_octet() {
        let version = Version::new(1).unwrap();
        assert_eq!(max_payload_len(Mode::Octet, version, EccLevel::L), 17);
    }

    #[test]
    fn test_encode_length_matches_capacity() {
        let version = Version::new(1).unwrap();
        let ecl = EccLevel::M;
        let payload = b"HELLO WORLD".to_vec();
        let out = encode(Mode::Alphanumeric, &payload, payload.len(), version, ecl);
        assert_eq!(out.len() * 8, data_bits(version, ecl));
    }
}
