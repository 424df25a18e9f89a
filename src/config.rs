//! Resolves user-supplied options (ecc level, mode, version, mask) and
//! the raw payload into a validated, ready-to-encode configuration.

use crate::codec::{self, Mode};
use crate::error::{QrError, QrResult};
use crate::metadata::{EccLevel, Version};

/// Payload as supplied by the caller: either text (subject to mode
/// detection/validation) or a raw byte sequence (always Octet).
pub enum QrData {
    Text(String),
    Bytes(Vec<u8>),
}

pub(crate) struct ResolvedConfig {
    pub mode: Mode,
    pub payload: Vec<u8>,
    pub char_count: usize,
    pub version: Version,
    pub ecl: EccLevel,
    pub mask: Option<u8>,
}

pub(crate) fn resolve(
    data: QrData,
    ecl: Option<EccLevel>,
    mode: Option<Mode>,
    version: Option<Version>,
    mask: Option<u8>,
) -> QrResult<ResolvedConfig> {
    let ecl = ecl.unwrap_or(EccLevel::L);

    if let Some(m) = mask {
        if m > 7 {
            return Err(QrError::InvalidMask);
        }
    }

    let (mode, payload, char_count) = match data {
        QrData::Bytes(bytes) => {
            // Unlike an empty text payload (which still has a well-defined
            // NUMERIC zero-length encoding), an empty byte sequence carries
            // no mode signal of its own; treat it as unsupported input.
            if bytes.is_empty() {
                return Err(QrError::InvalidData);
            }
            let resolved_mode = mode.unwrap_or(Mode::Octet);
            if resolved_mode != Mode::Octet {
                return Err(QrError::PayloadModeMismatch);
            }
            let len = bytes.len();
            (Mode::Octet, bytes, len)
        }
        QrData::Text(text) => {
            let resolved_mode = match mode {
                Some(m) => m,
                None => codec::detect_mode(&text),
            };
            let payload = resolved_mode.validate(&text)?;
            let char_count = payload.len();
            (resolved_mode, payload, char_count)
        }
    };

    let version = match version {
        Some(v) => {
            if codec::max_payload_len(mode, v, ecl) < char_count {
                return Err(QrError::PayloadTooLarge);
            }
            v
        }
        None => smallest_fitting_version(mode, char_count, ecl)?,
    };

    Ok(ResolvedConfig { mode, payload, char_count, version, ecl, mask })
}

fn smallest_fitting_version(mode: Mode, char_count: usize, ecl: EccLevel) -> QrResult<Version> {
    for v in 1..=40usize {
        let version = Version::new(v)?;
        if codec::max_payload_len(mode, version, ecl) >= char_count {
            return Ok(version);
        }
    }
    Err(QrError::PayloadTooLarge)
}
