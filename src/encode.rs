//! Bech32 encoding module.
//! Output is `hrp + '1' + charset(data ++ checksum)`, always lowercase.
//! Inputs are validated before any table lookup, so a bad symbol is an error
//! instead of a panic or a garbage string.

use crate::checksum::create_checksum;
use crate::{CHARSET, CHECKSUM_LEN, SEPARATOR};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Human-readable part is empty.
    #[error("empty human-readable part")]
    EmptyHrp,
    /// HRP byte outside printable ASCII (33..=126).
    #[error("invalid character {byte:#04x} in human-readable part at position {position}")]
    InvalidHrpCharacter { position: usize, byte: u8 },
    /// Uppercase HRP byte; the encoded string would be mixed case.
    #[error("uppercase character in human-readable part at position {position}")]
    UppercaseHrp { position: usize },
    /// Data value does not fit in 5 bits.
    #[error("data value {value} at position {position} is not a 5-bit symbol")]
    InvalidSymbol { position: usize, value: u8 },
}

/// Length of the string [`encode`] produces for the given HRP and data lengths.
#[must_use]
pub const fn encoded_len(hrp_len: usize, data_len: usize) -> usize {
    hrp_len + SEPARATOR.len_utf8() + data_len + CHECKSUM_LEN
}

/// Encodes `data` (5-bit symbols) under the human-readable part `hrp`.
///
/// # Errors
/// - `EmptyHrp`: `hrp` is empty.
/// - `InvalidHrpCharacter`: an HRP byte outside 33..=126.
/// - `UppercaseHrp`: an HRP byte in `A..=Z`.
/// - `InvalidSymbol`: a data value above 31.
#[inline]
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, EncodeError> {
    if let Err(err) = validate(hrp, data) {
        tracing::trace!(error = %err, hrp_len = hrp.len(), data_len = data.len(), "bech32 encode rejected");
        return Err(err);
    }
    let checksum = create_checksum(hrp, data);
    let mut result = String::with_capacity(encoded_len(hrp.len(), data.len()));
    result.push_str(hrp);
    result.push(SEPARATOR);
    result.extend(
        data.iter()
            .chain(checksum.iter())
            .map(|&symbol| char::from(CHARSET[usize::from(symbol)])),
    );
    Ok(result)
}

fn validate(hrp: &str, data: &[u8]) -> Result<(), EncodeError> {
    if hrp.is_empty() {
        return Err(EncodeError::EmptyHrp);
    }
    for (position, &byte) in hrp.as_bytes().iter().enumerate() {
        if !(33..=126).contains(&byte) {
            return Err(EncodeError::InvalidHrpCharacter { position, byte });
        }
        if byte.is_ascii_uppercase() {
            return Err(EncodeError::UppercaseHrp { position });
        }
    }
    if let Some(position) = data.iter().position(|&v| v > 0x1f) {
        return Err(EncodeError::InvalidSymbol {
            position,
            value: data[position],
        });
    }
    Ok(())
}
