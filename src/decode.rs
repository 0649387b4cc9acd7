//! Bech32 decoding module.
//! Single validation pass over the input bytes: range check, case tracking and
//! folding, separator search. Symbols outside the alphabet become a marker that
//! checksum verification rejects, so they report `InvalidChecksum`.

use crate::checksum::verify_checksum;
use crate::{CHARSET, CHECKSUM_LEN, MAX_LENGTH, MIN_LENGTH};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer than `MIN_LENGTH` bytes.
    #[error("bech32 string is too short ({len} < {min})", min = MIN_LENGTH)]
    TooShort { len: usize },
    /// More than `MAX_LENGTH` bytes (only checked by [`decode`]).
    #[error("bech32 string cannot exceed {max} characters ({len})", max = MAX_LENGTH)]
    TooLong { len: usize },
    /// Byte outside printable ASCII (33..=126) at position.
    #[error("out of range character {byte:#04x} at position {position}")]
    OutOfRangeCharacter { position: usize, byte: u8 },
    /// Both uppercase and lowercase letters present.
    #[error("mixture of uppercase and lowercase characters")]
    MixedCase,
    /// No `'1'` in the string.
    #[error("missing separator character")]
    MissingSeparator,
    /// Separator is the first character.
    #[error("empty human-readable part")]
    EmptyHrp,
    /// Fewer than six characters after the separator.
    #[error("checksum too short ({len} characters after separator)")]
    ChecksumTooShort { len: usize },
    /// Checksum mismatch, or a data character outside the alphabet.
    #[error("invalid bech32 checksum")]
    InvalidChecksum,
}

/// Decodes and validates a bech32 string of at most `MAX_LENGTH` characters.
///
/// Returns the lowercase HRP and the data symbols with the checksum stripped.
///
/// # Errors
/// - `TooLong`: more than 90 characters.
/// - Any error of [`decode_raw`].
#[inline]
pub fn decode(input: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let len = input.len();
    let result = if len > MAX_LENGTH {
        Err(DecodeError::TooLong { len })
    } else {
        decode_unbounded(input)
    };
    result.inspect_err(|err| tracing::trace!(error = %err, len, "bech32 decode rejected"))
}

/// Decodes a bech32 string with no upper length bound.
///
/// # Errors
/// - `TooShort`: fewer than 8 characters.
/// - `OutOfRangeCharacter`: a byte outside 33..=126.
/// - `MixedCase`: both upper- and lowercase letters.
/// - `MissingSeparator`, `EmptyHrp`, `ChecksumTooShort`: malformed structure.
/// - `InvalidChecksum`: verification failed or a data character is not in the charset.
#[inline]
pub fn decode_raw(input: &str) -> Result<(String, Vec<u8>), DecodeError> {
    decode_unbounded(input)
        .inspect_err(|err| tracing::trace!(error = %err, len = input.len(), "bech32 decode rejected"))
}

fn decode_unbounded(input: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    if len < MIN_LENGTH {
        return Err(DecodeError::TooShort { len });
    }
    let mut folded = Vec::with_capacity(len);
    let mut have_lower = false;
    let mut have_upper = false;
    let mut separator = None;
    for (position, &byte) in bytes.iter().enumerate() {
        if !(33..=126).contains(&byte) {
            return Err(DecodeError::OutOfRangeCharacter { position, byte });
        }
        have_lower |= byte.is_ascii_lowercase();
        have_upper |= byte.is_ascii_uppercase();
        let byte = byte.to_ascii_lowercase();
        // last '1' wins
        if byte == b'1' {
            separator = Some(position);
        }
        folded.push(byte);
    }
    if have_upper && have_lower {
        return Err(DecodeError::MixedCase);
    }
    let separator = separator.ok_or(DecodeError::MissingSeparator)?;
    if separator == 0 {
        return Err(DecodeError::EmptyHrp);
    }
    if separator + 1 + CHECKSUM_LEN > len {
        return Err(DecodeError::ChecksumTooShort {
            len: len - separator - 1,
        });
    }
    let hrp: String = folded[..separator].iter().map(|&b| char::from(b)).collect();
    let mut data: Vec<u8> = folded[separator + 1..]
        .iter()
        .map(|&b| CHARSET_REV[usize::from(b & 0x7f)])
        .collect();
    if !verify_checksum(&hrp, &data) {
        return Err(DecodeError::InvalidChecksum);
    }
    data.truncate(data.len() - CHECKSUM_LEN);
    Ok((hrp, data))
}

/// Marker for characters missing from the charset.
const INVALID: u8 = 0xff;

/// ASCII byte -> charset index, both cases; `INVALID` elsewhere.
#[allow(clippy::cast_possible_truncation)]
const CHARSET_REV: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0usize;
    while i < CHARSET.len() {
        let ch = CHARSET[i];
        table[ch as usize] = i as u8;
        table[ch.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
};
