//! Bech32 checksum primitives.
//! BCH code over GF(32): the checksum is the remainder of the symbol polynomial
//! modulo a fixed generator, packed into a `u32` (30 significant bits).
//! All functions are pure; the generator table is a shared constant.

use crate::CHECKSUM_LEN;

/// Generator coefficients XORed into the residue for each bit of the top symbol.
pub const GENERATOR: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Residue a valid HRP + data + checksum sequence must reduce to.
const VALID_RESIDUE: u32 = 1;

/// Expands the human-readable part for checksumming:
/// high 3 bits of every byte, a zero, then the low 5 bits of every byte.
#[must_use]
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|&b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|&b| b & 0x1f));
    out
}

/// Polynomial modulus of `values` under [`GENERATOR`], starting from 1.
///
/// The residue is masked to 25 bits before each 5-bit shift, so it never
/// leaves the low 30 bits of the `u32`.
#[must_use]
#[inline]
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Computes the six checksum symbols for `hrp` and `data`, most significant first.
#[must_use]
pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LEN]);
    let residue = polymod(&values) ^ VALID_RESIDUE;
    let mut checksum = [0u8; CHECKSUM_LEN];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let value = ((residue >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8;
        *symbol = value;
    }
    checksum
}

/// Checks `data` (payload followed by its checksum) against `hrp`.
///
/// Any value outside `0..=31`, such as the decoder's marker for characters
/// missing from the alphabet, fails verification.
#[must_use]
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    if data.iter().any(|&v| v > 0x1f) {
        return false;
    }
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == VALID_RESIDUE
}
