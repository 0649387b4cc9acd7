//! Bech32 codec for 5-bit data with a human-readable prefix.
//!
//! Encodes `hrp + "1" + data + checksum`, with every 5-bit symbol rendered
//! through [`CHARSET`]. Conversion between bytes and 5-bit groups is left to
//! the caller.
//!
//! ```
//! let data = [0u8, 1, 2, 3];
//! let encoded = bech32lite::encode("test", &data).unwrap();
//! assert_eq!(encoded, "test1qpzrs7g9ff");
//!
//! let (hrp, decoded) = bech32lite::decode(&encoded).unwrap();
//! assert_eq!(hrp, "test");
//! assert_eq!(decoded, data);
//! ```

/// Alphabet mapping each 5-bit symbol to its character.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separates the human-readable part from the data part (last occurrence wins).
pub const SEPARATOR: char = '1';

/// Number of trailing checksum symbols.
pub const CHECKSUM_LEN: usize = 6;

/// Shortest string `decode`/`decode_raw` accept: 1-char HRP, separator, checksum.
pub const MIN_LENGTH: usize = 8;

/// Longest string [`decode`] accepts.
pub const MAX_LENGTH: usize = 90;

pub mod checksum;
mod decode;
mod encode;

pub use decode::{decode, decode_raw, DecodeError};
pub use encode::{encode, encoded_len, EncodeError};
