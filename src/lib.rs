//! Short, hand-transcribable codes for integers.
//!
//! A positive integer below [`MAX_NUMBER`] is scrambled with a modular
//! multiplicative mask, written out in a 32-symbol alphabet without the
//! glyphs `I`, `L`, `O` and `U`, and suffixed with a check digit. The
//! result is split into two dash-separated groups:
//!
//! ```
//! assert_eq!(shareable_codes::encode(123456).unwrap(), "DD7D-96YY");
//! assert_eq!(shareable_codes::decode("dd7d96yy").unwrap(), 123456);
//! ```
//!
//! Decoding is case-insensitive, ignores dashes, and reads `I`/`L` as `1`
//! and `O` as `0`. Any single mistyped symbol is rejected.

#![warn(clippy::all)]

/// `zrockford32`: Crockford's ambiguity rules over the z-base-32 ordering.
pub(crate) const SYMBOLS: &[u8; 32] = b"YBNDRFG8EJKMCPQX0T1VW2SZA345H769";

/// Exclusive upper bound of encodable numbers, `32^7`.
pub const MAX_NUMBER: i64 = 34_359_738_368;

/// Multiplier of the mask. Must stay coprime with [`MAX_NUMBER`].
pub(crate) const COPRIME: u64 = 5_777_025_351;

/// `COPRIME^-1 mod MAX_NUMBER`.
pub(crate) const MULINV: u64 = 1_393_193_079;

/// Inserted after the first [`GROUP_LEN`] symbols of a code.
pub const SEPARATOR: char = '-';

pub(crate) const GROUP_LEN: usize = 4;

/// Digits a masked value is left-padded to before the check digit is added.
pub(crate) const MIN_DIGITS: usize = 5;

mod alphabet;
mod checksum;
mod codec;
mod error;
mod mask;
mod normalize;

pub use crate::codec::{decode, encode};
pub use crate::error::{Error, Result};
