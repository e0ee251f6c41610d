//! Multiplicative masking over `Z / 32^7` and positional base-32 conversion.
//!
//! Multiplying by a unit of the ring is a bijection, so consecutive inputs
//! land far apart while staying exactly recoverable. This is not a cipher:
//! anyone holding the two constants can invert it.

use crate::{COPRIME, MAX_NUMBER, MULINV};

const MODULUS: u64 = MAX_NUMBER as u64;

#[inline(always)]
fn mul_mod(a: u64, b: u64) -> u64 {
    // Both factors are below 2^35, so the product needs up to 70 bits.
    ((a as u128 * b as u128) % MODULUS as u128) as u64
}

pub(crate) fn mask(n: u64) -> u64 {
    mul_mod(n, COPRIME)
}

pub(crate) fn unmask(h: u64) -> u64 {
    mul_mod(h, MULINV)
}

/// Base-32 digits of `n`, most significant first. `0` yields `[0]`.
pub(crate) fn to_digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::with_capacity(8);
    while n >= 32 {
        digits.push((n % 32) as u8);
        n /= 32;
    }
    digits.push(n as u8);
    digits.reverse();
    digits
}

/// Positional value of `digits`, reduced modulo `MAX_NUMBER`.
///
/// Digits above the seventh position only ever add multiples of the
/// modulus, so the reduction doesn't change what `unmask` returns.
pub(crate) fn from_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |n, &d| (n * 32 + u64::from(d)) % MODULUS)
}
