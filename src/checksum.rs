//! Damm-style check digit over GF(32).
//!
//! Each step XORs in a digit and multiplies the accumulator by `x` modulo
//! `x^5 + x^2 + 1` (`0b100101`, i.e. 37). The result is the sum of
//! `d_i * x^(n - i)` for non-zero exponents, so changing any one digit, or
//! swapping two adjacent distinct digits, always changes the check digit.

const REDUCTION: u8 = 37;

/// Check digit for `digits`. Running it over a sequence that already ends
/// in its own check digit yields `0`.
pub(crate) fn damm32(digits: &[u8]) -> u8 {
    digits.iter().fold(0, |mut checksum, &digit| {
        checksum ^= digit;
        checksum <<= 1;
        if checksum >= 32 {
            checksum ^= REDUCTION;
        }
        checksum
    })
}
