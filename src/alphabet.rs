use crate::SYMBOLS;

const fn generate_decode_lut(alphabet: &[u8; 32]) -> [u8; 256] {
    let mut lut = [u8::MAX; 256];
    let mut i = 0u8;
    while i < 32 {
        lut[alphabet[i as usize] as usize] = i;
        i += 1;
    }
    lut
}

/// Upper-case symbol to digit. Everything else maps to `u8::MAX`.
static DECODE_LUT: [u8; 256] = generate_decode_lut(SYMBOLS);

/// The caller guarantees `digit < 32`.
#[inline(always)]
pub(crate) fn symbol_of(digit: u8) -> u8 {
    SYMBOLS[digit as usize]
}

#[inline(always)]
pub(crate) fn digit_of(symbol: u8) -> Option<u8> {
    match DECODE_LUT[symbol as usize] {
        u8::MAX => None,
        digit => Some(digit),
    }
}

pub(crate) fn is_symbol(symbol: u8) -> bool {
    digit_of(symbol).is_some()
}

pub(crate) fn to_symbols(digits: &[u8]) -> String {
    digits.iter().map(|&d| symbol_of(d) as char).collect()
}
