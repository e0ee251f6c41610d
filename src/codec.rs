use log::{debug, trace};

use crate::alphabet::{digit_of, symbol_of, to_symbols};
use crate::checksum::damm32;
use crate::error::{Error, Result};
use crate::mask::{from_digits, mask, to_digits, unmask};
use crate::normalize::normalize;
use crate::{GROUP_LEN, MAX_NUMBER, MIN_DIGITS, SEPARATOR};

/// Encodes `n` as a dash-grouped code such as `DD7D-96YY`.
///
/// `n` must lie in `1..MAX_NUMBER`. Codes are 6 to 8 symbols long, the last
/// one being the check digit.
pub fn encode(n: i64) -> Result<String> {
    if n <= 0 || n >= MAX_NUMBER {
        return Err(Error::OutOfRange(n));
    }

    let masked = mask(n as u64);
    let mut digits = to_digits(masked);
    while digits.len() < MIN_DIGITS {
        digits.insert(0, 0);
    }
    digits.push(damm32(&digits));
    trace!("encode {n}: masked {masked}, digits {digits:?}");

    let symbols = to_symbols(&digits);
    let (head, tail) = symbols.split_at(GROUP_LEN);
    Ok(format!("{head}{SEPARATOR}{tail}"))
}

/// Decodes a code produced by [`encode`] back into its number.
///
/// Input is normalized first, see the crate docs. The check digit is
/// verified before anything is unmasked.
pub fn decode(input: &str) -> Result<i64> {
    let code = normalize(input).inspect_err(|err| debug!("rejected {input:?}: {err}"))?;

    let mut digits = code
        .bytes()
        .map(|c| digit_of(c).ok_or_else(|| Error::InvalidCharacter(code.clone())))
        .collect::<Result<Vec<u8>>>()?;

    if damm32(&digits) != 0 {
        let err = Error::ChecksumMismatch {
            symbol: digits.last().map_or('?', |&d| symbol_of(d) as char),
            code,
        };
        debug!("rejected {input:?}: {err}");
        return Err(err);
    }

    digits.pop();
    let masked = from_digits(&digits);
    let n = unmask(masked);
    trace!("decode {input:?}: digits {digits:?}, masked {masked}, number {n}");

    // unmask reduces modulo MAX_NUMBER, well inside i64
    Ok(n as i64)
}
