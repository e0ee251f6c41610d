use crate::alphabet::is_symbol;
use crate::error::{Error, Result};
use crate::SEPARATOR;

/// Canonicalizes hand-typed input: upper-cases it, drops dashes and reads
/// `I`/`L` as `1` and `O` as `0`.
///
/// Fails with [`Error::InvalidCharacter`] if anything outside the alphabet
/// is left over, or if nothing is left at all.
pub(crate) fn normalize(input: &str) -> Result<String> {
    let normalized: String = input
        .to_uppercase()
        .chars()
        .filter(|&c| c != SEPARATOR)
        .map(|c| match c {
            'I' | 'L' => '1',
            'O' => '0',
            c => c,
        })
        .collect();

    if normalized.is_empty() || !normalized.bytes().all(is_symbol) {
        return Err(Error::InvalidCharacter(normalized));
    }

    Ok(normalized)
}
