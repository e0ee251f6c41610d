use crate::MAX_NUMBER;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `encode` was given a number outside `1..MAX_NUMBER`.
    #[error("number {0} is out of range, expected 1 to {max} exclusive", max = MAX_NUMBER)]
    OutOfRange(i64),

    /// The normalized input still holds symbols outside the alphabet.
    #[error("string '{0}' contains invalid characters")]
    InvalidCharacter(String),

    /// The check digit doesn't match the rest of the code.
    #[error("invalid check value '{symbol}' for string '{code}'")]
    ChecksumMismatch { symbol: char, code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::OutOfRange(0).to_string(),
            "number 0 is out of range, expected 1 to 34359738368 exclusive"
        );
        assert_eq!(
            Error::InvalidCharacter("A0E0U1".into()).to_string(),
            "string 'A0E0U1' contains invalid characters"
        );
        assert_eq!(
            Error::ChecksumMismatch { symbol: 'X', code: "DD7D96YX".into() }.to_string(),
            "invalid check value 'X' for string 'DD7D96YX'"
        );
    }
}
