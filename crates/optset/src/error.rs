//! Parse errors surfaced to the caller.
//!
//! Nothing here logs or exits; every failure is returned and left for the
//! host program to report.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A value-bearing option was matched but the argument list was
    /// exhausted, or the next token looked like another option. Carries the
    /// option's usage string so callers can print an actionable message.
    #[error("missing required value: {usage}")]
    MissingValue { usage: String },

    /// The argument to an integer option did not parse at the required
    /// width.
    #[error("invalid integer literal: {0}")]
    InvalidInt(#[from] ParseIntError),

    /// The argument to a float option did not parse.
    #[error("invalid float literal: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    /// An option-shaped token matched no declared keyword.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn numeric_errors_keep_their_source() {
        let err: Error = "xyz".parse::<i64>().unwrap_err().into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid integer literal"));

        let err: Error = "xyz".parse::<f64>().unwrap_err().into();
        assert!(err.source().is_some());
    }
}
