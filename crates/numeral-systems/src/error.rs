//! Error types for numeral parsing.

use thiserror::Error;

use crate::radix::Radix;

/// A result type using `ParseError`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while converting a numeral to an `i32`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source contains a character that is not legal in the numeral system.
    #[error("illegal symbol {symbol:?} at position {position}: source does not represent a number in the {radix} numeral system")]
    IllegalSymbol {
        /// The offending character.
        symbol: char,
        /// Character index of `symbol`, counted from the left.
        position: usize,
        /// The numeral system the source was checked against.
        radix: Radix,
    },

    /// A positive value was requested but the source encodes a negative one.
    #[error("source does not represent a positive number in the {radix} numeral system")]
    ImpliedNegative {
        /// The numeral system whose sign convention matched.
        radix: Radix,
    },

    /// The radix is not 8, 10 or 16.
    #[error("unsupported radix {radix}: radix is 8, 10 and 16 only")]
    UnsupportedRadix {
        /// The rejected raw radix value.
        radix: i32,
    },

    /// The source has no characters.
    #[error("source is empty: expected at least one {radix} digit")]
    Empty {
        /// The numeral system the source was checked against.
        radix: Radix,
    },
}

/// Fieldless classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ParseError::IllegalSymbol`].
    IllegalSymbol,
    /// See [`ParseError::ImpliedNegative`].
    ImpliedNegative,
    /// See [`ParseError::UnsupportedRadix`].
    UnsupportedRadix,
    /// See [`ParseError::Empty`].
    Empty,
}

impl ParseError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalSymbol { .. } => ErrorKind::IllegalSymbol,
            Self::ImpliedNegative { .. } => ErrorKind::ImpliedNegative,
            Self::UnsupportedRadix { .. } => ErrorKind::UnsupportedRadix,
            Self::Empty { .. } => ErrorKind::Empty,
        }
    }

    /// Returns `true` if the error is about the source text rather than the caller.
    ///
    /// Probing operations turn data errors into a `false` flag; everything else is
    /// still returned as an error.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        !matches!(self, Self::UnsupportedRadix { .. })
    }
}
