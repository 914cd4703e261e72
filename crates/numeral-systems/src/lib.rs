//! Octal, decimal and hex numeral parsing into 32-bit two's-complement integers.
//!
//! This crate converts text in base 8, 10 or 16 into `i32` without locale-aware or
//! arbitrary-precision parsing:
//!
//! - **Positive-only** operations reject sources whose sign convention encodes a
//!   negative value (`37...` in octal, `F...` in hex).
//! - **Signed** operations accept the full 32-bit range. Octal and hex sources are
//!   read as the two's-complement bit pattern; decimal uses a leading `-`.
//! - Each operation has a **probing** `try_` form returning `(success, value)`.
//!
//! # Example
//!
//! ```
//! use numeral_systems::{parse_by_radix, parse_positive_from_hex, try_parse_positive_from_octal};
//! use numeral_systems::ParseError;
//!
//! assert_eq!(parse_positive_from_hex("7FFFFFFF"), Ok(i32::MAX));
//! assert_eq!(parse_by_radix("FFF5B198", 16), Ok(-675_432));
//! assert_eq!(try_parse_positive_from_octal("37777777601"), (false, 0));
//!
//! // A bad radix is a caller error, even for probing operations.
//! assert!(matches!(
//!     numeral_systems::try_parse_by_radix("1", 5),
//!     Err(ParseError::UnsupportedRadix { radix: 5 })
//! ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod accumulate;
pub mod converter;
pub mod digit;
pub mod error;
pub mod ext;
pub mod radix;
pub mod render;
mod rules;

pub use converter::{
    parse_by_radix, parse_positive, parse_positive_by_radix, parse_positive_from_decimal,
    parse_positive_from_hex, parse_positive_from_octal, parse_signed, try_parse_by_radix,
    try_parse_positive_by_radix, try_parse_positive_from_decimal, try_parse_positive_from_hex,
    try_parse_positive_from_octal,
};
pub use digit::digit_value;
pub use error::{ErrorKind, ParseError, Result};
pub use ext::NumeralStr;
pub use radix::Radix;
pub use render::render;
