//! Supported numeral systems.
//!
//! Only base 8, base 10 and base 16 are understood. Any other raw radix value is a
//! caller contract violation and surfaces as [`ParseError::UnsupportedRadix`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;

/// A numeral system the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum Radix {
    /// Base 8. Negative 32-bit values start with `37` in the 11-digit layout.
    Octal = 8,
    /// Base 10. Negative values carry an explicit leading `-`.
    Decimal = 10,
    /// Base 16. Negative 32-bit values start with the nibble `F`.
    Hex = 16,
}

impl Radix {
    /// Every supported radix, in ascending order.
    pub const ALL: [Self; 3] = [Self::Octal, Self::Decimal, Self::Hex];

    /// Return the numeric base.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Try to convert a raw radix value into a `Radix`.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            8 => Some(Self::Octal),
            10 => Some(Self::Decimal),
            16 => Some(Self::Hex),
            _ => None,
        }
    }

    /// Human-readable name of the numeral system.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hex => "hex",
        }
    }
}

impl TryFrom<i32> for Radix {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_i32(value).ok_or(ParseError::UnsupportedRadix { radix: value })
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.value()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
