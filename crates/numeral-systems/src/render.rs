//! Canonical rendering of `i32` values, the inverse of signed parsing.

use crate::radix::Radix;

/// Render `value` in the canonical digits of `radix`.
///
/// Octal and hex render the 32-bit two's-complement bit pattern without redundant
/// leading zeros (hex in upper case). Decimal renders a leading `-` for negative
/// values.
#[must_use]
pub fn render(value: i32, radix: Radix) -> String {
    let word = u32::from_ne_bytes(value.to_ne_bytes());
    match radix {
        Radix::Octal => format!("{word:o}"),
        Radix::Decimal => value.to_string(),
        Radix::Hex => format!("{word:X}"),
    }
}
