//! Digit-value lookup.

/// Value of a single numeral character, independent of radix.
///
/// `0`-`9` map to 0-9 and `A`-`F` (either case) map to 10-15. Everything else,
/// including the decimal sign `-`, has no digit value.
#[must_use]
pub const fn digit_value(symbol: char) -> Option<u32> {
    match symbol {
        '0'..='9' => Some(symbol as u32 - '0' as u32),
        'A'..='F' => Some(symbol as u32 - 'A' as u32 + 10),
        'a'..='f' => Some(symbol as u32 - 'a' as u32 + 10),
        _ => None,
    }
}
