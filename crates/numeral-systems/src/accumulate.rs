//! Digit accumulation into a fixed-width 32-bit word.
//!
//! The scan runs from the least-significant (rightmost) character to the first one,
//! adding `digit * radix^power` into an unsigned accumulator modulo 2^32. Octal and
//! hex sources whose magnitude does not fit in 31 bits therefore fold into negative
//! values when the word is reinterpreted as signed at the end. Decimal sources carry
//! an explicit `-` instead, which negates what has been accumulated so far and ends
//! the scan.

use crate::digit::digit_value;
use crate::error::{ParseError, Result};
use crate::radix::Radix;

/// Accumulate `source` in `radix` into a two's-complement `i32`.
///
/// `source` is expected to have passed validation; a character without a digit
/// value is still reported as [`ParseError::IllegalSymbol`] rather than skipped.
pub(crate) fn accumulate(source: &str, radix: Radix) -> Result<i32> {
    let base = radix.value();
    let last = source.chars().count().saturating_sub(1);

    let mut word: u32 = 0;
    // radix^power mod 2^32
    let mut place: u32 = 1;

    for (offset, symbol) in source.chars().rev().enumerate() {
        if symbol == '-' {
            // Characters left of the sign are never consumed.
            return Ok(reinterpret(word.wrapping_neg()));
        }

        let digit = digit_value(symbol).ok_or(ParseError::IllegalSymbol {
            symbol,
            position: last - offset,
            radix,
        })?;

        word = word.wrapping_add(digit.wrapping_mul(place));
        place = place.wrapping_mul(base);
    }

    Ok(reinterpret(word))
}

/// Reinterpret the bits of an unsigned word as a two's-complement signed value.
const fn reinterpret(word: u32) -> i32 {
    i32::from_ne_bytes(word.to_ne_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_positive_values() {
        assert_eq!(accumulate("2447150", Radix::Octal), Ok(675_432));
        assert_eq!(accumulate("127", Radix::Octal), Ok(87));
        assert_eq!(accumulate("2147483647", Radix::Decimal), Ok(i32::MAX));
        assert_eq!(accumulate("7FF", Radix::Hex), Ok(2047));
    }

    #[test]
    fn octal_overflow_folds_into_negative() {
        assert_eq!(accumulate("37777777601", Radix::Octal), Ok(-127));
        assert_eq!(accumulate("37775330632", Radix::Octal), Ok(-675_430));
        assert_eq!(accumulate("37665330632", Radix::Octal), Ok(-19_549_798));
        assert_eq!(accumulate("37777777777", Radix::Octal), Ok(-1));
    }

    #[test]
    fn hex_high_nibble_is_the_sign_bit() {
        assert_eq!(accumulate("FFF5B198", Radix::Hex), Ok(-675_432));
        assert_eq!(accumulate("80000000", Radix::Hex), Ok(i32::MIN));
        assert_eq!(accumulate("ffffffff", Radix::Hex), Ok(-1));
    }

    #[test]
    fn sign_extended_sources_wrap_modulo_word() {
        // 8^11 == 2^33, so a twelfth octal digit contributes nothing.
        assert_eq!(accumulate("737777777601", Radix::Octal), Ok(-127));
        assert_eq!(accumulate("1FFF5B198", Radix::Hex), Ok(-675_432));
    }

    #[test]
    fn decimal_minus_negates_accumulated_magnitude() {
        assert_eq!(accumulate("-675432", Radix::Decimal), Ok(-675_432));
        assert_eq!(accumulate("-2147483648", Radix::Decimal), Ok(i32::MIN));
        assert_eq!(accumulate("-0", Radix::Decimal), Ok(0));
    }

    #[test]
    fn characters_left_of_minus_are_ignored() {
        assert_eq!(accumulate("5-12", Radix::Decimal), Ok(-12));
        assert_eq!(accumulate("99-", Radix::Decimal), Ok(0));
    }

    #[test]
    fn decimal_overflow_wraps() {
        assert_eq!(accumulate("2147483648", Radix::Decimal), Ok(i32::MIN));
        assert_eq!(accumulate("4294967296", Radix::Decimal), Ok(0));
    }

    #[test]
    fn empty_source_accumulates_to_zero() {
        assert_eq!(accumulate("", Radix::Hex), Ok(0));
    }

    #[test]
    fn reports_position_of_unknown_symbol() {
        assert_eq!(
            accumulate("12#4", Radix::Decimal),
            Err(ParseError::IllegalSymbol {
                symbol: '#',
                position: 2,
                radix: Radix::Decimal,
            })
        );
    }
}
