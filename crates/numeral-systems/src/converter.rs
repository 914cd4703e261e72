//! Strict and probing conversions from numeral text to `i32`.
//!
//! Strict operations return a classified [`ParseError`]. Probing operations return
//! `(success, value)` with `value == 0` on failure, except that an unsupported raw
//! radix is still returned as an error: that is a caller bug, not bad data.

use crate::accumulate::accumulate;
use crate::error::{ParseError, Result};
use crate::radix::Radix;
use crate::rules::{check_generic_sign, rules, Form};

/// Converts a positive octal numeral to its `i32` equivalent.
///
/// Valid symbols are `0`-`7`.
///
/// # Errors
///
/// Returns [`ParseError::IllegalSymbol`] for any other character,
/// [`ParseError::ImpliedNegative`] if the source starts with `37` or its value
/// wraps past `i32::MAX` (e.g. `20000000000`), and [`ParseError::Empty`] for an
/// empty source.
pub fn parse_positive_from_octal(source: &str) -> Result<i32> {
    logged(source, Radix::Octal, positive_by_rules(source, Radix::Octal))
}

/// Converts a positive decimal numeral to its `i32` equivalent.
///
/// Valid symbols are `0`-`9`. A `-` is not a digit and is rejected like any other
/// foreign character.
///
/// # Errors
///
/// Returns [`ParseError::IllegalSymbol`] for any non-digit,
/// [`ParseError::ImpliedNegative`] if the value wraps past `i32::MAX` and
/// [`ParseError::Empty`] for an empty source.
pub fn parse_positive_from_decimal(source: &str) -> Result<i32> {
    logged(source, Radix::Decimal, positive_by_rules(source, Radix::Decimal))
}

/// Converts a positive hex numeral to its `i32` equivalent.
///
/// Valid symbols are `0`-`9`, `A`-`F` and `a`-`f`.
///
/// # Errors
///
/// Returns [`ParseError::IllegalSymbol`] for any other character,
/// [`ParseError::ImpliedNegative`] if the leading nibble is `F`/`f` or the value
/// wraps past `i32::MAX` (e.g. `80000000`, `1FFF5B198`), and [`ParseError::Empty`]
/// for an empty source.
pub fn parse_positive_from_hex(source: &str) -> Result<i32> {
    logged(source, Radix::Hex, positive_by_rules(source, Radix::Hex))
}

/// Converts a positive numeral in base 8, 10 or 16 to its `i32` equivalent.
///
/// The sign check is shared by all radixes: a source that starts or ends with `F`,
/// `f`, `-` or the pair `37` is treated as negative, as is a decimal source containing
/// a `-` anywhere. A value that wraps past `i32::MAX` is rejected as well.
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedRadix`] before looking at `source` if `radix`
/// is not 8, 10 or 16, then [`ParseError::Empty`], [`ParseError::IllegalSymbol`] or
/// [`ParseError::ImpliedNegative`].
pub fn parse_positive_by_radix(source: &str, radix: i32) -> Result<i32> {
    let radix = resolve(radix)?;
    logged(source, radix, positive_generic(source, radix))
}

/// Converts a signed numeral in base 8, 10 or 16 to its `i32` equivalent.
///
/// Octal and hex sources are read as the 32-bit two's-complement bit pattern, so
/// `37777777601` (octal) and `FFFFFF81` (hex) are both `-127`. Decimal sources use a
/// leading `-`.
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedRadix`] before looking at `source` if `radix`
/// is not 8, 10 or 16, then [`ParseError::Empty`] or [`ParseError::IllegalSymbol`].
pub fn parse_by_radix(source: &str, radix: i32) -> Result<i32> {
    let radix = resolve(radix)?;
    parse_signed(source, radix)
}

/// Converts a positive numeral using the sign convention of `radix`.
///
/// Same as [`parse_positive_from_octal`], [`parse_positive_from_decimal`] or
/// [`parse_positive_from_hex`], selected by `radix`.
///
/// # Errors
///
/// See the radix-specific operations.
pub fn parse_positive(source: &str, radix: Radix) -> Result<i32> {
    logged(source, radix, positive_by_rules(source, radix))
}

/// Converts a signed numeral in `radix`.
///
/// Same as [`parse_by_radix`] without the raw radix check.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] or [`ParseError::IllegalSymbol`].
pub fn parse_signed(source: &str, radix: Radix) -> Result<i32> {
    logged(source, radix, signed(source, radix))
}

/// Probing form of [`parse_positive_from_octal`].
#[must_use]
pub fn try_parse_positive_from_octal(source: &str) -> (bool, i32) {
    probe(source, positive_by_rules(source, Radix::Octal))
}

/// Probing form of [`parse_positive_from_decimal`].
#[must_use]
pub fn try_parse_positive_from_decimal(source: &str) -> (bool, i32) {
    probe(source, positive_by_rules(source, Radix::Decimal))
}

/// Probing form of [`parse_positive_from_hex`].
#[must_use]
pub fn try_parse_positive_from_hex(source: &str) -> (bool, i32) {
    probe(source, positive_by_rules(source, Radix::Hex))
}

/// Probing form of [`parse_positive_by_radix`].
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedRadix`] if `radix` is not 8, 10 or 16. Every
/// other failure is reported as `Ok((false, 0))`.
pub fn try_parse_positive_by_radix(source: &str, radix: i32) -> Result<(bool, i32)> {
    let radix = resolve(radix)?;
    Ok(probe(source, positive_generic(source, radix)))
}

/// Probing form of [`parse_by_radix`].
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedRadix`] if `radix` is not 8, 10 or 16. Every
/// other failure is reported as `Ok((false, 0))`.
pub fn try_parse_by_radix(source: &str, radix: i32) -> Result<(bool, i32)> {
    let radix = resolve(radix)?;
    Ok(probe(source, signed(source, radix)))
}

fn positive_by_rules(source: &str, radix: Radix) -> Result<i32> {
    let rules = rules(radix);
    rules.check_not_empty(source)?;
    rules.check_symbols(source, Form::Positive)?;
    rules.check_sign(source)?;
    non_negative(accumulate(source, radix)?, radix)
}

fn positive_generic(source: &str, radix: Radix) -> Result<i32> {
    let rules = rules(radix);
    rules.check_not_empty(source)?;
    rules.check_symbols(source, Form::Signed)?;
    check_generic_sign(source, radix)?;
    non_negative(accumulate(source, radix)?, radix)
}

fn signed(source: &str, radix: Radix) -> Result<i32> {
    let rules = rules(radix);
    rules.check_not_empty(source)?;
    rules.check_symbols(source, Form::Signed)?;
    accumulate(source, radix)
}

/// Reject a word whose sign bit is set, whatever the source's leading digits were.
fn non_negative(value: i32, radix: Radix) -> Result<i32> {
    if value < 0 {
        return Err(ParseError::ImpliedNegative { radix });
    }
    Ok(value)
}

fn resolve(radix: i32) -> Result<Radix> {
    Radix::try_from(radix).inspect_err(|_| {
        tracing::warn!(radix, "Rejected unsupported radix");
    })
}

fn logged(source: &str, radix: Radix, result: Result<i32>) -> Result<i32> {
    result.inspect_err(|err| {
        tracing::debug!(source, radix = %radix, error = %err, "Rejected numeral");
    })
}

fn probe(source: &str, result: Result<i32>) -> (bool, i32) {
    match result {
        Ok(value) => (true, value),
        Err(err) => {
            debug_assert!(err.is_data_error(), "caller error reached a probing form: {err}");
            tracing::trace!(source, kind = ?err.kind(), "Numeral probe failed");
            (false, 0)
        }
    }
}
