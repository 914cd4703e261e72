//! Table-driven validation of numeral sources.
//!
//! Each supported radix has one [`Rules`] entry describing its legal digits and its
//! sign convention:
//!
//! | radix   | max digit | letters | `-` (signed) | positive-only rejects     |
//! |---------|-----------|---------|--------------|---------------------------|
//! | octal   | 7         | no      | no           | leading `37`              |
//! | decimal | 9         | no      | yes          | nothing beyond symbols    |
//! | hex     | F         | A-F/a-f | no           | leading `F`/`f`           |
//!
//! The radix-generic positive operation uses [`check_generic_sign`] instead of the
//! per-radix predicate.
//!
//! These checks only look at the text. The positive operations also reject any
//! accumulated word with the sign bit set.

use crate::digit::digit_value;
use crate::error::{ParseError, Result};
use crate::radix::Radix;

/// Which symbol set a source is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    /// Digits only.
    Positive,
    /// Digits plus the radix's explicit sign character, if it has one.
    Signed,
}

/// Validation rules of one numeral system.
pub(crate) struct Rules {
    radix: Radix,
    max_digit: u32,
    letters: bool,
    minus: bool,
    implies_negative: fn(&str) -> bool,
}

/// Rules for every supported radix, in [`Radix::ALL`] order.
pub(crate) static RULES: [Rules; 3] = [
    Rules {
        radix: Radix::Octal,
        max_digit: 7,
        letters: false,
        minus: false,
        implies_negative: octal_sign,
    },
    Rules {
        radix: Radix::Decimal,
        max_digit: 9,
        letters: false,
        minus: true,
        implies_negative: no_sign,
    },
    Rules {
        radix: Radix::Hex,
        max_digit: 15,
        letters: true,
        minus: false,
        implies_negative: hex_sign,
    },
];

/// Look up the rules for `radix`.
pub(crate) fn rules(radix: Radix) -> &'static Rules {
    match radix {
        Radix::Octal => &RULES[0],
        Radix::Decimal => &RULES[1],
        Radix::Hex => &RULES[2],
    }
}

impl Rules {
    /// Reject an empty source.
    pub(crate) const fn check_not_empty(&self, source: &str) -> Result<()> {
        if source.is_empty() {
            return Err(ParseError::Empty { radix: self.radix });
        }
        Ok(())
    }

    /// Reject the first character that is not legal in `form`.
    pub(crate) fn check_symbols(&self, source: &str, form: Form) -> Result<()> {
        match source
            .chars()
            .enumerate()
            .find(|&(_, symbol)| !self.is_legal(symbol, form))
        {
            Some((position, symbol)) => Err(ParseError::IllegalSymbol {
                symbol,
                position,
                radix: self.radix,
            }),
            None => Ok(()),
        }
    }

    /// Reject a source whose leading characters carry this radix's negative marker.
    pub(crate) fn check_sign(&self, source: &str) -> Result<()> {
        if (self.implies_negative)(source) {
            return Err(ParseError::ImpliedNegative { radix: self.radix });
        }
        Ok(())
    }

    fn is_legal(&self, symbol: char, form: Form) -> bool {
        if symbol == '-' {
            return self.minus && form == Form::Signed;
        }
        match digit_value(symbol) {
            Some(_) if symbol.is_ascii_alphabetic() && !self.letters => false,
            Some(value) => value <= self.max_digit,
            None => false,
        }
    }
}

/// Sign check shared by all radixes for the radix-generic positive operation.
///
/// Both ends of the source are inspected for `F`, `f`, `-` and the pair `37`,
/// regardless of radix. A decimal `-` anywhere also implies a negative value, since
/// accumulation would stop at it and negate.
pub(crate) fn check_generic_sign(source: &str, radix: Radix) -> Result<()> {
    let marker = |symbol: char| matches!(symbol, 'F' | 'f' | '-');
    let negative = source.starts_with(marker)
        || source.ends_with(marker)
        || source.starts_with("37")
        || source.ends_with("37")
        || (radix == Radix::Decimal && source.contains('-'));

    if negative {
        return Err(ParseError::ImpliedNegative { radix });
    }
    Ok(())
}

fn octal_sign(source: &str) -> bool {
    source.starts_with("37")
}

fn hex_sign(source: &str) -> bool {
    source.starts_with(|symbol: char| matches!(symbol, 'F' | 'f'))
}

fn no_sign(_source: &str) -> bool {
    false
}
