//! Method-call surface over `str`.
//!
//! ```
//! use numeral_systems::NumeralStr;
//!
//! assert_eq!("7FF".parse_positive_from_hex(), Ok(2047));
//! assert_eq!("37777777601".parse_by_radix(8), Ok(-127));
//! assert_eq!("A675".try_parse_positive_from_decimal(), (false, 0));
//! ```

use crate::converter;
use crate::error::Result;

/// Numeral conversions callable directly on string slices.
///
/// Every method forwards to the free function of the same name in
/// [`converter`](crate::converter).
pub trait NumeralStr {
    /// See [`converter::parse_positive_from_octal`].
    ///
    /// # Errors
    ///
    /// Same as the free function.
    fn parse_positive_from_octal(&self) -> Result<i32>;

    /// See [`converter::parse_positive_from_decimal`].
    ///
    /// # Errors
    ///
    /// Same as the free function.
    fn parse_positive_from_decimal(&self) -> Result<i32>;

    /// See [`converter::parse_positive_from_hex`].
    ///
    /// # Errors
    ///
    /// Same as the free function.
    fn parse_positive_from_hex(&self) -> Result<i32>;

    /// See [`converter::parse_positive_by_radix`].
    ///
    /// # Errors
    ///
    /// Same as the free function.
    fn parse_positive_by_radix(&self, radix: i32) -> Result<i32>;

    /// See [`converter::parse_by_radix`].
    ///
    /// # Errors
    ///
    /// Same as the free function.
    fn parse_by_radix(&self, radix: i32) -> Result<i32>;

    /// See [`converter::try_parse_positive_from_octal`].
    fn try_parse_positive_from_octal(&self) -> (bool, i32);

    /// See [`converter::try_parse_positive_from_decimal`].
    fn try_parse_positive_from_decimal(&self) -> (bool, i32);

    /// See [`converter::try_parse_positive_from_hex`].
    fn try_parse_positive_from_hex(&self) -> (bool, i32);

    /// See [`converter::try_parse_positive_by_radix`].
    ///
    /// # Errors
    ///
    /// Only for an unsupported radix.
    fn try_parse_positive_by_radix(&self, radix: i32) -> Result<(bool, i32)>;

    /// See [`converter::try_parse_by_radix`].
    ///
    /// # Errors
    ///
    /// Only for an unsupported radix.
    fn try_parse_by_radix(&self, radix: i32) -> Result<(bool, i32)>;
}

impl NumeralStr for str {
    fn parse_positive_from_octal(&self) -> Result<i32> {
        converter::parse_positive_from_octal(self)
    }

    fn parse_positive_from_decimal(&self) -> Result<i32> {
        converter::parse_positive_from_decimal(self)
    }

    fn parse_positive_from_hex(&self) -> Result<i32> {
        converter::parse_positive_from_hex(self)
    }

    fn parse_positive_by_radix(&self, radix: i32) -> Result<i32> {
        converter::parse_positive_by_radix(self, radix)
    }

    fn parse_by_radix(&self, radix: i32) -> Result<i32> {
        converter::parse_by_radix(self, radix)
    }

    fn try_parse_positive_from_octal(&self) -> (bool, i32) {
        converter::try_parse_positive_from_octal(self)
    }

    fn try_parse_positive_from_decimal(&self) -> (bool, i32) {
        converter::try_parse_positive_from_decimal(self)
    }

    fn try_parse_positive_from_hex(&self) -> (bool, i32) {
        converter::try_parse_positive_from_hex(self)
    }

    fn try_parse_positive_by_radix(&self, radix: i32) -> Result<(bool, i32)> {
        converter::try_parse_positive_by_radix(self, radix)
    }

    fn try_parse_by_radix(&self, radix: i32) -> Result<(bool, i32)> {
        converter::try_parse_by_radix(self, radix)
    }
}
