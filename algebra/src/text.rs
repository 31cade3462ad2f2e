//! Human-readable encodings.
//!
//! Elements are written as whitespace-separated integer tokens. The numeric base of
//! each token is selected with [`Base`]:
//!
//! | Selector | Variant | Accepted input |
//! |----------|---------|----------------|
//! | 0 | [`Base::Auto`] | `0x`/`0X` prefix is hexadecimal, `0b`/`0B` prefix is binary, otherwise decimal |
//! | 2 | [`Base::Binary`] | binary digits, optional `0b` prefix |
//! | 10 | [`Base::Decimal`] | decimal digits |
//! | 16 | [`Base::Hex`] | hexadecimal digits (either case), optional `0x` prefix |
//!
//! Output never carries a prefix. [`Base::Auto`] and [`Base::Decimal`] both print decimal.

use crate::{CodecError, Error};
use num_bigint::BigUint;
use tracing::debug;

/// Numeric base of the integer tokens in a text encoding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Base {
    #[default]
    Auto,
    Binary,
    Decimal,
    Hex,
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(selector: u32) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Self::Auto),
            2 => Ok(Self::Binary),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hex),
            _ => Err(invalid("Base", "unsupported base").into()),
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        match base {
            Base::Auto => 0,
            Base::Binary => 2,
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }
}

fn strip_prefix<'a>(token: &'a str, lower: &str, upper: &str) -> Option<&'a str> {
    token.strip_prefix(lower).or_else(|| token.strip_prefix(upper))
}

/// Logs and returns a text rejection.
pub(crate) fn invalid(context: &'static str, reason: &'static str) -> CodecError {
    debug!(context, reason, "rejected text encoding");
    CodecError::Invalid(context, reason)
}

/// Splits a text encoding into its tokens.
pub(crate) fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Parses a single unsigned integer token.
pub(crate) fn parse_uint(token: &str, base: Base) -> Result<BigUint, CodecError> {
    let (digits, radix) = match base {
        Base::Auto => {
            if let Some(rest) = strip_prefix(token, "0x", "0X") {
                (rest, 16)
            } else if let Some(rest) = strip_prefix(token, "0b", "0B") {
                (rest, 2)
            } else {
                (token, 10)
            }
        }
        Base::Binary => (strip_prefix(token, "0b", "0B").unwrap_or(token), 2),
        Base::Decimal => (token, 10),
        Base::Hex => (strip_prefix(token, "0x", "0X").unwrap_or(token), 16),
    };
    if digits.is_empty() {
        return Err(invalid("integer", "missing digits"));
    }

    // `parse_bytes` tolerates `_` separators, which are not part of the format.
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid("integer", "digit outside of base"));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| invalid("integer", "malformed digits"))
}

/// Formats an unsigned integer without a prefix.
pub(crate) fn format_uint(value: &BigUint, base: Base) -> String {
    match base {
        Base::Auto | Base::Decimal => value.to_str_radix(10),
        Base::Binary => value.to_str_radix(2),
        Base::Hex => value.to_str_radix(16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("42", Base::Auto, 42 ; "auto decimal")]
    #[test_case("0x2a", Base::Auto, 42 ; "auto hex prefix")]
    #[test_case("0X2A", Base::Auto, 42 ; "auto upper hex prefix")]
    #[test_case("0b101010", Base::Auto, 42 ; "auto binary prefix")]
    #[test_case("42", Base::Decimal, 42 ; "decimal")]
    #[test_case("2a", Base::Hex, 42 ; "hex without prefix")]
    #[test_case("0x2A", Base::Hex, 42 ; "hex with prefix")]
    #[test_case("101010", Base::Binary, 42 ; "binary without prefix")]
    #[test_case("0", Base::Auto, 0 ; "zero")]
    fn test_parse_uint(token: &str, base: Base, expected: u64) {
        assert_eq!(parse_uint(token, base).unwrap(), BigUint::from(expected));
    }

    #[test_case("", Base::Auto ; "empty")]
    #[test_case("0x", Base::Auto ; "prefix only")]
    #[test_case("2a", Base::Decimal ; "hex digits in decimal")]
    #[test_case("0x2a", Base::Decimal ; "prefix in decimal")]
    #[test_case("102", Base::Binary ; "digit outside binary")]
    #[test_case("1_000", Base::Decimal ; "separator")]
    #[test_case("-1", Base::Decimal ; "sign")]
    #[test_case("g", Base::Hex ; "non hex digit")]
    fn test_parse_uint_rejects(token: &str, base: Base) {
        assert!(matches!(
            parse_uint(token, base),
            Err(CodecError::Invalid("integer", _))
        ));
    }

    #[test]
    fn test_base_selector() {
        for selector in [0u32, 2, 10, 16] {
            let base = Base::try_from(selector).unwrap();
            assert_eq!(u32::from(base), selector);
        }
        assert!(matches!(
            Base::try_from(8),
            Err(Error::InvalidEncoding(CodecError::Invalid("Base", _)))
        ));
    }

    #[test]
    fn test_format_uint() {
        let value = BigUint::from(255u32);
        assert_eq!(format_uint(&value, Base::Auto), "255");
        assert_eq!(format_uint(&value, Base::Decimal), "255");
        assert_eq!(format_uint(&value, Base::Hex), "ff");
        assert_eq!(format_uint(&value, Base::Binary), "11111111");
        for base in [Base::Auto, Base::Binary, Base::Decimal, Base::Hex] {
            assert_eq!(parse_uint(&format_uint(&value, base), base).unwrap(), value);
        }
    }
}
