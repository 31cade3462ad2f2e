//! Canonical handling of base field (`Fp`) coordinates.

use crate::{
    text::{self, Base},
    CodecError,
};
use blst::{blst_bendian_from_fp, blst_fp, blst_fp_from_bendian};
use num_bigint::BigUint;
use std::cmp::Ordering;

/// Length of a big-endian base field element.
pub(crate) const FP_LENGTH: usize = 48;

/// The base field modulus `p` in big-endian non-Montgomery form.
const MODULUS_REPR: [u8; FP_LENGTH] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// Returns true if the big-endian input is strictly less than `p`.
fn is_reduced(input: &[u8; FP_LENGTH]) -> bool {
    // Reference: https://github.com/bluealloy/revm/blob/main/crates/precompile/src/bls12_381/utils.rs
    for (i, modulus) in input.iter().zip(MODULUS_REPR.iter()) {
        match i.cmp(modulus) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => continue,
        }
    }
    false
}

/// Reads a big-endian field element, rejecting values that are not reduced modulo `p`.
pub(crate) fn from_bendian(input: &[u8; FP_LENGTH]) -> Option<blst_fp> {
    if !is_reduced(input) {
        return None;
    }
    let mut fp = blst_fp::default();
    unsafe {
        blst_fp_from_bendian(&mut fp, input.as_ptr());
    }
    Some(fp)
}

/// Writes a field element as a big-endian integer.
pub(crate) fn to_bendian(fp: &blst_fp) -> [u8; FP_LENGTH] {
    let mut out = [0u8; FP_LENGTH];
    unsafe {
        blst_bendian_from_fp(out.as_mut_ptr(), fp);
    }
    out
}

/// Parses a text token into a field element.
pub(crate) fn parse(token: &str, base: Base) -> Result<blst_fp, CodecError> {
    let value = text::parse_uint(token, base)?;
    let digits = value.to_bytes_be();
    if digits.len() > FP_LENGTH {
        return Err(text::invalid("Fp", "value not reduced modulo p"));
    }
    let mut bytes = [0u8; FP_LENGTH];
    bytes[FP_LENGTH - digits.len()..].copy_from_slice(&digits);
    from_bendian(&bytes).ok_or_else(|| text::invalid("Fp", "value not reduced modulo p"))
}

/// Formats a field element as a text token.
pub(crate) fn format(fp: &blst_fp, base: Base) -> String {
    text::format_uint(&BigUint::from_bytes_be(&to_bendian(fp)), base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_rejected() {
        assert!(from_bendian(&MODULUS_REPR).is_none());
        assert!(from_bendian(&[0xff; FP_LENGTH]).is_none());

        let mut below = MODULUS_REPR;
        below[FP_LENGTH - 1] -= 1;
        let fp = from_bendian(&below).unwrap();
        assert_eq!(to_bendian(&fp), below);
    }

    #[test]
    fn test_text_round_trip() {
        let fp = parse("123456789", Base::Decimal).unwrap();
        assert_eq!(format(&fp, Base::Decimal), "123456789");
        assert_eq!(format(&fp, Base::Hex), "75bcd15");

        let modulus = BigUint::from_bytes_be(&MODULUS_REPR);
        assert!(parse(&modulus.to_str_radix(10), Base::Decimal).is_err());
        let max = modulus - 1u32;
        let fp = parse(&max.to_str_radix(16), Base::Hex).unwrap();
        assert_eq!(BigUint::from_bytes_be(&to_bendian(&fp)), max);
    }

    #[test]
    fn test_oversized_rejected() {
        let oversized = format!("1{}", "0".repeat(FP_LENGTH * 2));
        assert!(parse(&oversized, Base::Hex).is_err());
    }
}
