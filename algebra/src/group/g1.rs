//! The G1 group: points on `y^2 = x^3 + 4` over `Fp` of order `r`.

use super::{bits, Additive, Element, Point, Scalar, COMPRESSION_FLAG, SIGN_FLAG};
use crate::{
    engine, fp,
    text::{self, Base},
    utils::hex,
    CodecError, Error,
};
use blst::{
    blst_hash_to_g1, blst_p1, blst_p1_add_or_double, blst_p1_affine, blst_p1_affine_in_g1,
    blst_p1_affine_is_inf, blst_p1_affine_on_curve, blst_p1_cneg, blst_p1_compress,
    blst_p1_from_affine, blst_p1_is_equal, blst_p1_is_inf, blst_p1_mult, blst_p1_to_affine,
    blst_p1_uncompress, BLS12_381_G1, BLST_ERROR,
};
use bls12381_codec::{Decode, Encode, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
    ptr,
    str::FromStr,
};

/// Length of a compressed G1 point.
pub const G1_ELEMENT_BYTE_LENGTH: usize = 48;

/// A point in G1.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct G1(blst_p1);

impl G1 {
    /// Hashes `message` to a point using the configured domain separation tag.
    pub fn hash(message: &[u8]) -> Self {
        <Self as Point>::map(message)
    }

    /// Formats the point as `"2 x"` or `"3 x"` (the latter when `y` is
    /// lexicographically largest), or `"0"` for the identity.
    pub fn to_compressed_str_radix(&self, base: Base) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let bytes: [u8; G1_ELEMENT_BYTE_LENGTH] = self.encode_fixed();
        let tag = if bytes[0] & SIGN_FLAG != 0 { "3" } else { "2" };
        let affine = self.as_blst_p1_affine();
        format!("{} {}", tag, fp::format(&affine.x, base))
    }

    pub(crate) fn as_blst_p1_affine(&self) -> blst_p1_affine {
        let mut affine = blst_p1_affine::default();
        unsafe { blst_p1_to_affine(&mut affine, &self.0) };
        affine
    }

    fn from_affine(affine: &blst_p1_affine) -> Result<Self, CodecError> {
        unsafe {
            if blst_p1_affine_is_inf(affine) {
                return Err(text::invalid("G1", "identity must be written as 0"));
            }
            if !blst_p1_affine_on_curve(affine) {
                return Err(text::invalid("G1", "point not on curve"));
            }
            if !blst_p1_affine_in_g1(affine) {
                return Err(text::invalid("G1", "point not in subgroup"));
            }
            let mut ret = blst_p1::default();
            blst_p1_from_affine(&mut ret, affine);
            Ok(Self(ret))
        }
    }
}

impl PartialEq for G1 {
    fn eq(&self, other: &Self) -> bool {
        unsafe { blst_p1_is_equal(&self.0, &other.0) }
    }
}

impl Eq for G1 {}

impl Add for G1 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut ret = blst_p1::default();
        unsafe { blst_p1_add_or_double(&mut ret, &self.0, &rhs.0) };
        Self(ret)
    }
}

impl Neg for G1 {
    type Output = Self;

    fn neg(self) -> Self {
        let mut ret = self.0;
        unsafe { blst_p1_cneg(&mut ret, true) };
        Self(ret)
    }
}

impl Sub for G1 {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul<Scalar> for G1 {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        if rhs.is_zero() {
            return Self::zero();
        }
        let scalar = rhs.as_blst_scalar();
        let mut ret = blst_p1::default();
        unsafe { blst_p1_mult(&mut ret, &self.0, scalar.b.as_ptr(), bits(&scalar)) };
        Self(ret)
    }
}

impl Write for G1 {
    fn write(&self, buf: &mut impl BufMut) {
        let mut bytes = [0u8; G1_ELEMENT_BYTE_LENGTH];
        if !self.is_zero() {
            unsafe { blst_p1_compress(bytes.as_mut_ptr(), &self.0) };
        }
        buf.put_slice(&bytes);
    }
}

impl Read for G1 {
    fn read(buf: &mut impl Buf) -> Result<Self, CodecError> {
        let bytes = <[u8; G1_ELEMENT_BYTE_LENGTH]>::read(buf)?;
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Self::zero());
        }
        let mut affine = blst_p1_affine::default();
        unsafe {
            match blst_p1_uncompress(&mut affine, bytes.as_ptr()) {
                BLST_ERROR::BLST_SUCCESS => {}
                BLST_ERROR::BLST_POINT_NOT_ON_CURVE => {
                    return Err(CodecError::Invalid("G1", "point not on curve"));
                }
                BLST_ERROR::BLST_POINT_NOT_IN_GROUP => {
                    return Err(CodecError::Invalid("G1", "point not in subgroup"));
                }
                _ => return Err(CodecError::Invalid("G1", "malformed compressed point")),
            }

            // The flagged infinity form is not the canonical identity
            if blst_p1_affine_is_inf(&affine) {
                return Err(CodecError::Invalid("G1", "non-canonical identity"));
            }

            // Verify that the deserialized element is in G1
            if !blst_p1_affine_in_g1(&affine) {
                return Err(CodecError::Invalid("G1", "point not in subgroup"));
            }

            let mut ret = blst_p1::default();
            blst_p1_from_affine(&mut ret, &affine);
            Ok(Self(ret))
        }
    }
}

impl FixedSize for G1 {
    const SIZE: usize = G1_ELEMENT_BYTE_LENGTH;
}

impl Element for G1 {
    fn from_str_radix(s: &str, base: Base) -> Result<Self, Error> {
        let tokens = text::tokens(s);
        match tokens[..] {
            ["0"] | ["1"] => Ok(Self::zero()),
            // A leading 2 or 3 always selects the compressed form
            [tag @ ("2" | "3"), x] => {
                let mut bytes = fp::to_bendian(&fp::parse(x, base)?);
                bytes[0] |= COMPRESSION_FLAG;
                if tag == "3" {
                    bytes[0] |= SIGN_FLAG;
                }
                Ok(Self::decode(&bytes[..])?)
            }
            ["1", x, y] | [x, y] => {
                let affine = blst_p1_affine {
                    x: fp::parse(x, base)?,
                    y: fp::parse(y, base)?,
                };
                Ok(Self::from_affine(&affine)?)
            }
            _ => Err(text::invalid("G1", "unrecognized point format").into()),
        }
    }

    fn to_str_radix(&self, base: Base) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let affine = self.as_blst_p1_affine();
        format!(
            "1 {} {}",
            fp::format(&affine.x, base),
            fp::format(&affine.y, base)
        )
    }
}

impl Additive for G1 {
    fn zero() -> Self {
        Self(blst_p1::default())
    }

    fn is_zero(&self) -> bool {
        unsafe { blst_p1_is_inf(&self.0) }
    }
}

impl Point for G1 {
    fn generator() -> Self {
        let mut ret = blst_p1::default();
        unsafe { blst_p1_from_affine(&mut ret, &BLS12_381_G1) };
        Self(ret)
    }

    fn map(message: &[u8]) -> Self {
        Self::map_with_dst(message, &engine::config().g1_dst)
    }

    fn map_with_dst(message: &[u8], dst: &[u8]) -> Self {
        let mut ret = blst_p1::default();
        unsafe {
            blst_hash_to_g1(
                &mut ret,
                message.as_ptr(),
                message.len(),
                dst.as_ptr(),
                dst.len(),
                ptr::null(),
                0,
            );
        }
        Self(ret)
    }
}

impl Hash for G1 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let bytes: [u8; G1_ELEMENT_BYTE_LENGTH] = self.encode_fixed();
        bytes.hash(state);
    }
}

impl FromStr for G1 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, Base::Auto)
    }
}

impl Display for G1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str_radix(Base::Decimal))
    }
}

impl Debug for G1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bytes: [u8; G1_ELEMENT_BYTE_LENGTH] = self.encode_fixed();
        write!(f, "G1({})", hex(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;
    use rand::{rngs::StdRng, SeedableRng};

    const COMPRESSED_GENERATOR: &str = "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

    #[test]
    fn basic_group() {
        let mut rng = StdRng::seed_from_u64(0);
        let s = Scalar::random(&mut rng);
        let s2 = (s + s) * s;

        // p1 = s2 * G = (s+s)sG
        let p1 = G1::generator() * s2;

        // p2 = sG + sG
        let p2 = G1::generator() * s;
        let p2 = p2 + p2;
        assert_eq!(p1, p2 * s);
    }

    #[test]
    fn test_generator_encoding() {
        let bytes = G1::generator().serialize().unwrap();
        assert_eq!(hex(&bytes), COMPRESSED_GENERATOR);
        assert_eq!(G1::deserialize(&bytes).unwrap(), G1::generator());
        assert_eq!(
            G1::from_str(constants::G1_GENERATOR).unwrap(),
            G1::generator()
        );
    }

    #[test]
    fn test_identity() {
        let zero = G1::zero();
        assert!(zero.is_zero());
        assert!(!G1::generator().is_zero());
        assert_eq!(zero.serialize().unwrap(), vec![0u8; G1_ELEMENT_BYTE_LENGTH]);
        assert_eq!(
            G1::deserialize(&[0u8; G1_ELEMENT_BYTE_LENGTH]).unwrap(),
            zero
        );
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.to_compressed_str_radix(Base::Hex), "0");
        assert_eq!(G1::from_str("0").unwrap(), zero);
        assert_eq!(G1::from_str("1").unwrap(), zero);
        assert_eq!(G1::generator() * Scalar::zero(), zero);
        assert_eq!(G1::generator() - G1::generator(), zero);
    }

    #[test]
    fn test_rejects_flagged_infinity() {
        let mut bytes = [0u8; G1_ELEMENT_BYTE_LENGTH];
        bytes[0] = 0xc0;
        assert!(matches!(
            G1::deserialize(&bytes),
            Err(Error::InvalidEncoding(CodecError::Invalid("G1", _)))
        ));
    }

    #[test]
    fn test_rejects_uncompressed_flag() {
        let mut bytes = G1::generator().serialize().unwrap();
        bytes[0] &= !COMPRESSION_FLAG;
        assert!(G1::deserialize(&bytes).is_err());
    }

    #[test]
    fn test_rejects_outside_subgroup() {
        // (0, 2) is on the curve but has order 3
        let mut bytes = [0u8; G1_ELEMENT_BYTE_LENGTH];
        bytes[0] = COMPRESSION_FLAG;
        assert!(matches!(
            G1::deserialize(&bytes),
            Err(Error::InvalidEncoding(CodecError::Invalid(
                "G1",
                "point not in subgroup"
            )))
        ));
        assert!(G1::from_str("1 0 2").is_err());
        assert!(G1::from_str("2 0").is_err());
    }

    #[test]
    fn test_rejects_off_curve() {
        assert!(matches!(
            G1::from_str("1 1 1"),
            Err(Error::InvalidEncoding(CodecError::Invalid(
                "G1",
                "point not on curve"
            )))
        ));
        assert!(G1::from_str("1 0 0").is_err());
    }

    #[test]
    fn test_rejects_lengths() {
        assert!(matches!(
            G1::deserialize(&[0u8; G1_ELEMENT_BYTE_LENGTH - 1]),
            Err(Error::InvalidEncoding(CodecError::EndOfBuffer))
        ));
        assert!(matches!(
            G1::deserialize(&[0u8; G1_ELEMENT_BYTE_LENGTH + 1]),
            Err(Error::InvalidEncoding(CodecError::ExtraData(1)))
        ));
    }

    #[test]
    fn test_text_round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..8 {
            let point = G1::random(&mut rng);
            assert_eq!(point.to_string().parse::<G1>().unwrap(), point);
            for base in [Base::Binary, Base::Decimal, Base::Hex] {
                let raw = point.to_str_radix(base);
                assert_eq!(G1::from_str_radix(&raw, base).unwrap(), point);
                let compressed = point.to_compressed_str_radix(base);
                assert_eq!(G1::from_str_radix(&compressed, base).unwrap(), point);
            }

            // Both compressed tags resolve to the point or its negation
            let flipped = point.to_compressed_str_radix(Base::Hex);
            let flipped = match flipped.strip_prefix("2 ") {
                Some(x) => format!("3 {}", x),
                None => format!("2 {}", &flipped[2..]),
            };
            assert_eq!(G1::from_str_radix(&flipped, Base::Hex).unwrap(), -point);
        }
    }

    #[test]
    fn test_text_without_tag() {
        let tagged = G1::generator().to_str_radix(Base::Hex);
        let untagged = tagged.strip_prefix("1 ").unwrap();
        assert_eq!(
            G1::from_str_radix(untagged, Base::Hex).unwrap(),
            G1::generator()
        );
        assert!(G1::from_str("4 1").is_err());
        assert!(G1::from_str("").is_err());
    }

    #[test]
    fn test_map() {
        let a = G1::hash(b"abc");
        assert_eq!(a, G1::hash(b"abc"));
        assert_ne!(a, G1::hash(b"abd"));
        assert!(!a.is_zero());
        assert_ne!(a, G1::map_with_dst(b"abc", b"OTHER-DST"));
        assert_eq!(G1::deserialize(&a.serialize().unwrap()).unwrap(), a);
    }

    #[test]
    fn test_equality_across_representations() {
        // Projective coordinates differ but the points are equal
        let g = G1::generator();
        let doubled = g + g;
        let scaled = g * Scalar::from_i64(2);
        assert_eq!(doubled, scaled);
        assert_eq!(doubled.encode(), scaled.encode());
        assert_eq!(format!("{:?}", doubled), format!("{:?}", scaled));
    }
}
