//! The G2 group: points on the sextic twist over `Fp2` of order `r`.
//!
//! An `Fp2` coordinate `c0 + c1 * u` is written in text as the two tokens `c0 c1`,
//! while the compressed byte encoding places `c1` first.

use super::{bits, Additive, Element, Point, Scalar, COMPRESSION_FLAG, SIGN_FLAG};
use crate::{
    engine,
    fp::{self, FP_LENGTH},
    text::{self, Base},
    utils::hex,
    CodecError, Error,
};
use blst::{
    blst_fp2, blst_hash_to_g2, blst_p2, blst_p2_add_or_double, blst_p2_affine,
    blst_p2_affine_in_g2, blst_p2_affine_is_inf, blst_p2_affine_on_curve, blst_p2_cneg,
    blst_p2_compress, blst_p2_from_affine, blst_p2_is_equal, blst_p2_is_inf, blst_p2_mult,
    blst_p2_to_affine, blst_p2_uncompress, BLS12_381_G2, BLST_ERROR,
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

/// Length of a compressed G2 point.
pub const G2_ELEMENT_BYTE_LENGTH: usize = 96;

/// A point in G2.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct G2(blst_p2);

fn parse_fp2(c0: &str, c1: &str, base: Base) -> Result<blst_fp2, CodecError> {
    Ok(blst_fp2 {
        fp: [fp::parse(c0, base)?, fp::parse(c1, base)?],
    })
}

fn format_fp2(value: &blst_fp2, base: Base) -> String {
    format!(
        "{} {}",
        fp::format(&value.fp[0], base),
        fp::format(&value.fp[1], base)
    )
}

impl G2 {
    /// Hashes `message` to a point using the configured domain separation tag.
    pub fn hash(message: &[u8]) -> Self {
        <Self as Point>::map(message)
    }

    /// Formats the point as `"2 x.c0 x.c1"` or `"3 x.c0 x.c1"` (the latter when `y` is
    /// lexicographically largest), or `"0"` for the identity.
    pub fn to_compressed_str_radix(&self, base: Base) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let bytes: [u8; G2_ELEMENT_BYTE_LENGTH] = self.encode_fixed();
        let tag = if bytes[0] & SIGN_FLAG != 0 { "3" } else { "2" };
        let affine = self.as_blst_p2_affine();
        format!("{} {}", tag, format_fp2(&affine.x, base))
    }

    pub(crate) fn as_blst_p2_affine(&self) -> blst_p2_affine {
        let mut affine = blst_p2_affine::default();
        unsafe { blst_p2_to_affine(&mut affine, &self.0) };
        affine
    }

    fn from_affine(affine: &blst_p2_affine) -> Result<Self, CodecError> {
        unsafe {
            if blst_p2_affine_is_inf(affine) {
                return Err(text::invalid("G2", "identity must be written as 0"));
            }
            if !blst_p2_affine_on_curve(affine) {
                return Err(text::invalid("G2", "point not on curve"));
            }
            if !blst_p2_affine_in_g2(affine) {
                return Err(text::invalid("G2", "point not in subgroup"));
            }
            let mut ret = blst_p2::default();
            blst_p2_from_affine(&mut ret, affine);
            Ok(Self(ret))
        }
    }
}

impl PartialEq for G2 {
    fn eq(&self, other: &Self) -> bool {
        unsafe { blst_p2_is_equal(&self.0, &other.0) }
    }
}

impl Eq for G2 {}

impl Add for G2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut ret = blst_p2::default();
        unsafe { blst_p2_add_or_double(&mut ret, &self.0, &rhs.0) };
        Self(ret)
    }
}

impl Neg for G2 {
    type Output = Self;

    fn neg(self) -> Self {
        let mut ret = self.0;
        unsafe { blst_p2_cneg(&mut ret, true) };
        Self(ret)
    }
}

impl Sub for G2 {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul<Scalar> for G2 {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        if rhs.is_zero() {
            return Self::zero();
        }
        let scalar = rhs.as_blst_scalar();
        let mut ret = blst_p2::default();
        unsafe { blst_p2_mult(&mut ret, &self.0, scalar.b.as_ptr(), bits(&scalar)) };
        Self(ret)
    }
}

impl Write for G2 {
    fn write(&self, buf: &mut impl BufMut) {
        let mut bytes = [0u8; G2_ELEMENT_BYTE_LENGTH];
        if !self.is_zero() {
            unsafe { blst_p2_compress(bytes.as_mut_ptr(), &self.0) };
        }
        buf.put_slice(&bytes);
    }
}

impl Read for G2 {
    fn read(buf: &mut impl Buf) -> Result<Self, CodecError> {
        let bytes = <[u8; G2_ELEMENT_BYTE_LENGTH]>::read(buf)?;
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Self::zero());
        }
        let mut affine = blst_p2_affine::default();
        unsafe {
            match blst_p2_uncompress(&mut affine, bytes.as_ptr()) {
                BLST_ERROR::BLST_SUCCESS => {}
                BLST_ERROR::BLST_POINT_NOT_ON_CURVE => {
                    return Err(CodecError::Invalid("G2", "point not on curve"));
                }
                BLST_ERROR::BLST_POINT_NOT_IN_GROUP => {
                    return Err(CodecError::Invalid("G2", "point not in subgroup"));
                }
                _ => return Err(CodecError::Invalid("G2", "malformed compressed point")),
            }

            // The flagged infinity form is not the canonical identity
            if blst_p2_affine_is_inf(&affine) {
                return Err(CodecError::Invalid("G2", "non-canonical identity"));
            }

            // Verify that the deserialized element is in G2
            if !blst_p2_affine_in_g2(&affine) {
                return Err(CodecError::Invalid("G2", "point not in subgroup"));
            }

            let mut ret = blst_p2::default();
            blst_p2_from_affine(&mut ret, &affine);
            Ok(Self(ret))
        }
    }
}

impl FixedSize for G2 {
    const SIZE: usize = G2_ELEMENT_BYTE_LENGTH;
}

impl Element for G2 {
    fn from_str_radix(s: &str, base: Base) -> Result<Self, Error> {
        let tokens = text::tokens(s);
        match tokens[..] {
            ["0"] | ["1"] => Ok(Self::zero()),
            ["1", x0, x1, y0, y1] | [x0, x1, y0, y1] => {
                let affine = blst_p2_affine {
                    x: parse_fp2(x0, x1, base)?,
                    y: parse_fp2(y0, y1, base)?,
                };
                Ok(Self::from_affine(&affine)?)
            }
            [tag @ ("2" | "3"), x0, x1] => {
                let x = parse_fp2(x0, x1, base)?;
                let mut bytes = [0u8; G2_ELEMENT_BYTE_LENGTH];
                bytes[..FP_LENGTH].copy_from_slice(&fp::to_bendian(&x.fp[1]));
                bytes[FP_LENGTH..].copy_from_slice(&fp::to_bendian(&x.fp[0]));
                bytes[0] |= COMPRESSION_FLAG;
                if tag == "3" {
                    bytes[0] |= SIGN_FLAG;
                }
                Ok(Self::decode(&bytes[..])?)
            }
            _ => Err(text::invalid("G2", "unrecognized point format").into()),
        }
    }

    fn to_str_radix(&self, base: Base) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let affine = self.as_blst_p2_affine();
        format!(
            "1 {} {}",
            format_fp2(&affine.x, base),
            format_fp2(&affine.y, base)
        )
    }
}

impl Additive for G2 {
    fn zero() -> Self {
        Self(blst_p2::default())
    }

    fn is_zero(&self) -> bool {
        unsafe { blst_p2_is_inf(&self.0) }
    }
}

impl Point for G2 {
    fn generator() -> Self {
        let mut ret = blst_p2::default();
        unsafe { blst_p2_from_affine(&mut ret, &BLS12_381_G2) };
        Self(ret)
    }

    fn map(message: &[u8]) -> Self {
        Self::map_with_dst(message, &engine::config().g2_dst)
    }

    fn map_with_dst(message: &[u8], dst: &[u8]) -> Self {
        let mut ret = blst_p2::default();
        unsafe {
            blst_hash_to_g2(
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

impl Hash for G2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let bytes: [u8; G2_ELEMENT_BYTE_LENGTH] = self.encode_fixed();
        bytes.hash(state);
    }
}

impl FromStr for G2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, Base::Auto)
    }
}

impl Display for G2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str_radix(Base::Decimal))
    }
}

impl Debug for G2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bytes: [u8; G2_ELEMENT_BYTE_LENGTH] = self.encode_fixed();
        write!(f, "G2({})", hex(&bytes))
    }
}
