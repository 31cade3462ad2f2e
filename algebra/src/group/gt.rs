//! The target group GT: the order-`r` multiplicative subgroup of `Fp12`.
//!
//! Elements are written as their twelve `Fp` coefficients in tower order
//! (`Fp12 = Fp6[w]`, `Fp6 = Fp2[v]`, `Fp2 = Fp[u]`, lowest degree first).

use super::{Element, Scalar};
use crate::{
    fp::{self, FP_LENGTH},
    text::{self, Base},
    utils::hex,
    CodecError, Error,
};
use blst::{
    blst_fp, blst_fp12, blst_fp12_inverse, blst_fp12_is_one, blst_fp12_mul, blst_fp12_one,
    blst_fp12_sqr, blst_fp6,
};
use bls12381_codec::{Encode, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::Mul,
    str::FromStr,
};

/// Bit length of the group order `r`.
const ORDER_BITS: usize = 255;

/// Number of `Fp` coefficients of an `Fp12` element.
const COEFFICIENTS: usize = 12;

/// Length of an encoded GT element.
pub const GT_ELEMENT_BYTE_LENGTH: usize = COEFFICIENTS * FP_LENGTH;

/// An element of the target group.
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub struct GT(blst_fp12);

impl GT {
    pub(crate) fn from_blst_fp12(fp12: blst_fp12) -> Self {
        Self(fp12)
    }

    /// Returns the all-zero `Fp12` element.
    ///
    /// Zero is not a member of the group. It is representable so that the
    /// all-zero encoding has a value.
    pub fn zero() -> Self {
        // blst_fp12::default() is one, not zero
        Self(blst_fp12 {
            fp6: [blst_fp6::default(); 2],
        })
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self(unsafe { *blst_fp12_one() })
    }

    /// Returns true if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns true if the element is the multiplicative identity.
    pub fn is_one(&self) -> bool {
        unsafe { blst_fp12_is_one(&self.0) }
    }

    /// Computes the multiplicative inverse of the element.
    pub fn inverse(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut ret = blst_fp12::default();
        unsafe { blst_fp12_inverse(&mut ret, &self.0) };
        Ok(Self(ret))
    }

    /// Multiplies self by the inverse of `rhs`.
    pub fn divide(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(*self * rhs.inverse()?)
    }

    /// Raises the element to the power `exponent`.
    ///
    /// Every exponent runs the same sequence of squarings and multiplications.
    pub fn pow(&self, exponent: &Scalar) -> Self {
        let scalar = exponent.as_blst_scalar();
        let mut acc = Self::one();
        for i in (0..ORDER_BITS).rev() {
            acc = acc.square();
            let product = acc * *self;
            if (scalar.b[i / 8] >> (i % 8)) & 1 == 1 {
                acc = product;
            }
        }
        acc
    }

    fn square(&self) -> Self {
        let mut ret = blst_fp12::default();
        unsafe { blst_fp12_sqr(&mut ret, &self.0) };
        Self(ret)
    }

    /// Returns true if the element has order dividing `r`.
    fn in_subgroup(&self) -> bool {
        // x^(r-1) * x = x^r
        (self.pow(&-Scalar::one()) * *self).is_one()
    }

    fn coefficients(&self) -> impl Iterator<Item = &blst_fp> {
        self.0
            .fp6
            .iter()
            .flat_map(|fp6| fp6.fp2.iter())
            .flat_map(|fp2| fp2.fp.iter())
    }

    fn coefficients_mut(&mut self) -> impl Iterator<Item = &mut blst_fp> {
        self.0
            .fp6
            .iter_mut()
            .flat_map(|fp6| fp6.fp2.iter_mut())
            .flat_map(|fp2| fp2.fp.iter_mut())
    }
}

impl Default for GT {
    fn default() -> Self {
        Self::one()
    }
}

impl Mul for GT {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut ret = blst_fp12::default();
        unsafe { blst_fp12_mul(&mut ret, &self.0, &rhs.0) };
        Self(ret)
    }
}

impl Write for GT {
    fn write(&self, buf: &mut impl BufMut) {
        for coefficient in self.coefficients() {
            buf.put_slice(&fp::to_bendian(coefficient));
        }
    }
}

impl Read for GT {
    fn read(buf: &mut impl Buf) -> Result<Self, CodecError> {
        let mut ret = Self::zero();
        for coefficient in ret.coefficients_mut() {
            let bytes = <[u8; FP_LENGTH]>::read(buf)?;
            *coefficient = fp::from_bendian(&bytes)
                .ok_or(CodecError::Invalid("GT", "coefficient not reduced modulo p"))?;
        }
        if !ret.is_zero() && !ret.in_subgroup() {
            return Err(CodecError::Invalid("GT", "element not in subgroup"));
        }
        Ok(ret)
    }
}

impl FixedSize for GT {
    const SIZE: usize = GT_ELEMENT_BYTE_LENGTH;
}

impl Element for GT {
    /// Parses `"0"`, `"1"`, or twelve coefficients.
    ///
    /// Parsed coefficients are only checked to be reduced, not to form a group element.
    fn from_str_radix(s: &str, base: Base) -> Result<Self, Error> {
        let tokens = text::tokens(s);
        match tokens[..] {
            ["0"] => return Ok(Self::zero()),
            ["1"] => return Ok(Self::one()),
            _ => {}
        }
        if tokens.len() != COEFFICIENTS {
            return Err(text::invalid("GT", "expected twelve coefficients").into());
        }
        let mut ret = Self::zero();
        for (coefficient, token) in ret.coefficients_mut().zip(tokens) {
            *coefficient = fp::parse(token, base)?;
        }
        Ok(ret)
    }

    fn to_str_radix(&self, base: Base) -> String {
        self.coefficients()
            .map(|coefficient| fp::format(coefficient, base))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Hash for GT {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encode().hash(state);
    }
}

impl FromStr for GT {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, Base::Auto)
    }
}

impl Display for GT {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str_radix(Base::Decimal))
    }
}

impl Debug for GT {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GT({})", hex(&self.encode()))
    }
}
