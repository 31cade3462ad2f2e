//! The BLS12-381 scalar field `Fr`.

use super::{Additive, Element};
use crate::{
    text::{self, Base},
    utils::hex,
    CodecError, Error,
};
use blst::{
    blst_bendian_from_scalar, blst_fr, blst_fr_add, blst_fr_from_scalar, blst_fr_from_uint64,
    blst_fr_inverse, blst_fr_mul, blst_fr_sub, blst_keygen_v3, blst_scalar, blst_scalar_fr_check,
    blst_scalar_from_bendian, blst_scalar_from_fr,
};
use bls12381_codec::{Decode, Encode, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
    ptr,
    str::FromStr,
};
use zeroize::Zeroize;

/// Length of a canonically encoded scalar.
pub const SCALAR_LENGTH: usize = 32;

/// An integer modulo the group order `r`.
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub struct Scalar(blst_fr);

/// `R = 2^256 mod q` in little-endian Montgomery form which is equivalent to 1 in little-endian
/// non-Montgomery form.
///
/// mod(2^256, 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001) = 0x1824b159acc5056f998c4fefecbc4ff55884b7fa0003480200000001fffffffe
// Reference: https://github.com/filecoin-project/blstrs/blob/ffbb41d1495d84e40a712583346439924603b49a/src/scalar.rs#L77-L89
const BLST_FR_ONE: Scalar = Scalar(blst_fr {
    l: [
        0x0000_0001_ffff_fffe,
        0x5884_b7fa_0003_4802,
        0x998c_4fef_ecbc_4ff5,
        0x1824_b159_acc5_056f,
    ],
});

impl Scalar {
    /// Generates a random scalar using the provided RNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        // Generate a random 64 byte buffer
        let mut ikm = [0u8; 64];
        rng.fill_bytes(&mut ikm);

        // Generate a scalar from the randomly populated buffer
        let mut ret = blst_fr::default();
        unsafe {
            let mut sc = blst_scalar::default();
            blst_keygen_v3(&mut sc, ikm.as_ptr(), ikm.len(), ptr::null(), 0);
            blst_fr_from_scalar(&mut ret, &sc);
        }
        ikm.zeroize();
        Self(ret)
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        BLST_FR_ONE
    }

    /// Returns true if the scalar is the multiplicative identity.
    pub fn is_one(&self) -> bool {
        *self == BLST_FR_ONE
    }

    /// Returns the scalar equal to `value`.
    pub fn from_u64(value: u64) -> Self {
        // blst requires a buffer of 4 uint64 values. Failure to provide one will
        // result in unexpected behavior (will read past the provided buffer).
        //
        // Reference: https://github.com/supranational/blst/blob/415d4f0e2347a794091836a3065206edfd9c72f3/bindings/blst.h#L102
        let buffer = [value, 0, 0, 0];
        let mut ret = blst_fr::default();
        unsafe { blst_fr_from_uint64(&mut ret, buffer.as_ptr()) };
        Self(ret)
    }

    /// Returns the scalar equal to `value` modulo `r` (negative values wrap around).
    pub fn from_i64(value: i64) -> Self {
        let magnitude = Self::from_u64(value.unsigned_abs());
        if value < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Computes the multiplicative inverse of the scalar.
    pub fn inverse(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut ret = blst_fr::default();
        unsafe { blst_fr_inverse(&mut ret, &self.0) };
        Ok(Self(ret))
    }

    /// Multiplies self by the inverse of `rhs`.
    pub fn divide(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(*self * rhs.inverse()?)
    }

    /// Returns the scalar in the form expected by blst's point multiplication.
    pub(crate) fn as_blst_scalar(&self) -> blst_scalar {
        let mut scalar = blst_scalar::default();
        unsafe { blst_scalar_from_fr(&mut scalar, &self.0) };
        scalar
    }

    fn to_biguint(self) -> BigUint {
        let bytes: [u8; SCALAR_LENGTH] = self.encode_fixed();
        BigUint::from_bytes_be(&bytes)
    }

    fn from_biguint(value: &BigUint) -> Result<Self, CodecError> {
        let digits = value.to_bytes_be();
        if digits.len() > SCALAR_LENGTH {
            return Err(text::invalid("Scalar", "value not reduced modulo r"));
        }
        let mut bytes = [0u8; SCALAR_LENGTH];
        bytes[SCALAR_LENGTH - digits.len()..].copy_from_slice(&digits);
        Self::decode(&bytes[..])
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.l.zeroize();
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut ret = blst_fr::default();
        unsafe { blst_fr_add(&mut ret, &self.0, &rhs.0) };
        Self(ret)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut ret = blst_fr::default();
        unsafe { blst_fr_sub(&mut ret, &self.0, &rhs.0) };
        Self(ret)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut ret = blst_fr::default();
        unsafe { blst_fr_mul(&mut ret, &self.0, &rhs.0) };
        Self(ret)
    }
}

impl Write for Scalar {
    fn write(&self, buf: &mut impl BufMut) {
        let mut bytes = [0u8; SCALAR_LENGTH];
        unsafe { blst_bendian_from_scalar(bytes.as_mut_ptr(), &self.as_blst_scalar()) };
        buf.put_slice(&bytes);
    }
}

impl Read for Scalar {
    fn read(buf: &mut impl Buf) -> Result<Self, CodecError> {
        let bytes = <[u8; SCALAR_LENGTH]>::read(buf)?;
        let mut ret = blst_fr::default();
        unsafe {
            let mut scalar = blst_scalar::default();
            blst_scalar_from_bendian(&mut scalar, bytes.as_ptr());
            if !blst_scalar_fr_check(&scalar) {
                return Err(CodecError::Invalid("Scalar", "value not reduced modulo r"));
            }
            blst_fr_from_scalar(&mut ret, &scalar);
        }
        Ok(Self(ret))
    }
}

impl FixedSize for Scalar {
    const SIZE: usize = SCALAR_LENGTH;
}

impl Element for Scalar {
    fn from_str_radix(s: &str, base: Base) -> Result<Self, Error> {
        let tokens = text::tokens(s);
        let [token] = tokens[..] else {
            return Err(text::invalid("Scalar", "expected a single integer").into());
        };
        let (negative, digits) = match token.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, token),
        };
        let value = Self::from_biguint(&text::parse_uint(digits, base)?)?;
        Ok(if negative { -value } else { value })
    }

    fn to_str_radix(&self, base: Base) -> String {
        text::format_uint(&self.to_biguint(), base)
    }
}

impl Additive for Scalar {
    fn zero() -> Self {
        Self(blst_fr::default())
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let bytes: [u8; SCALAR_LENGTH] = self.encode_fixed();
        bytes.hash(state);
    }
}

impl FromStr for Scalar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, Base::Auto)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str_radix(Base::Decimal))
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bytes: [u8; SCALAR_LENGTH] = self.encode_fixed();
        write!(f, "Scalar({})", hex(&bytes))
    }
}
