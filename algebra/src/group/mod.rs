//! Group operations over BLS12-381 elements.
//!
//! The four element types share a common shape ([`Element`]) but not a common
//! group law: [`Scalar`], [`G1`], and [`G2`] are written additively ([`Additive`]),
//! while [`GT`] is multiplicative and exposes its operations as inherent methods.
//!
//! # Warning
//!
//! Points must belong to the correct subgroup (G1 or G2) to prevent small subgroup
//! attacks. Every constructor in this module (decoding, text parsing, hashing)
//! enforces this, and the group law preserves it.

mod g1;
mod g2;
mod gt;
mod scalar;

pub use g1::{G1, G1_ELEMENT_BYTE_LENGTH};
pub use g2::{G2, G2_ELEMENT_BYTE_LENGTH};
pub use gt::{GT, GT_ELEMENT_BYTE_LENGTH};
pub use scalar::{Scalar, SCALAR_LENGTH};

use crate::{text::Base, Error};
use blst::blst_scalar;
use bls12381_codec::Codec;
use rand::{CryptoRng, RngCore};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};
use tracing::debug;

/// Set on the first byte of every compressed non-identity point.
const COMPRESSION_FLAG: u8 = 0x80;

/// Set on the first byte of a compressed point when `y` is lexicographically largest.
const SIGN_FLAG: u8 = 0x20;

/// Returns the size in bits of a given blst_scalar (represented in little-endian).
fn bits(scalar: &blst_scalar) -> usize {
    let mut bits: usize = SCALAR_LENGTH * 8;
    for i in scalar.b.iter().rev() {
        let leading = i.leading_zeros();
        bits -= leading as usize;
        if leading < 8 {
            break;
        }
    }
    bits
}

/// An element with a canonical fixed-width encoding and a text form.
pub trait Element:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = Error> + Codec + Send + Sync + 'static
{
    /// Parses the text form of an element, reading integer tokens in `base`.
    fn from_str_radix(s: &str, base: Base) -> Result<Self, Error>;

    /// Formats the element, writing integer tokens in `base`.
    fn to_str_radix(&self, base: Base) -> String;

    /// Canonically serializes the element.
    ///
    /// Fails with [`Error::SerializationFailure`] if the encoder does not write
    /// exactly `SIZE` bytes.
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::with_capacity(Self::SIZE);
        self.write(&mut buf);
        if buf.len() != Self::SIZE {
            debug!(len = buf.len(), expected = Self::SIZE, "short encoding");
            return Err(Error::SerializationFailure("unexpected encoded length"));
        }
        Ok(buf)
    }

    /// Deserializes a canonically encoded element.
    fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        Self::decode(bytes).map_err(|err| {
            debug!(?err, len = bytes.len(), "rejected encoding");
            Error::InvalidEncoding(err)
        })
    }
}

/// An element of a group written additively.
pub trait Additive:
    Element + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self>
{
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns true if the element is the additive identity.
    fn is_zero(&self) -> bool;
}

/// An element of an elliptic-curve group of order `r`.
pub trait Point: Additive + Mul<Scalar, Output = Self> {
    /// Returns the canonical generator of the group.
    fn generator() -> Self;

    /// Maps the provided data to a group element using the domain separation tag
    /// from [`crate::engine::config`].
    fn map(message: &[u8]) -> Self;

    /// Maps the provided data to a group element using the provided domain
    /// separation tag.
    fn map_with_dst(message: &[u8], dst: &[u8]) -> Self;

    /// Samples a uniformly random element.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::generator() * Scalar::random(rng)
    }
}
