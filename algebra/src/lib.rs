//! Scalars, curve points, target group elements, and pairings over BLS12-381.
//!
//! # Overview
//!
//! This crate exposes the four algebraic structures of the BLS12-381 pairing:
//!
//! - [`Scalar`]: the prime-order scalar field `Fr` (integers modulo [`constants::order`]).
//! - [`G1`] and [`G2`]: the two elliptic-curve groups of order `r`.
//! - [`GT`]: the multiplicative target group, the image of [`pairing`].
//!
//! All elements are immutable `Copy` values. Group-law operations use the standard
//! operators (`+`, `-`, `*`) where the operation is total; fallible operations
//! (`divide`, `inverse`) return a [`Result`].
//!
//! # Canonical Encodings
//!
//! | Type | Bytes | Format |
//! |------|-------|--------|
//! | [`Scalar`] | 32 | big-endian integer `< r` |
//! | [`G1`] | 48 | compressed point (ZCash flags), identity = all zero bytes |
//! | [`G2`] | 96 | compressed point (`x.c1 \|\| x.c0`, ZCash flags), identity = all zero bytes |
//! | [`GT`] | 576 | twelve big-endian `Fp` coefficients in tower order |
//!
//! Decoding rejects any input that is not the canonical encoding of a valid element:
//! wrong length, unreduced coordinates, points off the curve or outside the order-`r`
//! subgroup, and the ZCash infinity form (`0xc0 00..00`), which is not canonical here.
//! Equality and [`std::hash::Hash`] agree with the canonical encoding.
//!
//! # Initialization
//!
//! [`engine::init`] selects the hash-to-group domain separation tags and must happen
//! before any other call in the process. If it is never called, the defaults from
//! [`engine::Config::default`] are installed on first use.
//!
//! # Example
//!
//! ```rust
//! use bls12381_algebra::{pairing, Element, Point, Scalar, G1, G2, GT};
//!
//! let a = Scalar::from_i64(5);
//! let b = Scalar::from_i64(7);
//!
//! // Bilinearity
//! let left = pairing(&(G1::generator() * a), &(G2::generator() * b));
//! let right = pairing(&G1::generator(), &G2::generator()).pow(&Scalar::from_i64(35));
//! assert_eq!(left, right);
//!
//! // Canonical encodings round-trip
//! let bytes = left.serialize().unwrap();
//! assert_eq!(bytes.len(), 576);
//! assert_eq!(GT::deserialize(&bytes).unwrap(), left);
//!
//! // Hashing to a group is deterministic
//! assert_eq!(G1::hash(b"test"), G1::hash(b"test"));
//! ```
//!
//! # Acknowledgements
//!
//! _The following crates were used as a reference when implementing this crate. If code is very similar
//! to the reference, it is accompanied by a comment and link._
//!
//! * <https://github.com/filecoin-project/blstrs> + <https://github.com/MystenLabs/fastcrypto>: Implementing operations over
//!   the BLS12-381 scalar field with <https://github.com/supranational/blst>.

pub mod constants;
pub mod engine;
mod fp;
pub mod group;
mod pairing;
pub mod text;
mod utils;

pub use bls12381_codec::Error as CodecError;
pub use group::{Additive, Element, Point, Scalar, G1, G2, GT};
pub use pairing::{multi_pairing, pairing};
pub use text::Base;

use thiserror::Error;

/// Errors that can occur when working with BLS12-381 elements.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] CodecError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("serialization failure: {0}")]
    SerializationFailure(&'static str),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("engine already initialized")]
    AlreadyInitialized,
    #[error("length mismatch: {g1} G1 elements, {g2} G2 elements")]
    LengthMismatch { g1: usize, g2: usize },
}
