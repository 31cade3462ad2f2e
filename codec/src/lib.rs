//! Encode and decode fixed-width values.
//!
//! # Overview
//!
//! Every element of the BLS12-381 algebra has exactly one canonical byte string of a
//! size known at compile time. This crate provides the traits used to:
//! - Write a value into a buffer
//! - Read a value from untrusted input, rejecting anything that is not canonical
//!
//! Only fixed-size values are supported: [`Decode::decode`] rejects inputs that are
//! shorter ([`Error::EndOfBuffer`]) or longer ([`Error::ExtraData`]) than
//! [`FixedSize::SIZE`] before any element-specific validation runs.
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use bls12381_codec::{Decode, Encode, Error, FixedSize, Read, Write};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Tagged {
//!     tag: [u8; 1],
//!     body: [u8; 4],
//! }
//!
//! impl Write for Tagged {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.tag.write(buf);
//!         self.body.write(buf);
//!     }
//! }
//!
//! impl Read for Tagged {
//!     fn read(buf: &mut impl Buf) -> Result<Self, Error> {
//!         let tag = <[u8; 1]>::read(buf)?;
//!         if tag[0] > 1 {
//!             return Err(Error::Invalid("Tagged", "unknown tag"));
//!         }
//!         let body = <[u8; 4]>::read(buf)?;
//!         Ok(Self { tag, body })
//!     }
//! }
//!
//! impl FixedSize for Tagged {
//!     const SIZE: usize = 5;
//! }
//!
//! let value = Tagged { tag: [1], body: [0, 1, 2, 3] };
//! let encoded = value.encode();
//! assert_eq!(encoded.len(), Tagged::SIZE);
//! assert_eq!(Tagged::decode(encoded).unwrap(), value);
//! ```

pub mod codec;
pub mod error;
mod types;

pub use codec::{Codec, Decode, Encode, FixedSize, Read, Write};
pub use error::Error;
