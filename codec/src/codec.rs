//! Core codec traits

use crate::error::Error;
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Implementations should panic if the buffer doesn't have enough capacity.
    fn write(&self, buf: &mut impl BufMut);
}

/// Trait for types that can be read (decoded) from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer, consuming the necessary bytes.
    ///
    /// Returns an error if the bytes do not hold a canonical value.
    fn read(buf: &mut impl Buf) -> Result<Self, Error>;
}

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Trait for types that can be encoded.
pub trait Encode: Write + FixedSize {
    /// Encodes a value to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write [`FixedSize::SIZE`] bytes.
    fn encode(&self) -> BytesMut {
        let mut buffer = BytesMut::with_capacity(Self::SIZE);
        self.write(&mut buffer);
        assert_eq!(buffer.len(), Self::SIZE, "write() did not write expected bytes");
        buffer
    }

    /// Encodes a value to a fixed-size byte array.
    ///
    /// The caller MUST ensure `N` is equal to `Self::SIZE`.
    fn encode_fixed<const N: usize>(&self) -> [u8; N] {
        assert_eq!(
            N,
            Self::SIZE,
            "Can't encode {} bytes into {} bytes",
            Self::SIZE,
            N
        );
        let mut array = [0u8; N];
        let mut buf = &mut array[..];
        self.write(&mut buf);
        assert_eq!(buf.len(), 0);
        array
    }
}

impl<T: Write + FixedSize> Encode for T {}

/// Trait for types that can be decoded from a buffer holding exactly one value.
pub trait Decode: Read + FixedSize {
    /// Decodes a value from a buffer, ensuring the buffer has exactly [`FixedSize::SIZE`]
    /// bytes and is fully consumed.
    fn decode(mut buf: impl Buf) -> Result<Self, Error> {
        // Check the length before running any element-specific validation.
        if buf.remaining() < Self::SIZE {
            return Err(Error::EndOfBuffer);
        }
        if buf.remaining() > Self::SIZE {
            return Err(Error::ExtraData(buf.remaining() - Self::SIZE));
        }

        let result = Self::read(&mut buf)?;
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(result)
    }
}

impl<T: Read + FixedSize> Decode for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

impl<T: Encode + Decode> Codec for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_insufficient_buffer() {
        let encoded = Bytes::from_static(&[0x01, 0x02]);
        assert_eq!(<[u8; 3]>::decode(encoded), Err(Error::EndOfBuffer));
    }

    #[test]
    fn test_extra_data() {
        let encoded = Bytes::from_static(&[0x01, 0x02]);
        assert_eq!(<[u8; 1]>::decode(encoded), Err(Error::ExtraData(1)));
    }

    #[test]
    fn test_encode_fixed() {
        let value = [7u8; 4];
        let encoded: [u8; 4] = value.encode_fixed();
        let decoded = <[u8; 4]>::decode(&encoded[..]).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    #[should_panic(expected = "Can't encode 4 bytes into 5 bytes")]
    fn test_encode_fixed_panic() {
        let _: [u8; 5] = [0u8; 4].encode_fixed();
    }
}
