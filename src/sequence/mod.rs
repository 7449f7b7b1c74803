// Copyright 2025 Gabriel Bjørnager Jensen.

mod test;

mod serde;

use crate::error::{CodecError, Utf8Error};
use crate::utf8::{self, MAX_SEQUENCE_LEN, Rune, Validation, decode_with};

use core::borrow::Borrow;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::Deref;

#[cfg(feature = "oct")]
use {
	crate::utf8::decoded_len,
	oct::decode::{self, Decode},
	oct::encode::{self, Encode, SizedEncode},
};

/// The UTF-8 encoding of a single rune.
///
/// This is an owned alternative to encoding into a caller-provided buffer: the octets are kept in a fixed-size array of [`MAX_SEQUENCE_LEN`] octets alongside the rune they encode.
/// All instances therefore have the same size, regardless of the sequence length.
///
/// # Examples
///
/// ```rust
/// use utf8codec::Sequence;
///
/// let s = Sequence::encode(0x20AC).unwrap();
///
/// assert_eq!(s.len(), 0x3);
/// assert_eq!(s.as_bytes(), b"\xE2\x82\xAC");
/// assert_eq!(s.rune(), 0x20AC);
/// ```
#[derive(Clone, Copy)]
pub struct Sequence {
	rune: Rune,
	len:  usize,
	buf:  [u8; MAX_SEQUENCE_LEN],
}

impl Sequence {
	/// Encodes a rune using lenient validation.
	///
	/// # Errors
	///
	/// See [`encode_with`](crate::encode_with).
	/// A [`LengthError`](crate::error::LengthError) is never returned.
	#[allow(clippy::same_name_method)]
	#[inline(always)]
	pub const fn encode(rune: Rune) -> Result<Self, CodecError> {
		Self::encode_with(rune, Validation::Lenient)
	}

	/// Encodes a rune.
	///
	/// The stored rune is the one that the octets decode to.
	/// This only differs from `rune` for negative runes, which lenient validation truncates to seven bits.
	///
	/// # Errors
	///
	/// If `rune` cannot be encoded under `validation`, then an error is returned.
	#[inline]
	pub const fn encode_with(rune: Rune, validation: Validation) -> Result<Self, CodecError> {
		let mut buf = [0x00; MAX_SEQUENCE_LEN];

		let len = match utf8::encode_with(rune, &mut buf, validation) {
			Ok(len) => len,
			Err(e)  => return Err(e),
		};

		let (octets, _) = buf.split_at(len);

		match decode_with(octets, Validation::Lenient) {
			Ok((rune, _)) => Ok(Self { rune, len, buf }),
			Err(e)        => Err(e),
		}
	}

	/// Constructs a sequence from UTF-8 octets.
	///
	/// The octets must contain exactly one sequence.
	///
	/// # Errors
	///
	/// If `bytes` does not start with a sequence that is valid under `validation`, then the error from [`decode_with`](crate::decode_with) is returned.
	///
	/// If `bytes` contains octets past the sequence, then a [`Utf8Error`] pointing at the first of these is returned.
	pub const fn from_bytes(bytes: &[u8], validation: Validation) -> Result<Self, CodecError> {
		let (rune, len) = match decode_with(bytes, validation) {
			Ok(v)  => v,
			Err(e) => return Err(e),
		};

		if bytes.len() > len {
			return Err(CodecError::Utf8(Utf8Error {
				value: bytes[len],
				index: len,
			}));
		}

		let mut buf = [0x00; MAX_SEQUENCE_LEN];

		let mut i = 0x0;
		while i < len {
			buf[i] = bytes[i];
			i += 0x1;
		}

		Ok(Self { rune, len, buf })
	}

	/// Retrieves the encoded rune.
	#[inline(always)]
	#[must_use]
	pub const fn rune(&self) -> Rune {
		self.rune
	}

	/// Retrieves the length of the sequence.
	///
	/// This is always between one and four octets, inclusive.
	#[allow(clippy::len_without_is_empty)]
	#[inline(always)]
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Borrows the octets of the sequence.
	#[inline(always)]
	#[must_use]
	pub const fn as_bytes(&self) -> &[u8] {
		let (buf, _) = self.buf.split_at(self.len);
		buf
	}
}

impl AsRef<[u8]> for Sequence {
	#[inline(always)]
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl Borrow<[u8]> for Sequence {
	#[inline(always)]
	fn borrow(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl Debug for Sequence {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Sequence({:#X}, {:02X?})", self.rune, self.as_bytes())
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Decode for Sequence {
	type Error = CodecError;

	/// Decodes the raw octets of a sequence.
	///
	/// The length is given by the lead octet.
	/// Sequences are validated strictly.
	#[inline]
	#[track_caller]
	fn decode(input: &mut decode::Input) -> Result<Self, Self::Error> {
		let Ok(lead) = <u8 as Decode>::decode(input);

		let Some(len) = decoded_len(lead) else {
			return Err(CodecError::Utf8(Utf8Error {
				value: lead,
				index: 0x0,
			}));
		};

		let mut buf = [0x00; MAX_SEQUENCE_LEN];

		buf[0x0] = lead;
		input.read_into(&mut buf[0x1..len]);

		Self::from_bytes(&buf[..len], Validation::Strict)
	}
}

impl Deref for Sequence {
	type Target = [u8];

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		self.as_bytes()
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Encode for Sequence {
	type Error = <u8 as Encode>::Error;

	/// Encodes the raw octets of the sequence.
	///
	/// No length prefix is written as the lead octet already determines the length.
	#[inline]
	#[track_caller]
	fn encode(&self, output: &mut encode::Output) -> Result<(), Self::Error> {
		for octet in self.as_bytes() {
			octet.encode(output)?;
		}

		Ok(())
	}
}

impl Eq for Sequence { }

impl From<char> for Sequence {
	#[inline]
	fn from(value: char) -> Self {
		let mut buf = [0x00; MAX_SEQUENCE_LEN];
		let len = value.encode_utf8(&mut buf).len();

		Self {
			rune: value as Rune,
			len,
			buf,
		}
	}
}

impl Hash for Sequence {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_bytes().hash(state)
	}
}

impl PartialEq for Sequence {
	#[inline(always)]
	fn eq(&self, other: &Self) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl PartialEq<[u8]> for Sequence {
	#[inline(always)]
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes() == other
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl SizedEncode for Sequence {
	const MAX_ENCODED_SIZE: usize = u8::MAX_ENCODED_SIZE * MAX_SEQUENCE_LEN;
}

impl TryFrom<Rune> for Sequence {
	type Error = CodecError;

	#[inline(always)]
	fn try_from(value: Rune) -> Result<Self, Self::Error> {
		Self::encode(value)
	}
}
