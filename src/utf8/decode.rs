// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::{CodecError, LengthError, RuneError, Utf8Error};
use crate::utf8::{
	CONTINUATION_MASK,
	CONTINUATION_PREFIX,
	LEAD_MASKS,
	Rune,
	Validation,
	decoded_len,
	encoded_len,
};

#[cfg(feature = "alloc")]
use {
	crate::utf8::Runes,
	alloc::vec::Vec,
};

/// Decodes the rune at the start of `buf` using lenient validation.
///
/// See [`decode_with`] for details.
///
/// # Errors
///
/// See [`decode_with`].
#[inline(always)]
pub const fn decode(buf: &[u8]) -> Result<(Rune, usize), CodecError> {
	decode_with(buf, Validation::Lenient)
}

/// Decodes the rune at the start of `buf`.
///
/// The sequence length is determined by the first octet.
/// On success, the rune is returned together with this length.
/// Octets past the sequence are not inspected.
///
/// # Errors
///
/// If the first octet is not a lead octet, then a [`Utf8Error`] is returned.
///
/// If `buf` is shorter than the sequence (including if it is empty), then a [`LengthError`] is returned.
///
/// With strict validation, a [`Utf8Error`] is also returned for a malformed continuation octet, and a [`RuneError`] for an overlong sequence or a value that is not a Unicode scalar value.
///
/// # Examples
///
/// ```rust
/// use utf8codec::{Validation, decode_with};
///
/// assert_eq!(decode_with(b"\xE2\x82\xAC", Validation::Lenient), Ok((0x20AC, 0x3)));
///
/// // An overlong `/`.
/// assert!(decode_with(b"\xC0\xAF", Validation::Lenient).is_ok());
/// assert!(decode_with(b"\xC0\xAF", Validation::Strict).is_err());
/// ```
pub const fn decode_with(buf: &[u8], validation: Validation) -> Result<(Rune, usize), CodecError> {
	let &[lead, ..] = buf else {
		return Err(CodecError::Length(LengthError {
			remaining: 0x0,
			count:     0x1,
		}));
	};

	let Some(len) = decoded_len(lead) else {
		return Err(CodecError::Utf8(Utf8Error {
			value: lead,
			index: 0x0,
		}));
	};

	if buf.len() < len {
		return Err(CodecError::Length(LengthError {
			remaining: buf.len(),
			count:     len,
		}));
	}

	let mut rune = (lead & LEAD_MASKS[len - 0x1]) as Rune;

	let mut i = 0x1;
	while i < len {
		let octet = buf[i];

		if validation.is_strict() && octet & !CONTINUATION_MASK != CONTINUATION_PREFIX {
			return Err(CodecError::Utf8(Utf8Error {
				value: octet,
				index: i,
			}));
		}

		rune <<= 0x6;
		rune |= (octet & CONTINUATION_MASK) as Rune;

		i += 0x1;
	}

	// A strictly valid sequence has exactly the
	// length that the encoder would produce. This
	// also covers surrogates and the upper bound.

	if validation.is_strict() {
		match encoded_len(rune, Validation::Strict) {
			Some(expected) if expected == len => { }

			_ => return Err(CodecError::Rune(RuneError { value: rune })),
		}
	}

	Ok((rune, len))
}

/// Decodes all runes in `buf`.
///
/// # Errors
///
/// The first error encountered is returned.
/// The index of a [`Utf8Error`] is relative to the start of `buf`.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn decode_all(buf: &[u8], validation: Validation) -> Result<Vec<Rune>, CodecError> {
	Runes::with_validation(buf, validation).collect()
}
