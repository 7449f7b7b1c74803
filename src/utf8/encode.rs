// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::{CodecError, LengthError, RuneError};
use crate::utf8::{
	CONTINUATION_MASK,
	CONTINUATION_PREFIX,
	LEAD_MASKS,
	LEAD_PREFIXES,
	Rune,
	Validation,
	encoded_len,
};

#[cfg(feature = "alloc")]
use {
	crate::utf8::MAX_SEQUENCE_LEN,
	alloc::vec::Vec,
};

/// Encodes a rune into the start of `buf` using lenient validation.
///
/// See [`encode_with`] for details.
///
/// # Errors
///
/// See [`encode_with`].
#[inline(always)]
pub const fn encode(rune: Rune, buf: &mut [u8]) -> Result<usize, CodecError> {
	encode_with(rune, buf, Validation::Lenient)
}

/// Encodes a rune into the start of `buf`.
///
/// On success, the amount of octets written is returned.
/// This is always the shortest length that can represent `rune`, i.e. between one and four octets.
/// Octets past this length are left untouched.
///
/// # Errors
///
/// If `rune` cannot be encoded under `validation`, then a [`RuneError`] is returned.
///
/// If `buf` is shorter than the sequence, then a [`LengthError`] is returned.
///
/// In either case, `buf` is left unmodified.
///
/// # Examples
///
/// ```rust
/// use utf8codec::{Validation, encode_with};
///
/// let mut buf = [0x00; 0x4];
///
/// assert_eq!(encode_with(0x20AC, &mut buf, Validation::Strict), Ok(0x3));
/// assert_eq!(buf, [0xE2, 0x82, 0xAC, 0x00]);
///
/// assert!(encode_with(0xD800, &mut buf, Validation::Strict).is_err());
/// ```
pub const fn encode_with(rune: Rune, buf: &mut [u8], validation: Validation) -> Result<usize, CodecError> {
	let Some(len) = encoded_len(rune, validation) else {
		return Err(CodecError::Rune(RuneError { value: rune }));
	};

	if buf.len() < len {
		return Err(CodecError::Length(LengthError {
			remaining: buf.len(),
			count:     len,
		}));
	}

	// Continuation octets are assembled from the
	// back, six bits at a time. The lead octet gets
	// whatever remains.

	let mut rem = rune;

	let mut i = len - 0x1;
	while i > 0x0 {
		buf[i] = CONTINUATION_PREFIX | (rem as u8 & CONTINUATION_MASK);

		rem >>= 0x6;
		i    -= 0x1;
	}

	buf[0x0] = LEAD_PREFIXES[len - 0x1] | (rem as u8 & LEAD_MASKS[len - 0x1]);

	Ok(len)
}

/// Encodes a slice of runes into a vector of octets.
///
/// # Errors
///
/// If any rune cannot be encoded under `validation`, then a [`RuneError`] for the first such rune is returned.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn encode_all(runes: &[Rune], validation: Validation) -> Result<Vec<u8>, CodecError> {
	let mut octets = Vec::with_capacity(runes.len());
	let mut buf    = [0x00; MAX_SEQUENCE_LEN];

	for &rune in runes {
		let len = encode_with(rune, &mut buf, validation)?;
		octets.extend_from_slice(&buf[..len]);
	}

	Ok(octets)
}
