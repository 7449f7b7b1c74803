// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::CodecError;
use crate::utf8::{Rune, Validation, decode_with};

use core::iter::FusedIterator;

/// Iterator decoding the runes of a byte slice.
///
/// Each step is a single, independent call to [`decode_with`] at the current offset.
///
/// The first error is yielded and ends the iteration.
/// Recovering from it is left to the caller, who can inspect the undecoded remainder using [`as_bytes`](Self::as_bytes) and resume with a new iterator.
///
/// # Examples
///
/// ```rust
/// use utf8codec::Runes;
///
/// let mut runes = Runes::new(b"A\xFFB");
///
/// assert_eq!(runes.next(), Some(Ok(0x41)));
/// assert!(matches!(runes.next(), Some(Err(_))));
/// assert_eq!(runes.next(), None);
///
/// // Skip the bad octet and continue.
/// let rest = &runes.as_bytes()[0x1..];
/// assert_eq!(Runes::new(rest).collect::<Result<Vec<_>, _>>(), Ok(vec![0x42]));
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Runes<'a> {
	buf:        &'a [u8],
	offset:     usize,
	validation: Validation,
	failed:     bool,
}

impl<'a> Runes<'a> {
	/// Constructs a new iterator using lenient validation.
	#[inline(always)]
	pub const fn new(buf: &'a [u8]) -> Self {
		Self::with_validation(buf, Validation::Lenient)
	}

	/// Constructs a new iterator using the provided validation.
	#[inline(always)]
	pub const fn with_validation(buf: &'a [u8], validation: Validation) -> Self {
		Self {
			buf,
			offset: 0x0,
			validation,
			failed: false,
		}
	}

	/// Gets the octets that have not yet been decoded.
	///
	/// After an error, these start with the sequence that failed.
	#[inline(always)]
	#[must_use]
	pub const fn as_bytes(&self) -> &'a [u8] {
		self.buf
	}

	/// Gets the amount of octets that have been decoded.
	#[inline(always)]
	#[must_use]
	pub const fn offset(&self) -> usize {
		self.offset
	}
}

impl Iterator for Runes<'_> {
	type Item = Result<Rune, CodecError>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.failed || self.buf.is_empty() {
			return None;
		}

		match decode_with(self.buf, self.validation) {
			Ok((rune, len)) => {
				self.buf     = &self.buf[len..];
				self.offset += len;

				Some(Ok(rune))
			}

			Err(mut e) => {
				self.failed = true;

				if let CodecError::Utf8(ref mut inner) = e {
					inner.index += self.offset;
				}

				Some(Err(e))
			}
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.failed {
			return (0x0, Some(0x0));
		}

		// An error may end the iteration after a single
		// item.

		let len = self.buf.len();
		(usize::from(len != 0x0), Some(len))
	}
}

impl FusedIterator for Runes<'_> { }
