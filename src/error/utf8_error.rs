// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// An octet was found where it cannot occur in a UTF-8 sequence.
///
/// This is either a lead octet matching none of the four length prefixes or, with strict validation, a continuation octet not of the form `0b10xxxxxx`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub struct Utf8Error {
	/// The invalid UTF-8 octet.
	pub value: u8,

	/// The index of the invalid octet.
	pub index: usize,
}

impl Display for Utf8Error {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found invalid utf-8 octet {:#04X} at offset ({})", self.value, self.index)
	}
}

impl Error for Utf8Error { }
