// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::Rune;

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A rune has no UTF-8 encoding under the active validation.
///
/// When encoding, this is a rune outside of the encodable range.
/// With strict validation, decoding also reports overlong sequences, surrogates, and values past `U+10FFFF` using this error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub struct RuneError {
	/// The offending rune.
	pub value: Rune,
}

impl Display for RuneError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "rune ({:#X}) cannot be represented as utf-8", self.value)
	}
}

impl Error for RuneError { }
