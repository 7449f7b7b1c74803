// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::{LengthError, RuneError, Utf8Error};

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// The class of a [`CodecError`].
///
/// The discriminants are the numeric error codes used by C-style UTF-8 codecs, which report errors through the same channel as byte counts.
/// Both are greater than the longest sequence (four octets) and can therefore never be confused with a count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum ErrorKind {
	/// The rune cannot be encoded, or the octets do not form a rune.
	InvalidCodePoint = 0x8,

	/// The buffer is shorter than the sequence requires.
	NotEnoughBytes = 0x9,
}

impl ErrorKind {
	/// Retrieves the numeric error code.
	#[inline(always)]
	#[must_use]
	pub const fn code(self) -> u8 {
		self as u8
	}
}

impl Display for ErrorKind {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let s = match *self {
			Self::InvalidCodePoint => "invalid code point",
			Self::NotEnoughBytes   => "not enough bytes",
		};

		f.write_str(s)
	}
}

/// An encode or decode call failed.
///
/// Failures are terminal for the call that reported them: nothing is written to the destination and nothing is consumed from the source.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub enum CodecError {
	/// See [`RuneError`].
	Rune(RuneError),

	/// See [`Utf8Error`].
	Utf8(Utf8Error),

	/// See [`LengthError`].
	Length(LengthError),
}

impl CodecError {
	/// Classifies the error.
	#[inline]
	#[must_use]
	pub const fn kind(&self) -> ErrorKind {
		match *self {
			Self::Rune(_) | Self::Utf8(_) => ErrorKind::InvalidCodePoint,
			Self::Length(_)               => ErrorKind::NotEnoughBytes,
		}
	}
}

impl Display for CodecError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let e: &dyn Display = match *self {
			Self::Rune(ref e)   => e,
			Self::Utf8(ref e)   => e,
			Self::Length(ref e) => e,
		};

		write!(f, "{}: {e}", self.kind())
	}
}

impl Error for CodecError {
	#[inline]
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match *self {
			Self::Rune(ref e)   => Some(e),
			Self::Utf8(ref e)   => Some(e),
			Self::Length(ref e) => Some(e),
		}
	}
}

impl From<LengthError> for CodecError {
	#[inline(always)]
	fn from(value: LengthError) -> Self {
		Self::Length(value)
	}
}

impl From<RuneError> for CodecError {
	#[inline(always)]
	fn from(value: RuneError) -> Self {
		Self::Rune(value)
	}
}

impl From<Utf8Error> for CodecError {
	#[inline(always)]
	fn from(value: Utf8Error) -> Self {
		Self::Utf8(value)
	}
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl From<CodecError> for std::io::Error {
	#[inline]
	fn from(value: CodecError) -> Self {
		Self::new(std::io::ErrorKind::InvalidData, value)
	}
}
