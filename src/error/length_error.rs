// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

#[cfg(feature = "oct")]
use oct::error::GenericDecodeError;

/// A buffer was too short for a UTF-8 sequence.
///
/// When encoding, the buffer is the destination; when decoding, it is the source.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub struct LengthError {
	/// The size of the buffer.
	pub remaining: usize,

	/// The amount of octets required by the sequence.
	pub count: usize,
}

impl Display for LengthError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "buffer with ({}) octets cannot hold a sequence of ({}) octets", self.remaining, self.count)
	}
}

impl Error for LengthError { }

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl From<LengthError> for GenericDecodeError {
	#[inline(always)]
	fn from(value: LengthError) -> Self {
		let e = oct::error::LengthError {
			remaining: value.remaining,
			count:     value.count,
		};

		Self::SmallBuffer(e)
	}
}
