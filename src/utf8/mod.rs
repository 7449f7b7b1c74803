// Copyright 2025 Gabriel Bjørnager Jensen.


mod decode;
mod encode;
mod runes;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_with};
pub use runes::Runes;

#[cfg(feature = "alloc")]
pub use {decode::decode_all, encode::encode_all};

/// A Unicode code point.
///
/// This is a plain, signed integer: whether a value is a valid code point is only decided when it is encoded or decoded.
pub type Rune = i32;

/// The greatest amount of octets in a single UTF-8 sequence.
pub const MAX_SEQUENCE_LEN: usize = 0x4;

/// The validation applied by the encoder and decoder.
///
/// # Lenient validation
///
/// This is the default and only performs the structural checks of the codec:
///
/// * The encoder rejects runes from `0x10FFFF` and upwards, *including* `U+10FFFF` itself.
///   Negative runes are encoded as a single octet containing their seven lowest bits.
/// * The decoder only validates lead octets.
///   Continuation octets contribute their six lowest bits regardless of their prefix.
///   Overlong sequences and surrogates are accepted.
///
/// # Strict validation
///
/// This follows the Unicode standard:
///
/// * The encoder accepts exactly the scalar values, i.e. `0x0..=0x10FFFF` except for the surrogates `0xD800..=0xDFFF`.
/// * The decoder additionally rejects continuation octets not of the form `0b10xxxxxx`, overlong sequences, surrogates, and values past `U+10FFFF`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Validation {
	#[default]
	Lenient,

	Strict,
}

impl Validation {
	/// Tests if this is [`Strict`](Self::Strict).
	#[inline(always)]
	#[must_use]
	pub const fn is_strict(self) -> bool {
		matches!(self, Self::Strict)
	}
}

/// Prefixes of lead octets, indexed by sequence length minus one.
const LEAD_PREFIXES: [u8; MAX_SEQUENCE_LEN] = [0b00000000, 0b11000000, 0b11100000, 0b11110000];

/// Payload masks of lead octets, indexed by sequence length minus one.
const LEAD_MASKS: [u8; MAX_SEQUENCE_LEN] = [0b01111111, 0b00011111, 0b00001111, 0b00000111];

const CONTINUATION_PREFIX: u8 = 0b10000000;
const CONTINUATION_MASK:   u8 = 0b00111111;

/// Gets the length of the UTF-8 sequence encoding `rune`.
///
/// The length is always the shortest one that can hold the rune.
/// If `rune` cannot be encoded under the given validation, then [`None`] is returned.
#[inline]
#[must_use]
pub const fn encoded_len(rune: Rune, validation: Validation) -> Option<usize> {
	match validation {
		Validation::Lenient => match rune {
			..0x80     => Some(0x1),
			..0x800    => Some(0x2),
			..0x10000  => Some(0x3),
			..0x10FFFF => Some(0x4),
			_          => None,
		},

		Validation::Strict => match rune {
			0x0..0x80           => Some(0x1),
			0x80..0x800         => Some(0x2),
			0xD800..=0xDFFF     => None,
			0x800..0x10000      => Some(0x3),
			0x10000..=0x10FFFF  => Some(0x4),
			_                   => None,
		},
	}
}

/// Gets the length of the UTF-8 sequence starting with `lead`.
///
/// If `lead` is not a lead octet, i.e. if it is a continuation octet or has more than four leading ones, then [`None`] is returned.
#[inline]
#[must_use]
pub const fn decoded_len(lead: u8) -> Option<usize> {
	// The amount of leading ones is the sequence
	// length, except for single octets which have
	// none.

	match lead.leading_ones() {
		0x0               => Some(0x1),
		len @ 0x2..=0x4   => Some(len as usize),
		_                 => None,
	}
}
