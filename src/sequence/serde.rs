// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(feature = "serde")]

use crate::{MAX_SEQUENCE_LEN, Sequence, Validation};

use core::fmt::{self, Formatter};
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

#[derive(Debug, Default)]
struct SequenceVisitor;

impl<'de> Visitor<'de> for SequenceVisitor {
	type Value = Sequence;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		write!(formatter, "a single utf-8 sequence of at most `{MAX_SEQUENCE_LEN}` octets")
	}

	#[inline]
	fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
		Sequence::from_bytes(v, Validation::Strict).map_err(E::custom)
	}

	/// Formats without a native byte string type hand the octets back as a sequence of integers.
	#[inline]
	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
		let mut buf = [0x00; MAX_SEQUENCE_LEN];
		let mut len = 0x0;

		while let Some(octet) = seq.next_element::<u8>()? {
			if len >= MAX_SEQUENCE_LEN {
				return Err(de::Error::invalid_length(len + 0x1, &self));
			}

			buf[len] = octet;
			len += 0x1;
		}

		Sequence::from_bytes(&buf[..len], Validation::Strict).map_err(de::Error::custom)
	}
}

/// Deserialises from a byte string containing exactly one, strictly valid sequence.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Sequence {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_bytes(SequenceVisitor)
	}
}

/// Serialises as a byte string of the raw octets.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Sequence {
	#[inline]
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_bytes(self.as_bytes())
	}
}
