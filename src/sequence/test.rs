// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use crate::{Sequence, Validation};
use crate::error::{CodecError, LengthError, RuneError, Utf8Error};

#[test]
fn test_sequence() {
	let s = Sequence::encode(0x20AC).unwrap();

	assert_eq!(s.rune(),     0x20AC);
	assert_eq!(s.len(),      0x3);
	assert_eq!(s.as_bytes(), b"\xE2\x82\xAC");
	assert_eq!(&*s,          b"\xE2\x82\xAC");

	assert_eq!(Sequence::try_from(0x41), Ok(Sequence::from('A')));
	assert_eq!(Sequence::from('\u{1F600}'), Sequence::encode(0x1F600).unwrap());

	// Chars can always be encoded.
	assert_eq!(Sequence::from('\u{10FFFF}').as_bytes(), b"\xF4\x8F\xBF\xBF");
	assert_eq!(Sequence::encode(0x10FFFF), Err(CodecError::Rune(RuneError { value: 0x10FFFF })));
	assert_eq!(Sequence::encode_with(0x10FFFF, Validation::Strict), Ok(Sequence::from('\u{10FFFF}')));

	assert_eq!(Sequence::encode_with(0xDC00, Validation::Strict), Err(CodecError::Rune(RuneError { value: 0xDC00 })));
}

#[test]
fn test_sequence_from_bytes() {
	let s = Sequence::from_bytes(b"\xC2\xB1", Validation::Strict).unwrap();

	assert_eq!(s.rune(), 0xB1);
	assert_eq!(s.len(),  0x2);

	assert_eq!(
		Sequence::from_bytes(b"\xC2\xB1\x41", Validation::Strict),
		Err(CodecError::Utf8(Utf8Error { value: 0x41, index: 0x2 })),
	);

	assert_eq!(
		Sequence::from_bytes(b"\xC2", Validation::Strict),
		Err(CodecError::Length(LengthError { remaining: 0x1, count: 0x2 })),
	);

	assert_eq!(
		Sequence::from_bytes(b"\xC0\xAF", Validation::Strict),
		Err(CodecError::Rune(RuneError { value: 0x2F })),
	);

	// Leniently accepted octets are kept as is.
	let s = Sequence::from_bytes(b"\xC0\xAF", Validation::Lenient).unwrap();

	assert_eq!(s.rune(),     0x2F);
	assert_eq!(s.as_bytes(), b"\xC0\xAF");
	assert_ne!(s,            Sequence::from('/'));
}

#[cfg(feature = "oct")]
#[test]
fn test_sequence_decode() {
	use oct::decode::{Decode, Input};

	let data = *b"\xE2\x82\xAC\x41\xC0\xAF";

	let mut input = Input::new(&data);

	assert_eq!(Sequence::decode(&mut input), Ok(Sequence::from('\u{20AC}')));
	assert_eq!(Sequence::decode(&mut input), Ok(Sequence::from('A')));
	assert_eq!(Sequence::decode(&mut input), Err(CodecError::Rune(RuneError { value: 0x2F })));
}

#[cfg(feature = "serde")]
#[test]
fn test_sequence_serde() {
	use serde_test::{Token, assert_de_tokens_error, assert_tokens};

	let s = Sequence::encode(0x2764).unwrap();

	assert_tokens(
		&s,
		&[
			Token::Bytes(b"\xE2\x9D\xA4"),
		],
	);

	assert_de_tokens_error::<Sequence>(
		&[
			Token::Bytes(b"\xED\xA0\x80"),
		],
		"invalid code point: rune (0xD800) cannot be represented as utf-8",
	);
}

#[cfg(feature = "serde")]
#[test]
fn test_sequence_serde_seq() {
	use serde_test::{Token, assert_de_tokens, assert_de_tokens_error};

	assert_de_tokens(
		&Sequence::encode(0x20AC).unwrap(),
		&[
			Token::Seq { len: Some(0x3) },
			Token::U8(0xE2),
			Token::U8(0x82),
			Token::U8(0xAC),
			Token::SeqEnd,
		],
	);

	assert_de_tokens_error::<Sequence>(
		&[
			Token::Seq { len: Some(0x2) },
			Token::U8(0xC0),
			Token::U8(0xAF),
			Token::SeqEnd,
		],
		"invalid code point: rune (0x2F) cannot be represented as utf-8",
	);

	assert_de_tokens_error::<Sequence>(
		&[
			Token::Seq { len: Some(0x5) },
			Token::U8(0xF0),
			Token::U8(0x9F),
			Token::U8(0x98),
			Token::U8(0x80),
			Token::U8(0x80),
			Token::SeqEnd,
		],
		"invalid length 5, expected a single utf-8 sequence of at most `4` octets",
	);
}

#[test]
fn test_sequence_eq() {
	// Lenient validation keeps only seven bits of a
	// negative rune.
	let s0 = Sequence::encode(-0x1).unwrap();
	let s1 = Sequence::from_bytes(b"\x7F", Validation::Strict).unwrap();

	assert_eq!(s0, s1);
	assert_eq!(s0.rune(), 0x7F);
	assert_eq!(s0.rune(), s1.rune());

	assert!(s0 == b"\x7F"[..]);
	assert!(s0 != b"\x7E"[..]);

	assert_ne!(Sequence::from('A'), Sequence::from('B'));
}

#[cfg(feature = "std")]
#[test]
fn test_sequence_hash() {
	use std::collections::HashSet;
	use std::hash::{BuildHasher, RandomState};

	let state = RandomState::new();

	let s0 = Sequence::encode(-0x80).unwrap();
	let s1 = Sequence::from('\0');

	assert_eq!(s0, s1);
	assert_eq!(state.hash_one(s0), state.hash_one(s1));

	let set: HashSet<Sequence> = [Sequence::from('A'), Sequence::from('\u{20AC}')].into_iter().collect();

	assert!(set.contains(&b"A"[..]));
	assert!(set.contains(&b"\xE2\x82\xAC"[..]));
	assert!(!set.contains(&b"B"[..]));
	assert!(set.contains(&s1) == set.contains(&b"\x00"[..]));
}

#[cfg(feature = "std")]
#[test]
fn test_sequence_debug() {
	use std::format;

	assert_eq!(format!("{:?}", Sequence::encode(-0x1).unwrap()),    "Sequence(0x7F, [7F])");
	assert_eq!(format!("{:?}", Sequence::encode(0x20AC).unwrap()),  "Sequence(0x20AC, [E2, 82, AC])");
}
