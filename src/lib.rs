// Copyright 2025 Gabriel Bjørnager Jensen.

//! `utf8codec` is a Rust crate for encoding and decoding UTF-8, one code point at a time.
//!
//! The core of the crate is the [`encode`] and [`decode`] pair.
//! Both are pure, `const`-compatible functions operating on caller-provided buffers: nothing is allocated, and no state is kept between calls.
//!
//! # Validation
//!
//! By default, the codec only performs structural checks (see [`Validation::Lenient`]).
//! Notably, this rejects `U+10FFFF` when encoding but accepts surrogates, overlong sequences, and malformed continuation octets when decoding.
//! The [`encode_with`] and [`decode_with`] functions accept [`Validation::Strict`] to follow the Unicode standard instead.
//!
//! # Examples
//!
//! ```rust
//! use utf8codec::{decode, encode};
//!
//! let mut buf = [0x00; 0x4];
//!
//! let len = encode(0x10000, &mut buf).unwrap();
//! assert_eq!(&buf[..len], b"\xF0\x90\x80\x80");
//!
//! assert_eq!(decode(&buf[..len]), Ok((0x10000, 0x4)));
//! ```

#![no_std]

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;

mod sequence;
mod utf8;

pub use sequence::Sequence;

pub use utf8::{
	MAX_SEQUENCE_LEN,
	Rune,
	Runes,
	Validation,
	decode,
	decode_with,
	decoded_len,
	encode,
	encode_with,
	encoded_len,
};

#[cfg(feature = "alloc")]
pub use utf8::{decode_all, encode_all};
