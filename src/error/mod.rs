// Copyright 2025 Gabriel Bjørnager Jensen.

//! Error types.

mod codec_error;
mod length_error;
mod rune_error;
mod utf8_error;

pub use codec_error::{CodecError, ErrorKind};
pub use length_error::LengthError;
pub use rune_error::RuneError;
pub use utf8_error::Utf8Error;
