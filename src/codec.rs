// src/codec.rs
//! Pure encode/decode primitives — no I/O, no state
//!
//! This module contains only the raw base64 transformation logic.
//! Everything here works on in-memory buffers; file handling and
//! output-path derivation live in file_ops.rs and naming.rs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Encode bytes → RFC 4648 standard-alphabet base64, padded
///
/// Total: never fails for any byte sequence.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode base64 text → bytes
///
/// Strict: any character outside the standard alphabet (plus `=` padding)
/// or an invalid length/padding rejects the whole input. No partial output.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

/// Encode a UTF-8 string's bytes → base64 text
pub fn encode_text(text: &str) -> String {
    encode(text.as_bytes())
}

/// Decode base64 text → UTF-8 string
///
/// Fails with [`CodecError::Utf8`](crate::CodecError::Utf8) when the decoded
/// payload is not valid UTF-8. The text convention requires this; the
/// restriction is part of its contract, not an accident.
pub fn decode_text(text: &str) -> Result<String> {
    Ok(String::from_utf8(decode(text)?)?)
}
