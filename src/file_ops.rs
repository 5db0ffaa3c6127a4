// src/file_ops.rs
//! File-level encode/decode operations
//!
//! This module handles the read → transform → write composition with
//! file I/O, building on the pure primitives from codec.rs and the
//! path rules from naming.rs. One input file, one output file, no
//! coordination between runs; an existing output file is overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec;
use crate::enums::Convention;
use crate::error::Result;
use crate::naming;

/// Encode a file on disk to base64
///
/// Reads the input (as UTF-8 text under the text convention, raw bytes
/// under the binary convention), encodes it in-memory, writes the base64
/// text to the convention's derived path. Returns the output path.
pub fn encode_file<P: AsRef<Path>>(input_path: P, convention: Convention) -> Result<PathBuf> {
    let input_path = input_path.as_ref();
    let output_path = naming::encoded_path(input_path, convention)?;

    let encoded = match convention {
        Convention::Text => {
            let content = String::from_utf8(fs::read(input_path)?)?;
            codec::encode_text(&content)
        }
        Convention::Binary => codec::encode(&fs::read(input_path)?),
    };
    debug!(input = %input_path.display(), encoded_len = encoded.len(), "encoded");

    fs::write(&output_path, encoded)?;
    Ok(output_path)
}

/// Decode a base64 file on disk
///
/// Reads the base64 text, decodes it in-memory (rejecting the whole input
/// on malformed content), writes the payload to the convention's derived
/// path. Under the text convention the payload must be valid UTF-8.
/// Returns the output path.
pub fn decode_file<P: AsRef<Path>>(input_path: P, convention: Convention) -> Result<PathBuf> {
    let input_path = input_path.as_ref();
    let output_path = naming::decoded_path(input_path, convention)?;

    let encoded = fs::read_to_string(input_path)?;
    let payload = match convention {
        Convention::Text => codec::decode_text(&encoded)?.into_bytes(),
        Convention::Binary => codec::decode(&encoded)?,
    };
    debug!(input = %input_path.display(), decoded_len = payload.len(), "decoded");

    fs::write(&output_path, payload)?;
    Ok(output_path)
}
