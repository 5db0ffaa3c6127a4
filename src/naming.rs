// src/naming.rs
//! Output-path derivation — the naming half of each convention
//!
//! Pure string manipulation over path names; nothing here touches the
//! filesystem. Decode-side rules use substring replacement over the whole
//! path string (every occurrence), and leave the path unchanged when the
//! suffix is absent — callers get the input path back in that case.

use std::path::{Path, PathBuf};

use crate::consts::{BINARY_ENCODED_SUFFIX, TEXT_DECODED_SUFFIX, TEXT_ENCODED_SUFFIX};
use crate::enums::{Convention, Direction};
use crate::error::{CodecError, Result};

/// Derive the output path for a transformation
///
/// Encode under the text convention strips the final extension before
/// adding `_64.txt`, so `report.csv` encodes to `report_64.txt` and
/// decoding that yields `report.txt`, not `report.csv`. The original
/// extension is not recoverable from the encoded name.
pub fn output_path(input: &Path, convention: Convention, direction: Direction) -> Result<PathBuf> {
    match direction {
        Direction::Encode => encoded_path(input, convention),
        Direction::Decode => decoded_path(input, convention),
    }
}

/// Output path for an encode run
pub fn encoded_path(input: &Path, convention: Convention) -> Result<PathBuf> {
    let name = match convention {
        Convention::Text => {
            let base = input.with_extension("");
            let mut name = path_str(&base)?.to_owned();
            name.push_str(TEXT_ENCODED_SUFFIX);
            name
        }
        Convention::Binary => format!("{}{}", path_str(input)?, BINARY_ENCODED_SUFFIX),
    };
    Ok(PathBuf::from(name))
}

/// Output path for a decode run
///
/// A path without the convention's suffix comes back unchanged, so a
/// decode against it targets the input file itself.
pub fn decoded_path(input: &Path, convention: Convention) -> Result<PathBuf> {
    let name = match convention {
        Convention::Text => path_str(input)?.replace(TEXT_ENCODED_SUFFIX, TEXT_DECODED_SUFFIX),
        Convention::Binary => path_str(input)?.replace(BINARY_ENCODED_SUFFIX, ""),
    };
    Ok(PathBuf::from(name))
}

// Suffix rules operate on the path as a string
fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| CodecError::NonUtf8Path(path.to_path_buf()))
}
