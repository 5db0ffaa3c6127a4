// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: naming conventions, transform directions, etc.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Filename/payload conventions
///
/// The two conventions are not interoperable: they disagree on the
/// encoded-file suffix and on whether the payload is UTF-8 text or raw
/// bytes. A file encoded under one must be decoded under the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Convention {
    /// UTF-8 payload; `_64.txt` replaces the final extension on encode
    #[default]
    Text,
    /// Raw byte payload; `.64.txt` is appended verbatim on encode
    Binary,
}

/// Direction of a file transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Direction {
    Encode,
    Decode,
}
