// src/consts.rs
//! Shared constants — filename suffix conventions

/// Suffix the text convention inserts after stripping the final extension
/// (`report.csv` → `report_64.txt`)
pub const TEXT_ENCODED_SUFFIX: &str = "_64.txt";

/// Replacement the text convention's decoder substitutes for
/// [`TEXT_ENCODED_SUFFIX`]
pub const TEXT_DECODED_SUFFIX: &str = ".txt";

/// Suffix the binary convention appends verbatim
/// (`notes.bin` → `notes.bin.64.txt`)
pub const BINARY_ENCODED_SUFFIX: &str = ".64.txt";
