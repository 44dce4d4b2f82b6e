//! Fixed byte sets of the flat config format.
//!
//! ```text
//! # comment
//! key = value   ; trailing comment
//! ```
//!
//! These are not configurable; they are exported so callers can describe
//! the format without duplicating it.

/// Whitespace trimmed from lines, keys and values.
pub const SPACES: &[u8] = b" \t";

/// Bytes that start a comment running to the end of the line.
pub const COMMENTS: &[u8] = b";#";

/// Bytes that separate a key from its value. Only the first one on a line counts.
pub const SEPARATORS: &[u8] = b"=";

/// Either byte ends a line.
pub const LINE_TERMINATORS: &[u8] = b"\r\n";

/// True for the bytes in [`SPACES`].
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}
