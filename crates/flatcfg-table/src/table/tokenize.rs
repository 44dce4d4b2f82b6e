//! Carves a loaded buffer into key/value spans.
//!
//! Per line: cut at the first comment byte, trim, skip if blank, split at the
//! first separator, trim both halves. Nothing is copied; each entry is two
//! [`Span`]s into the buffer.

use flatcfg_span::ByteSpan;

use super::entry::Entry;
use crate::error::LoadError;
use crate::syntax::{COMMENTS, LINE_TERMINATORS, SEPARATORS, is_space};

/// Splits a buffer on CR and LF bytes.
///
/// Each terminator ends a line on its own, so CRLF and runs of blank lines
/// yield empty lines; the tokenizer skips those.
pub(crate) struct Lines<'a> {
    rest: Option<ByteSpan<'a>>,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        Self {
            rest: Some(ByteSpan::of(buffer)),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = ByteSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find_first_of(LINE_TERMINATORS) {
            Some(pos) => {
                let (line, after) = rest.split_around(pos);
                self.rest = Some(after);
                Some(line)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Tokenizes every line of `buffer` into unsorted entries.
///
/// Stops at the first non-blank line with no separator.
pub(crate) fn tokenize(buffer: &[u8]) -> Result<Vec<Entry>, LoadError> {
    let mut entries = Vec::new();

    for line in Lines::new(buffer) {
        if let Some(entry) = tokenize_line(buffer, line)? {
            entries.push(entry);
        }
    }

    Ok(entries)
}

fn tokenize_line(buffer: &[u8], line: ByteSpan<'_>) -> Result<Option<Entry>, LoadError> {
    let line = match line.find_first_of(COMMENTS) {
        Some(comment) => line.subspan(0, comment),
        None => line,
    };

    let line = line.trim_matches(is_space);
    if line.is_empty() {
        return Ok(None);
    }

    let Some(separator) = line.find_first_of(SEPARATORS) else {
        return Err(LoadError::MissingSeparator {
            line: line_number(buffer, line.offset()),
            content: String::from_utf8_lossy(line.as_bytes()).into_owned(),
        });
    };

    let (key, value) = line.split_around(separator);
    Ok(Some(Entry {
        key: key.trim_matches(is_space).range(),
        value: value.trim_matches(is_space).range(),
    }))
}

/// 1-based line number of `offset`. CR, LF and CRLF each end one line.
fn line_number(buffer: &[u8], offset: usize) -> usize {
    let terminators = memchr::memchr2_iter(b'\r', b'\n', &buffer[..offset])
        .filter(|&pos| !(buffer[pos] == b'\r' && buffer.get(pos + 1) == Some(&b'\n')))
        .count();
    terminators + 1
}
