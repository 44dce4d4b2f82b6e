use flatcfg_span::{ByteSpan, Span};

use crate::error::LoadError;

/// One parsed `key = value` pair, stored as offsets into the table's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub key: Span,
    pub value: Span,
}

impl Entry {
    pub(crate) fn key_bytes(self, buffer: &[u8]) -> &[u8] {
        self.key.slice(buffer)
    }

    pub(crate) fn resolve(self, buffer: &[u8]) -> (ByteSpan<'_>, ByteSpan<'_>) {
        (ByteSpan::at(buffer, self.key), ByteSpan::at(buffer, self.value))
    }
}

/// Sorts entries by raw key bytes and rejects the first repeated key.
pub(crate) fn sort_unique(buffer: &[u8], entries: &mut [Entry]) -> Result<(), LoadError> {
    entries.sort_unstable_by(|a, b| a.key_bytes(buffer).cmp(b.key_bytes(buffer)));

    let duplicate = entries
        .windows(2)
        .find(|pair| pair[0].key_bytes(buffer) == pair[1].key_bytes(buffer));

    match duplicate {
        Some(pair) => Err(LoadError::DuplicateKey {
            key: String::from_utf8_lossy(pair[0].key_bytes(buffer)).into_owned(),
        }),
        None => Ok(()),
    }
}
