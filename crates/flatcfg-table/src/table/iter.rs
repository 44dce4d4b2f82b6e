use std::iter::FusedIterator;

use flatcfg_span::ByteSpan;

use super::entry::Entry;

/// Entries of a [`ConfigTable`](crate::ConfigTable) in ascending key order.
///
/// Created by [`ConfigTable::iter`](crate::ConfigTable::iter). Yields
/// `(key, value)` views into the table's buffer.
#[derive(Clone)]
pub struct Entries<'a> {
    buffer: &'a [u8],
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(buffer: &'a [u8], entries: &'a [Entry]) -> Self {
        Self {
            buffer,
            inner: entries.iter(),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (ByteSpan<'a>, ByteSpan<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.resolve(self.buffer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| entry.resolve(self.buffer))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}
