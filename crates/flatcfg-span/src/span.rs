/// A byte range `[start, end)` into an owned buffer.
///
/// Stored entries keep spans rather than copied text or addresses, so a
/// copied buffer can be read back with the very same spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a span of `len` bytes starting at `start`.
    ///
    /// Panics if the end offset would overflow `usize`.
    #[must_use]
    #[track_caller]
    pub const fn new(start: usize, len: usize) -> Self {
        match start.checked_add(len) {
            Some(end) => Self { start, end },
            None => panic!("span end overflows usize"),
        }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Resolves the span against the buffer it was taken from.
    ///
    /// Panics if the span reaches past the end of `buffer`.
    #[must_use]
    #[track_caller]
    pub fn slice(self, buffer: &[u8]) -> &[u8] {
        assert!(
            self.start <= self.end && self.end <= buffer.len(),
            "span {}..{} out of bounds for buffer of {} bytes",
            self.start,
            self.end,
            buffer.len()
        );
        &buffer[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_exclusive_end() {
        let span = Span::new(4, 3);
        assert_eq!(span, Span { start: 4, end: 7 });
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn empty_span() {
        let span = Span::new(9, 0);
        assert!(span.is_empty());
        assert_eq!(span.slice(b"0123456789"), b"");
    }

    #[test]
    fn slice_reads_range() {
        let buffer = b"key = value";
        assert_eq!(Span::new(6, 5).slice(buffer), b"value");
    }

    #[test]
    fn same_span_reads_same_bytes_from_a_copy() {
        let original = b"a = 1\nb = 2".to_vec();
        let copy = original.clone();
        let span = Span::new(10, 1);
        assert_eq!(span.slice(&original), span.slice(&copy));
    }

    #[test]
    #[should_panic(expected = "span end overflows usize")]
    fn new_with_overflowing_end_panics() {
        let _ = Span::new(usize::MAX, 1);
    }

    #[test]
    fn new_up_to_usize_max_is_allowed() {
        assert_eq!(Span::new(usize::MAX - 2, 2).end, usize::MAX);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn slice_past_end_panics() {
        let _ = Span::new(3, 5).slice(b"short");
    }
}
