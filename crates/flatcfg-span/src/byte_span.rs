use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use memchr::{memchr, memchr2, memchr3};

use crate::span::Span;

/// A non-owning, bounds-checked view of part of a byte buffer.
///
/// The view remembers the whole buffer it was carved from, so any derived
/// view can report its offset into that buffer (see [`ByteSpan::range`]).
/// Nothing here allocates or copies bytes: every operation returns another
/// view or a primitive value.
///
/// Contract violations (out-of-range sub-views, reading or dropping from an
/// empty view) are caller bugs and panic immediately.
#[derive(Clone, Copy)]
pub struct ByteSpan<'a> {
    base: &'a [u8],
    start: usize,
    len: usize,
}

impl<'a> ByteSpan<'a> {
    /// A view of the entire buffer.
    #[must_use]
    pub const fn of(buffer: &'a [u8]) -> Self {
        Self {
            base: buffer,
            start: 0,
            len: buffer.len(),
        }
    }

    /// Rebuilds a view from a stored [`Span`] into `buffer`.
    #[must_use]
    #[track_caller]
    pub fn at(buffer: &'a [u8], span: Span) -> Self {
        assert!(
            span.start <= span.end && span.end <= buffer.len(),
            "span {}..{} out of bounds for buffer of {} bytes",
            span.start,
            span.end,
            buffer.len()
        );
        Self {
            base: buffer,
            start: span.start,
            len: span.len(),
        }
    }

    /// Number of bytes in view.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Offset of the first viewed byte within the underlying buffer.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.start
    }

    /// The buffer-relative range this view covers.
    #[must_use]
    pub const fn range(self) -> Span {
        Span::new(self.start, self.len)
    }

    /// The viewed bytes, borrowed for as long as the underlying buffer.
    #[must_use]
    pub fn as_bytes(self) -> &'a [u8] {
        &self.base[self.start..self.start + self.len]
    }

    /// The viewed bytes as UTF-8, if they are valid UTF-8.
    #[must_use]
    pub fn as_str(self) -> Option<&'a str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// A sub-view of `len` bytes starting `start` bytes into this view.
    ///
    /// Like `str::get(start..start + len)` but panicking instead of returning
    /// `None`.
    #[must_use]
    #[track_caller]
    pub fn subspan(self, start: usize, len: usize) -> Self {
        let in_bounds = start.checked_add(len).is_some_and(|end| end <= self.len);
        assert!(
            in_bounds,
            "subspan {start}+{len} out of bounds for span of {} bytes",
            self.len
        );
        Self {
            base: self.base,
            start: self.start + start,
            len,
        }
    }

    /// A sub-view from `start` to the end of this view.
    #[must_use]
    #[track_caller]
    pub fn subspan_from(self, start: usize) -> Self {
        assert!(
            start <= self.len,
            "subspan start {start} out of bounds for span of {} bytes",
            self.len
        );
        Self {
            base: self.base,
            start: self.start + start,
            len: self.len - start,
        }
    }

    /// Splits the view around the byte at `pos`, which belongs to neither half.
    #[must_use]
    #[track_caller]
    pub fn split_around(self, pos: usize) -> (Self, Self) {
        assert!(
            pos < self.len,
            "split position {pos} out of bounds for span of {} bytes",
            self.len
        );
        (self.subspan(0, pos), self.subspan_from(pos + 1))
    }

    #[must_use]
    #[track_caller]
    pub fn first_byte(self) -> u8 {
        assert!(!self.is_empty(), "first_byte on empty span");
        self.base[self.start]
    }

    #[must_use]
    #[track_caller]
    pub fn last_byte(self) -> u8 {
        assert!(!self.is_empty(), "last_byte on empty span");
        self.base[self.start + self.len - 1]
    }

    #[track_caller]
    pub fn drop_first(&mut self) {
        assert!(!self.is_empty(), "drop_first on empty span");
        self.start += 1;
        self.len -= 1;
    }

    #[track_caller]
    pub fn drop_last(&mut self) {
        assert!(!self.is_empty(), "drop_last on empty span");
        self.len -= 1;
    }

    /// Position (relative to this view) of the first byte that belongs to `set`.
    ///
    /// Sets of up to three bytes go through `memchr`'s vectorised searches.
    #[must_use]
    pub fn find_first_of(self, set: &[u8]) -> Option<usize> {
        let haystack = self.as_bytes();
        match *set {
            [] => None,
            [a] => memchr(a, haystack),
            [a, b] => memchr2(a, b, haystack),
            [a, b, c] => memchr3(a, b, c, haystack),
            _ => haystack.iter().position(|byte| set.contains(byte)),
        }
    }

    /// Drops leading and trailing bytes for which `pred` holds.
    #[must_use]
    pub fn trim_matches(mut self, pred: impl Fn(u8) -> bool) -> Self {
        while !self.is_empty() && pred(self.first_byte()) {
            self.drop_first();
        }
        while !self.is_empty() && pred(self.last_byte()) {
            self.drop_last();
        }
        self
    }

    /// Drops leading and trailing bytes that belong to `set`.
    #[must_use]
    pub fn trim(self, set: &[u8]) -> Self {
        self.trim_matches(|byte| set.contains(&byte))
    }
}

impl fmt::Debug for ByteSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ByteSpan({:?} @ {}..{})",
            String::from_utf8_lossy(self.as_bytes()),
            self.start,
            self.start + self.len
        )
    }
}

impl PartialEq for ByteSpan<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteSpan<'_> {}

impl PartialOrd for ByteSpan<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteSpan<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteSpan<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<[u8]> for ByteSpan<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for ByteSpan<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteSpan<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<str> for ByteSpan<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteSpan<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<'a> From<&'a [u8]> for ByteSpan<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::of(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn of_views_whole_buffer() {
        let span = ByteSpan::of(b"hello");
        assert_eq!(span.len(), 5);
        assert_eq!(span.offset(), 0);
        assert_eq!(span, "hello");
        assert!(!span.is_empty());
    }

    #[test]
    fn subspan_keeps_buffer_offset() {
        let span = ByteSpan::of(b"hello world").subspan(6, 5);
        assert_eq!(span, "world");
        assert_eq!(span.offset(), 6);
        assert_eq!(span.range(), Span { start: 6, end: 11 });

        let inner = span.subspan(1, 3);
        assert_eq!(inner, "orl");
        assert_eq!(inner.offset(), 7);
    }

    #[test]
    fn subspan_to_exact_end_is_allowed() {
        let span = ByteSpan::of(b"abc");
        assert_eq!(span.subspan(3, 0).len(), 0);
        assert_eq!(span.subspan(0, 3), "abc");
        assert!(span.subspan_from(3).is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn subspan_past_end_panics() {
        let _ = ByteSpan::of(b"abc").subspan(2, 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn subspan_overflowing_length_panics() {
        let _ = ByteSpan::of(b"abc").subspan(1, usize::MAX);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn subspan_bounds_are_relative_to_the_view() {
        // 4 bytes remain in the buffer but only 2 in the view
        let view = ByteSpan::of(b"abcdef").subspan(0, 2);
        let _ = view.subspan(1, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn subspan_from_past_end_panics() {
        let _ = ByteSpan::of(b"abc").subspan_from(4);
    }

    #[test]
    fn deque_primitives() {
        let mut span = ByteSpan::of(b"[x]");
        assert_eq!(span.first_byte(), b'[');
        assert_eq!(span.last_byte(), b']');

        span.drop_first();
        span.drop_last();
        assert_eq!(span, "x");
        assert_eq!(span.offset(), 1);

        span.drop_last();
        assert!(span.is_empty());
    }

    #[test]
    #[should_panic(expected = "first_byte on empty span")]
    fn first_byte_of_empty_panics() {
        let _ = ByteSpan::of(b"").first_byte();
    }

    #[test]
    #[should_panic(expected = "last_byte on empty span")]
    fn last_byte_of_empty_panics() {
        let _ = ByteSpan::of(b"").last_byte();
    }

    #[test]
    #[should_panic(expected = "drop_first on empty span")]
    fn drop_first_of_empty_panics() {
        let mut span = ByteSpan::of(b"");
        span.drop_first();
    }

    #[test]
    #[should_panic(expected = "drop_last on empty span")]
    fn drop_last_of_empty_panics() {
        let mut span = ByteSpan::of(b"ab").subspan_from(2);
        span.drop_last();
    }

    #[rstest]
    #[case(b"", b";#", None)]
    #[case(b"abc", b"", None)]
    #[case(b"key = v ; note", b";", Some(8))]
    #[case(b"key = v ; note # x", b";#", Some(8))]
    #[case(b"a#b;c", b";#", Some(1))]
    #[case(b"line\r\nnext", b"\r\n", Some(4))]
    #[case(b"x=y", b"=", Some(1))]
    #[case(b"abcd", b"dcb", Some(1))]
    #[case(b"abcd", b"zyxd", Some(3))]
    #[case(b"abcd", b"zyxw", None)]
    fn find_first_of_cases(
        #[case] haystack: &[u8],
        #[case] set: &[u8],
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(ByteSpan::of(haystack).find_first_of(set), expected);
    }

    #[test]
    fn find_first_of_is_relative_to_the_view() {
        let span = ByteSpan::of(b"a=b=c").subspan_from(2);
        assert_eq!(span.find_first_of(b"="), Some(1));
    }

    #[rstest]
    #[case(b"  key  ", "key")]
    #[case(b"\tkey\t", "key")]
    #[case(b"key", "key")]
    #[case(b"   ", "")]
    #[case(b"", "")]
    #[case(b" a b ", "a b")]
    fn trim_cases(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(ByteSpan::of(input).trim(b" \t"), expected);
    }

    #[test]
    fn trim_reports_inner_offset() {
        let trimmed = ByteSpan::of(b"   value  ").trim(b" ");
        assert_eq!(trimmed.range(), Span { start: 3, end: 8 });
    }

    #[test]
    fn split_around_excludes_the_split_byte() {
        let (key, value) = ByteSpan::of(b"k=v=w").split_around(1);
        assert_eq!(key, "k");
        assert_eq!(value, "v=w");
        assert_eq!(value.offset(), 2);
    }

    #[test]
    fn split_around_last_byte_leaves_empty_tail() {
        let (head, tail) = ByteSpan::of(b"k=").split_around(1);
        assert_eq!(head, "k");
        assert!(tail.is_empty());
        assert_eq!(tail.offset(), 2);
    }

    #[test]
    fn at_rebuilds_view_from_stored_span() {
        let buffer = b"name = flatcfg";
        let stored = ByteSpan::of(buffer).subspan_from(7).range();
        assert_eq!(ByteSpan::at(buffer, stored), "flatcfg");
    }

    #[test]
    fn comparisons_use_bytes_not_position() {
        let buffer = b"abab";
        let first = ByteSpan::of(buffer).subspan(0, 2);
        let second = ByteSpan::of(buffer).subspan(2, 2);
        assert_eq!(first, second);
        assert!(ByteSpan::of(b"ab") < ByteSpan::of(b"b"));
        assert!(ByteSpan::of(b"a") < ByteSpan::of(b"ab"));
    }

    #[test]
    fn as_str_rejects_invalid_utf8() {
        assert_eq!(ByteSpan::of(b"ok").as_str(), Some("ok"));
        assert_eq!(ByteSpan::of(&[0xff, 0xfe]).as_str(), None);
    }

    #[test]
    fn debug_shows_text_and_range() {
        let span = ByteSpan::of(b"a = b").subspan_from(4);
        assert_eq!(format!("{span:?}"), r#"ByteSpan("b" @ 4..5)"#);
    }
}
