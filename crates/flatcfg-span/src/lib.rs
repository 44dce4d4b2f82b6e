//! # flatcfg-span - Views Into One Owned Buffer
//!
//! Two small types that let a parser carve a loaded file into tokens
//! without allocating a string per token:
//!
//! - [`ByteSpan`] - a borrowed, bounds-checked view with trimming and
//!   sub-range operations. Its lifetime ties it to the buffer it views.
//! - [`Span`] - a plain `[start, end)` offset pair that can be stored next
//!   to the buffer and resolved again later with [`ByteSpan::at`].
//!
//! ```
//! use flatcfg_span::ByteSpan;
//!
//! let line = ByteSpan::of(b"  port = 8080  ; default").trim(b" ");
//! let comment = line.find_first_of(b";#").unwrap();
//! let line = line.subspan(0, comment).trim(b" ");
//! let (key, value) = line.split_around(line.find_first_of(b"=").unwrap());
//!
//! assert_eq!(key.trim(b" "), "port");
//! assert_eq!(value.trim(b" "), "8080");
//! assert_eq!(value.trim(b" ").range().start, 9);
//! ```

pub mod byte_span;
pub mod span;

pub use byte_span::ByteSpan;
pub use span::Span;
