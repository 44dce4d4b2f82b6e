//! # flatcfg-table - Zero-Copy Flat Config Tables
//!
//! Loads a section-less `key = value` file into a [`ConfigTable`]:
//!
//! 1. the file is read once into a single owned buffer,
//! 2. each line is cut at its first comment byte (`;` or `#`), trimmed, and
//!    split at its first `=`,
//! 3. keys and values are kept as offsets into that buffer, never copied,
//! 4. entries are sorted by raw key bytes and checked for duplicates.
//!
//! ```
//! use flatcfg_table::ConfigTable;
//!
//! let table = ConfigTable::from_bytes("b = 2\na = 1\n# comment\nc=3  ; trailing\n");
//! assert!(table.is_valid());
//! assert_eq!(table.size(), 3);
//! assert_eq!(table.lookup_str("c"), Some("3"));
//! assert!(table.lookup("z").is_none());
//!
//! let keys: Vec<_> = table.iter().map(|(key, _)| key.as_str().unwrap()).collect();
//! assert_eq!(keys, ["a", "b", "c"]);
//! ```
//!
//! A file that cannot be read, has a non-blank line without `=`, or repeats a
//! key produces an invalid table with no entries:
//!
//! ```
//! use flatcfg_table::{ConfigTable, LoadError};
//!
//! let table = ConfigTable::from_bytes("port = 80\nport = 8080\n");
//! assert!(!table.is_valid());
//! assert!(matches!(table.error(), Some(LoadError::DuplicateKey { .. })));
//! ```
//!
//! The library logs through the [`log`] facade: failed loads at `error`,
//! successful ones at `debug`.

pub mod error;
pub mod syntax;
pub mod table;

pub use error::LoadError;
pub use flatcfg_span::{ByteSpan, Span};
pub use table::{ConfigTable, Entries, Validity};
