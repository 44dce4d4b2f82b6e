//! The loaded, sorted, duplicate-free key/value table.

mod buffer;
mod entry;
mod iter;
mod tokenize;

use std::fmt;
use std::path::{Path, PathBuf};

use flatcfg_span::ByteSpan;

use crate::error::LoadError;
use buffer::Buffer;
use entry::{Entry, sort_unique};
pub use iter::Entries;

/// Outcome of building a [`ConfigTable`].
#[derive(Debug, Clone)]
pub enum Validity {
    Valid,
    Invalid(LoadError),
}

/// A flat `key = value` config file held in one buffer.
///
/// The whole file lives in a single owned allocation; every key and value is
/// a pair of offsets into it. Entries are sorted by raw key bytes, so lookups
/// are binary searches and iteration is in key order.
///
/// Loading never fails outright: a table that could not be built is
/// [`Validity::Invalid`] and holds no entries. Check [`is_valid`] (or use
/// [`into_result`]) before querying; querying an invalid table panics.
///
/// Cloning copies the buffer byte for byte and reuses the offsets unchanged.
///
/// [`is_valid`]: ConfigTable::is_valid
/// [`into_result`]: ConfigTable::into_result
#[derive(Clone)]
pub struct ConfigTable {
    buffer: Buffer,
    entries: Vec<Entry>,
    validity: Validity,
    source: Option<PathBuf>,
}

impl ConfigTable {
    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Buffer::read(path) {
            Ok(buffer) => Self::build(buffer, Some(path.to_path_buf())),
            Err(source) => {
                Self::invalid(Some(path.to_path_buf()), LoadError::read(path, source))
            }
        }
    }

    /// Parses an in-memory config. Takes ownership of the bytes; no copy is made.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::build(Buffer::from(bytes.into()), None)
    }

    fn build(buffer: Buffer, source: Option<PathBuf>) -> Self {
        let parsed = tokenize::tokenize(buffer.as_bytes()).and_then(|mut entries| {
            sort_unique(buffer.as_bytes(), &mut entries)?;
            Ok(entries)
        });

        match parsed {
            Ok(entries) => {
                log::debug!(
                    "loaded {} entries ({} bytes) from {}",
                    entries.len(),
                    buffer.len(),
                    Origin(source.as_deref())
                );
                Self {
                    buffer,
                    entries,
                    validity: Validity::Valid,
                    source,
                }
            }
            Err(err) => Self::invalid(source, err),
        }
    }

    fn invalid(source: Option<PathBuf>, err: LoadError) -> Self {
        log::error!(
            "failed to load config from {}: {err}",
            Origin(source.as_deref())
        );
        Self {
            buffer: Buffer::default(),
            entries: Vec::new(),
            validity: Validity::Invalid(err),
            source,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.validity, Validity::Valid)
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Why the table is invalid, or `None` if it is valid.
    pub fn error(&self) -> Option<&LoadError> {
        match &self.validity {
            Validity::Valid => None,
            Validity::Invalid(err) => Some(err),
        }
    }

    /// Splits a table into the usable table or the reason it failed.
    pub fn into_result(self) -> Result<Self, LoadError> {
        match self.validity {
            Validity::Valid => Ok(self),
            Validity::Invalid(err) => Err(err),
        }
    }

    /// The file this table was loaded from; `None` for [`from_bytes`](Self::from_bytes).
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of entries.
    #[track_caller]
    pub fn size(&self) -> usize {
        self.assert_valid();
        self.entries.len()
    }

    /// Returns the value stored under exactly `key`.
    ///
    /// Keys are compared byte for byte: no trimming, case folding or prefix
    /// matching.
    #[track_caller]
    pub fn lookup(&self, key: impl AsRef<[u8]>) -> Option<ByteSpan<'_>> {
        self.lookup_entry(key).map(|(_, value)| value)
    }

    /// Like [`lookup`](Self::lookup) but returns both the stored key and value.
    #[track_caller]
    pub fn lookup_entry(
        &self,
        key: impl AsRef<[u8]>,
    ) -> Option<(ByteSpan<'_>, ByteSpan<'_>)> {
        self.assert_valid();
        let buffer = self.buffer.as_bytes();
        let key = key.as_ref();
        self.entries
            .binary_search_by(|entry| entry.key_bytes(buffer).cmp(key))
            .ok()
            .map(|index| self.entries[index].resolve(buffer))
    }

    /// The value under `key` as UTF-8. `None` if missing or not valid UTF-8.
    #[track_caller]
    pub fn lookup_str(&self, key: impl AsRef<[u8]>) -> Option<&str> {
        self.lookup(key).and_then(ByteSpan::as_str)
    }

    #[track_caller]
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.lookup_entry(key).is_some()
    }

    /// Entries in ascending key order. Each call starts a fresh pass.
    #[track_caller]
    pub fn iter(&self) -> Entries<'_> {
        self.assert_valid();
        Entries::new(self.buffer.as_bytes(), &self.entries)
    }

    #[track_caller]
    fn assert_valid(&self) {
        if let Validity::Invalid(err) = &self.validity {
            panic!("queried an invalid config table ({err})");
        }
    }
}

impl Default for ConfigTable {
    /// An invalid table that was never loaded.
    fn default() -> Self {
        Self {
            buffer: Buffer::default(),
            entries: Vec::new(),
            validity: Validity::Invalid(LoadError::NotLoaded),
            source: None,
        }
    }
}

impl<'a> IntoIterator for &'a ConfigTable {
    type Item = (ByteSpan<'a>, ByteSpan<'a>);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ConfigTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer.as_bytes();
        let entries = self.entries.iter().map(|entry| {
            let (key, value) = entry.resolve(buffer);
            (
                String::from_utf8_lossy(key.as_bytes()),
                String::from_utf8_lossy(value.as_bytes()),
            )
        });
        f.debug_struct("ConfigTable")
            .field("source", &self.source)
            .field("validity", &self.validity)
            .field("entries", &DebugEntries(entries))
            .finish()
    }
}

struct DebugEntries<I>(I);

impl<I, K, V> fmt::Debug for DebugEntries<I>
where
    I: Iterator<Item = (K, V)> + Clone,
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.clone()).finish()
    }
}

/// Display helper naming where a table came from in log lines.
struct Origin<'a>(Option<&'a Path>);

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("<memory>"),
        }
    }
}
