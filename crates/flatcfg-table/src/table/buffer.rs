use std::path::Path;

/// Owned, fixed-size storage for a whole config file.
///
/// Backed by a boxed slice: it cannot grow, so its bytes never move once
/// loaded, and moving a `Buffer` only moves the box pointer. Spans stored
/// next to it stay valid across moves and, since they are offsets, across
/// clones too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Buffer(Box<[u8]>);

impl Buffer {
    /// Reads the full contents of `path`.
    pub(crate) fn read(path: &Path) -> std::io::Result<Self> {
        std::fs::read(path).map(Self::from)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}
