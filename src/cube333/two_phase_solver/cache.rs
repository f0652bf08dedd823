//! Persistent storage for generated tables.
//!
//! Each table is one file in the cache directory. Move tables are stored as little endian `u32`
//! words in row major `(coordinate, move)` order, pruning tables as their packed bytes. A file
//! with the wrong size or contents is treated as stale: the table is generated again and the file
//! rewritten.

use crate::error::CacheError;

use log::{debug, info, warn};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A table that can be written to and read back from a cache file.
pub trait CachedTable: Sized {
    /// File extension for this kind of table.
    const EXTENSION: &'static str;

    /// Serialize the table.
    fn to_bytes(&self) -> Vec<u8>;

    /// Deserialize a table, rejecting data that does not fit the table's shape.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CacheError>;
}

/// A directory holding cached tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCache {
    dir: PathBuf,
}

impl TableCache {
    /// Use `dir` for the cache. It is created when the first table is saved.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path<T: CachedTable>(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", T::EXTENSION))
    }

    /// Read a cached table.
    pub fn load<T: CachedTable>(&self, name: &str) -> Result<T, CacheError> {
        let bytes = fs::read(self.path::<T>(name))?;
        T::from_bytes(&bytes)
    }

    /// Write a table to the cache, replacing any previous file.
    pub fn save<T: CachedTable>(&self, name: &str, table: &T) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path::<T>(name), table.to_bytes())?;
        Ok(())
    }
}

/// Load a table from the cache, or generate it (and try to cache it) when that fails. Cache
/// failures are logged and otherwise ignored.
pub fn load_or_generate<T: CachedTable>(
    cache: Option<&TableCache>,
    name: &str,
    generate: impl FnOnce() -> T,
) -> T {
    if let Some(cache) = cache {
        match cache.load(name) {
            Ok(table) => {
                info!("loaded {name} from {}", cache.dir().display());
                return table;
            }
            Err(CacheError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("{name} is not cached yet");
            }
            Err(e) => warn!("discarding cached {name}: {e}"),
        }
    }

    let start = Instant::now();
    let table = generate();
    info!("generated {name} in {:.2?}", start.elapsed());

    if let Some(cache) = cache {
        match cache.save(name, &table) {
            Ok(()) => debug!("saved {name}"),
            Err(e) => warn!("could not cache {name}: {e}"),
        }
    }

    table
}

/// Encode words as little endian bytes.
pub fn words_to_bytes(words: impl IntoIterator<Item = u32>) -> Vec<u8> {
    let mut bytes = Vec::new();
    for w in words {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    bytes
}

/// Decode little endian words, checking there are exactly `expected` of them.
pub fn bytes_to_words(bytes: &[u8], expected: usize) -> Result<Vec<u32>, CacheError> {
    if bytes.len() % 4 != 0 || bytes.len() / 4 != expected {
        return Err(CacheError::SizeMismatch {
            expected,
            found: bytes.len() / 4,
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
