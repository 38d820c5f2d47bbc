//! Protocol hashing and protocol-keyed dispatch.
//!
//! A resource-loading layer keeps one handler per protocol (`file`, `zip`,
//! `memory`, ...). [`ProtocolHash`] turns a protocol name into a fixed-width
//! key so lookups avoid string comparison, and [`ProtocolTable`] is the map
//! built on it.

use std::collections::HashMap;
use std::fmt;

use crate::path::types::ResourcePath;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A 64-bit FNV-1a hash of a protocol name.
///
/// The hash depends only on the bytes of the name, so it is the same on
/// every run and can be computed in `const` context.
///
/// # Examples
///
/// ```
/// use respath::{ProtocolHash, ResourcePath};
///
/// const ZIP: ProtocolHash = ProtocolHash::of("zip");
///
/// let path = ResourcePath::new("zip://media.zip#poem.txt");
/// assert_eq!(path.protocol_hash(), ZIP);
/// assert_ne!(ZIP, ProtocolHash::FILE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolHash(u64);

impl ProtocolHash {
    /// Hash of the default `file` protocol.
    pub const FILE: Self = Self::of(crate::path::types::DEFAULT_PROTOCOL);

    /// Hash a protocol name.
    #[must_use]
    pub const fn of(protocol: &str) -> Self {
        let bytes = protocol.as_bytes();
        let mut hash = FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// The raw hash value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProtocolHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A table of per-protocol values keyed by [`ProtocolHash`].
///
/// # Examples
///
/// ```
/// use respath::{ProtocolTable, ResourcePath};
///
/// let mut loaders = ProtocolTable::new();
/// loaders.register("file", "disk loader");
/// loaders.register("zip", "archive loader");
///
/// let path = ResourcePath::new("zip://media.zip#poem.txt");
/// assert_eq!(loaders.get(&path), Some(&"archive loader"));
/// assert_eq!(loaders.get(&ResourcePath::new("memory://")), None);
/// ```
#[derive(Debug, Clone)]
pub struct ProtocolTable<T> {
    entries: HashMap<ProtocolHash, (String, T)>,
}

impl<T> Default for ProtocolTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> ProtocolTable<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` for `protocol`, returning the value it replaces.
    pub fn register(&mut self, protocol: &str, value: T) -> Option<T> {
        self.entries
            .insert(ProtocolHash::of(protocol), (protocol.to_string(), value))
            .map(|(_, previous)| previous)
    }

    /// Remove the value registered for `protocol`.
    pub fn unregister(&mut self, protocol: &str) -> Option<T> {
        self.entries
            .remove(&ProtocolHash::of(protocol))
            .map(|(_, value)| value)
    }

    /// Look up the value for a path's protocol.
    #[must_use]
    pub fn get(&self, path: &ResourcePath) -> Option<&T> {
        self.get_by_hash(path.protocol_hash())
    }

    /// Look up by precomputed hash.
    #[must_use]
    pub fn get_by_hash(&self, hash: ProtocolHash) -> Option<&T> {
        self.entries.get(&hash).map(|(_, value)| value)
    }

    /// Whether a value is registered for `protocol`.
    #[must_use]
    pub fn contains(&self, protocol: &str) -> bool {
        self.entries.contains_key(&ProtocolHash::of(protocol))
    }

    /// Registered protocol names, sorted.
    #[must_use]
    pub fn protocols(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|(name, _)| name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered protocols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
