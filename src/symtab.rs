//! Four interchangeable symbol-table implementations.
//!
//! Each variant maps string names to values of an opaque type `V`
//! behind the same [`SymbolTable`] trait, but they deliberately
//! diverge on what a repeated insert under one name does:
//!
//! | Variant | Backing store | Duplicate insert |
//! |---------|---------------|------------------|
//! | [`OrderedSymbolTable`] | append-only vec | first write wins |
//! | [`UnorderedSymbolTable`] | hash map | last write wins |
//! | [`TreeSymbolTable`] | binary search tree | silently ignored |
//! | [`HashedSymbolTable`] | fixed bucket array | last write wins |
//!
//! The divergence is part of each variant's contract, not an
//! implementation accident to smooth over. None of the tables support
//! removal.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

/// Common contract shared by the four table variants.
///
/// `insert` never fails; `lookup` of a never-inserted name returns
/// `None`.
pub trait SymbolTable<V> {
    /// Store `value` under `name`. What happens when `name` is
    /// already present differs per variant.
    fn insert(&mut self, name: &str, value: V);

    /// Return the value stored under `name`, if any.
    fn lookup(&self, name: &str) -> Option<&V>;
}

/// Append-only table scanned in insertion order on lookup.
///
/// Inserting a name twice appends a second entry rather than
/// overwriting, so lookup keeps returning the first one.
#[derive(Debug, Clone)]
pub struct OrderedSymbolTable<V> {
    symbols: Vec<(String, V)>,
}

impl<V> OrderedSymbolTable<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Number of stored entries, duplicate names included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<V> Default for OrderedSymbolTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SymbolTable<V> for OrderedSymbolTable<V> {
    fn insert(&mut self, name: &str, value: V) {
        self.symbols.push((name.to_string(), value));
    }

    fn lookup(&self, name: &str) -> Option<&V> {
        self.symbols
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }
}

/// Table backed by a hash map; a repeated insert overwrites.
#[derive(Debug, Clone)]
pub struct UnorderedSymbolTable<V> {
    symbols: FxHashMap<String, V>,
}

impl<V> UnorderedSymbolTable<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<V> Default for UnorderedSymbolTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SymbolTable<V> for UnorderedSymbolTable<V> {
    fn insert(&mut self, name: &str, value: V) {
        self.symbols.insert(name.to_string(), value);
    }

    fn lookup(&self, name: &str) -> Option<&V> {
        self.symbols.get(name)
    }
}

/// Binary search tree keyed by lexicographic name order.
///
/// Insert only descends on strict ordering, so inserting a name that
/// is already present is a silent no-op: the stored value is neither
/// replaced nor duplicated.
#[derive(Debug, Clone)]
pub struct TreeSymbolTable<V> {
    root: Option<Box<TreeNode<V>>>,
    len: usize,
}

#[derive(Debug, Clone)]
struct TreeNode<V> {
    name: String,
    value: V,
    left: Option<Box<TreeNode<V>>>,
    right: Option<Box<TreeNode<V>>>,
}

impl<V> TreeNode<V> {
    fn leaf(name: &str, value: V) -> Self {
        Self {
            name: name.to_string(),
            value,
            left: None,
            right: None,
        }
    }

    /// Returns whether a new node was created.
    fn insert(&mut self, name: &str, value: V) -> bool {
        match name.cmp(self.name.as_str()) {
            Ordering::Less => match &mut self.left {
                Some(node) => node.insert(name, value),
                None => {
                    self.left = Some(Box::new(Self::leaf(name, value)));
                    true
                }
            },
            Ordering::Greater => match &mut self.right {
                Some(node) => node.insert(name, value),
                None => {
                    self.right = Some(Box::new(Self::leaf(name, value)));
                    true
                }
            },
            // equal keys are dropped, not replaced
            Ordering::Equal => false,
        }
    }

    fn lookup(&self, name: &str) -> Option<&V> {
        match name.cmp(self.name.as_str()) {
            Ordering::Equal => Some(&self.value),
            Ordering::Less => self.left.as_deref().and_then(|node| node.lookup(name)),
            Ordering::Greater => self.right.as_deref().and_then(|node| node.lookup(name)),
        }
    }
}

impl<V> TreeSymbolTable<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct names in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<V> Default for TreeSymbolTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SymbolTable<V> for TreeSymbolTable<V> {
    fn insert(&mut self, name: &str, value: V) {
        match &mut self.root {
            Some(node) => {
                if node.insert(name, value) {
                    self.len += 1;
                }
            }
            None => {
                self.root = Some(Box::new(TreeNode::leaf(name, value)));
                self.len += 1;
            }
        }
    }

    fn lookup(&self, name: &str) -> Option<&V> {
        self.root.as_deref().and_then(|node| node.lookup(name))
    }
}

/// Separate-chaining hash table with a bucket count fixed at
/// construction. A repeated insert overwrites the in-bucket entry.
///
/// The bucket index is a deterministic `FxHasher` digest of the name
/// reduced modulo the bucket count.
#[derive(Debug, Clone)]
pub struct HashedSymbolTable<V> {
    buckets: Vec<Vec<(String, V)>>,
    len: usize,
}

impl<V> HashedSymbolTable<V> {
    /// Create a table with `bucket_count` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    #[must_use]
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be non-zero");
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Number of distinct names in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index(&self, name: &str) -> usize {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        hasher.finish() as usize % self.buckets.len()
    }
}

impl<V> SymbolTable<V> for HashedSymbolTable<V> {
    fn insert(&mut self, name: &str, value: V) {
        let index = self.bucket_index(name);
        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.iter_mut().find(|(n, _)| n.as_str() == name) {
            entry.1 = value;
        } else {
            bucket.push((name.to_string(), value));
            self.len += 1;
        }
    }

    fn lookup(&self, name: &str) -> Option<&V> {
        self.buckets[self.bucket_index(name)]
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }
}

/// Descriptive record attached to a symbol by the driver.
///
/// Carries no behavior; the tables treat their value type as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub counter: u32,
    pub variable_name: String,
    pub object_address: String,
    pub type_name: String,
    pub dimension: Option<u32>,
    pub line_direction: LineDirection,
    pub line_reference: Option<u32>,
}

/// Layout direction recorded in [`Metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDirection {
    #[default]
    Horizontal,
    Vertical,
}
