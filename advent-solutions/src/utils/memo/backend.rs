//! Storage backends for [`Memo`](super::Memo).

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Storage for computed values keyed by index.
pub trait Backend<I, V> {
    fn get(&self, index: &I) -> Option<&V>;

    /// Store `value` for `index`, keeping any value already present.
    fn insert(&mut self, index: I, value: V);

    /// Number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense storage for `usize` indices starting at 0.
#[derive(Debug)]
pub struct VecBackend<V> {
    data: Vec<Option<V>>,
}

impl<V> VecBackend<V> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<V> Default for VecBackend<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Backend<usize, V> for VecBackend<V> {
    fn get(&self, index: &usize) -> Option<&V> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn insert(&mut self, index: usize, value: V) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].get_or_insert(value);
    }

    fn len(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}

/// Sparse storage for any hashable index.
#[derive(Debug)]
pub struct HashBackend<I, V> {
    data: FxHashMap<I, V>,
}

impl<I, V> HashBackend<I, V> {
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }
}

impl<I, V> Default for HashBackend<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, V> Backend<I, V> for HashBackend<I, V> {
    fn get(&self, index: &I) -> Option<&V> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: V) {
        self.data.entry(index).or_insert(value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
