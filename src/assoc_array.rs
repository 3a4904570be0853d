use std::fmt;

use crate::error::{Error, Result};

/// Number of slots a freshly constructed array can hold before it grows.
pub const DEFAULT_CAPACITY: usize = 16;

/// A map from keys to values kept in two parallel vectors and searched linearly.
///
/// Every lookup is `O(n)`. Removal moves the last pair into the freed slot, so the
/// order of the remaining pairs is insertion order only until the first removal.
///
/// The null key is spelled `None`. It can never be stored: [`AssociativeArray::set`]
/// rejects it with [`Error::NullKey`] and every lookup treats it as absent.
pub struct AssociativeArray<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    capacity: usize,
}

impl<K, V> AssociativeArray<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` pairs.
    ///
    /// A capacity of zero is bumped to one so doubling always makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn size(&self) -> usize {
        debug_assert_eq!(self.keys.len(), self.values.len());
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every pair. Capacity is left as is.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    pub fn iter(&self) -> std::iter::Zip<std::slice::Iter<'_, K>, std::slice::Iter<'_, V>> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Keys stay immutable so two live pairs can't end up sharing one.
    pub fn iter_mut(
        &mut self,
    ) -> std::iter::Zip<std::slice::Iter<'_, K>, std::slice::IterMut<'_, V>> {
        self.keys.iter().zip(self.values.iter_mut())
    }

    pub fn keys(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    fn expand(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2);
        log::trace!(
            "expanding associative array from {} to {} slots",
            self.capacity,
            new_capacity
        );

        let additional = new_capacity - self.keys.len();
        self.keys.reserve_exact(additional);
        self.values.reserve_exact(additional);
        self.capacity = new_capacity;
    }
}

impl<K: PartialEq, V> AssociativeArray<K, V> {
    /// Associates `value` with `key`, replacing the value of an existing equal key.
    ///
    /// Fails with [`Error::NullKey`] when `key` is `None`; the array is left untouched.
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<()> {
        let key = key.into().ok_or(Error::NullKey)?;
        self.insert(key, value);
        Ok(())
    }

    /// Fails with [`Error::KeyNotFound`] when no live pair has an equal key.
    pub fn get<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<&V>
    where
        K: 'k,
    {
        match self.find(key.into()) {
            Some(index) => Ok(&self.values[index]),
            None => Err(Error::KeyNotFound),
        }
    }

    pub fn get_mut<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<&mut V>
    where
        K: 'k,
    {
        match self.find(key.into()) {
            Some(index) => Ok(&mut self.values[index]),
            None => Err(Error::KeyNotFound),
        }
    }

    pub fn has_key<'k>(&self, key: impl Into<Option<&'k K>>) -> bool
    where
        K: 'k,
    {
        self.find(key.into()).is_some()
    }

    /// Removes the pair for `key` and returns its value. Absent keys are a no-op.
    ///
    /// The last live pair is moved into the removed pair's slot.
    pub fn remove<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Option<V>
    where
        K: 'k,
    {
        let index = self.find(key.into())?;
        self.keys.swap_remove(index);
        Some(self.values.swap_remove(index))
    }

    fn insert(&mut self, key: K, value: V) {
        // grows on a full array even when the key turns out to be present
        if self.size() >= self.capacity {
            self.expand();
        }

        match self.find(Some(&key)) {
            Some(index) => self.values[index] = value,
            None => {
                self.keys.push(key);
                self.values.push(value);
            }
        }
    }

    fn find(&self, key: Option<&K>) -> Option<usize> {
        let key = key?;
        for (i, k) in self.keys.iter().enumerate() {
            if k == key {
                return Some(i);
            }
        }

        None
    }
}

impl<K, V> Default for AssociativeArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for AssociativeArray<K, V> {
    /// The copy starts from [`DEFAULT_CAPACITY`] and doubles as it is filled, so its
    /// capacity can differ from the source's.
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        for (key, value) in self.iter() {
            if cloned.size() >= cloned.capacity {
                cloned.expand();
            }
            cloned.keys.push(key.clone());
            cloned.values.push(value.clone());
        }

        log::trace!("cloned associative array with {} pairs", cloned.size());
        cloned
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssociativeArray<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Eq, V: Eq> Eq for AssociativeArray<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }

        f.write_str("{ ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str(" }")
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssociativeArray<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for AssociativeArray<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for AssociativeArray<K, V> {
    type Item = (K, V);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl<'a, K, V> IntoIterator for &'a AssociativeArray<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::iter::Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
