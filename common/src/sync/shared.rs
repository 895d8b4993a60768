use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::collections::LinkedList;

/// A [`LinkedList`] shared between threads behind a reader/writer spinlock.
///
/// Mutators (`append`, `remove_at`, `sort`, `clear`) hold the write lock for
/// the whole operation since they rewrite links or values. Readers
/// (`contains`, `find_map`, `traverse`, `len`) share the read lock and never
/// overlap a mutator.
///
/// A reference into the list cannot outlive the read lock, so lookups hand
/// the match to a closure instead of returning it.
///
/// # Example
///
/// ```
/// use common::sync::SharedList;
///
/// let jobs = SharedList::new();
/// jobs.append(3);
/// jobs.append(1);
/// jobs.sort();
/// assert_eq!(jobs.find_map(&1, |v| *v * 10), Some(10));
/// ```
pub struct SharedList<T> {
    inner: RwLock<LinkedList<T>>,
}

impl<T> SharedList<T> {
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(LinkedList::new()),
        }
    }

    pub fn append(&self, value: T) {
        self.inner.write().append(value);
    }

    pub fn remove_at(&self, position: isize) {
        self.inner.write().remove_at(position);
    }

    pub fn sort(&self)
    where
        T: Ord,
    {
        self.inner.write().sort();
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn contains(&self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.read().search(needle).is_some()
    }

    /// Runs `f` on the first element equal to `needle` while the read lock
    /// is held.
    pub fn find_map<R, F>(&self, needle: &T, f: F) -> Option<R>
    where
        T: PartialEq,
        F: FnOnce(&T) -> R,
    {
        self.inner.read().search(needle).map(f)
    }

    pub fn traverse<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.inner.read().traverse(visit);
    }

    /// Shared access for several reads under one lock
    pub fn read(&self) -> RwLockReadGuard<'_, LinkedList<T>> {
        self.inner.read()
    }

    /// Exclusive access for several mutations under one lock
    pub fn write(&self) -> RwLockWriteGuard<'_, LinkedList<T>> {
        self.inner.write()
    }

    pub fn into_inner(self) -> LinkedList<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<LinkedList<T>> for SharedList<T> {
    fn from(list: LinkedList<T>) -> Self {
        Self {
            inner: RwLock::new(list),
        }
    }
}
