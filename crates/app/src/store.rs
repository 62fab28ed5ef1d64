//! In-memory storage for master-data collections.
//!
//! A [`Store`] owns one collection behind an async read/write lock. Registry
//! operations take the write guard through [`Store::begin`], run every check
//! against the current records and only then mutate, so a rejected operation
//! leaves the collection untouched and no caller ever observes a half-applied
//! change. Stores are independent: nothing spans two collections.

use std::{fmt, sync::Arc};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::uuids::TypedUuid;

/// A record that can be stored in a [`Collection`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier assigned to the record when it was created.
    fn uuid(&self) -> TypedUuid<Self>;
}

/// Exclusive access to a collection for the duration of one operation.
pub type Transaction<'a, T> = RwLockWriteGuard<'a, Collection<T>>;

/// Shared access to a collection for reads.
pub type Snapshot<'a, T> = RwLockReadGuard<'a, Collection<T>>;

/// Records kept in insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Mutable records in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.records.iter_mut()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when a record with this id exists.
    #[must_use]
    pub fn contains(&self, uuid: TypedUuid<T>) -> bool {
        self.get(uuid).is_some()
    }

    /// Looks a record up by id.
    #[must_use]
    pub fn get(&self, uuid: TypedUuid<T>) -> Option<&T> {
        self.records.iter().find(|record| record.uuid() == uuid)
    }

    /// Looks a record up by id for in-place mutation.
    pub fn get_mut(&mut self, uuid: TypedUuid<T>) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.uuid() == uuid)
    }

    /// Finds a record matching `predicate`, skipping the record identified by
    /// `except` so an update is never checked against itself.
    pub fn find_other<P>(&self, except: Option<TypedUuid<T>>, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .iter()
            .filter(|record| Some(record.uuid()) != except)
            .find(|record| predicate(record))
    }

    /// Appends a record at the end of the collection.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Removes a record, keeping the order of the remaining ones.
    pub fn remove(&mut self, uuid: TypedUuid<T>) -> Option<T> {
        let index = self.records.iter().position(|record| record.uuid() == uuid)?;

        Some(self.records.remove(index))
    }

    /// Copies every record out of the collection.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.records.clone()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Cloneable handle to one collection.
pub struct Store<T> {
    inner: Arc<RwLock<Collection<T>>>,
}

impl<T: Record> Store<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Creates a store holding `records` in the given order.
    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }

    /// Acquires shared read access.
    pub async fn read(&self) -> Snapshot<'_, T> {
        self.inner.read().await
    }

    /// Acquires exclusive access for a check-then-mutate operation.
    pub async fn begin(&self) -> Transaction<'_, T> {
        self.inner.write().await
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Cloneable handle to a value that always exists exactly once.
pub struct Singleton<T> {
    inner: Arc<RwLock<T>>,
}

impl<T: Clone + Send + Sync> Singleton<T> {
    /// Wraps the initial value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Returns a copy of the current value.
    pub async fn get(&self) -> T {
        self.inner.read().await.clone()
    }

    /// Acquires exclusive access for an in-place update.
    pub async fn begin(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().await
    }
}

impl<T: Clone + Send + Sync + Default> Default for Singleton<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for Singleton<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton").finish_non_exhaustive()
    }
}
