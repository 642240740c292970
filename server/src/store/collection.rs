use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_graphql::ID;

use crate::models::{Event, Location, Participant, User};
use crate::utils::error::AppError;

/// A stored entity with a unique id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in error messages.
    const KIND: &'static str;

    fn id(&self) -> &ID;
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &ID {
        &self.id
    }
}

impl Record for Location {
    const KIND: &'static str = "Location";

    fn id(&self) -> &ID {
        &self.id
    }
}

impl Record for Event {
    const KIND: &'static str = "Event";

    fn id(&self) -> &ID {
        &self.id
    }
}

impl Record for Participant {
    const KIND: &'static str = "Participant";

    fn id(&self) -> &ID {
        &self.id
    }
}

/// Insertion-ordered list of records behind a single lock.
///
/// Lookups are linear scans. Every read-modify-write sequence (locate then
/// mutate or splice) happens under one write guard, so callers never observe a
/// half-applied change.
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, AppError> {
        self.records
            .read()
            .map_err(|_| AppError::InternalServerError(format!("{} store lock poisoned", T::KIND)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, AppError> {
        self.records
            .write()
            .map_err(|_| AppError::InternalServerError(format!("{} store lock poisoned", T::KIND)))
    }

    fn position(records: &[T], id: &ID) -> Option<usize> {
        records.iter().position(|record| record.id() == id)
    }

    pub fn append(&self, record: T) -> Result<T, AppError> {
        self.write()?.push(record.clone());
        Ok(record)
    }

    pub fn all(&self) -> Result<Vec<T>, AppError> {
        Ok(self.read()?.clone())
    }

    pub fn find_by_id(&self, id: &ID) -> Result<Option<T>, AppError> {
        Ok(self.read()?.iter().find(|record| record.id() == id).cloned())
    }

    pub fn find_index(&self, id: &ID) -> Result<Option<usize>, AppError> {
        Ok(Self::position(&self.read()?, id))
    }

    pub fn filter<P>(&self, predicate: P) -> Result<Vec<T>, AppError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .read()?
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    /// Applies `change` to the record with `id` and returns the updated copy.
    ///
    /// Fails with NotFound, without touching the collection, when `id` has no match.
    pub fn update<F>(&self, id: &ID, change: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.write()?;
        let index =
            Self::position(&records, id).ok_or_else(|| AppError::not_found(T::KIND, id))?;

        let record = &mut records[index];
        change(record);
        debug_assert!(record.id() == id, "update must not change the record id");
        Ok(record.clone())
    }

    /// Removes the record with `id`, keeping the order of the survivors.
    pub fn remove(&self, id: &ID) -> Result<T, AppError> {
        let mut records = self.write()?;
        let index =
            Self::position(&records, id).ok_or_else(|| AppError::not_found(T::KIND, id))?;
        Ok(records.remove(index))
    }

    /// Empties the collection and returns how many records it held.
    pub fn clear(&self) -> Result<usize, AppError> {
        let mut records = self.write()?;
        let count = records.len();
        records.clear();
        Ok(count)
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
