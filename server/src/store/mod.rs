use std::collections::HashSet;

use crate::models::{Event, Location, Participant, User};
use crate::utils::error::AppError;

pub mod collection;
pub mod id;
pub mod seed;

pub use collection::{Collection, Record};
pub use id::generate_id;
pub use seed::Seed;

/// In-memory storage for every entity, created once at startup and shared with
/// the resolvers through the schema data.
///
/// No referential integrity is enforced: deleting a user or location leaves
/// events and participants pointing at it.
#[derive(Default)]
pub struct Store {
    pub users: Collection<User>,
    pub locations: Collection<Location>,
    pub events: Collection<Event>,
    pub participants: Collection<Participant>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding the seed records in file order.
    ///
    /// Ids must be unique within each collection.
    pub fn from_seed(seed: Seed) -> Result<Self, AppError> {
        ensure_unique_ids(&seed.users)?;
        ensure_unique_ids(&seed.locations)?;
        ensure_unique_ids(&seed.events)?;
        ensure_unique_ids(&seed.participants)?;

        Ok(Self {
            users: Collection::from_records(seed.users),
            locations: Collection::from_records(seed.locations),
            events: Collection::from_records(seed.events),
            participants: Collection::from_records(seed.participants),
        })
    }
}

fn ensure_unique_ids<T: Record>(records: &[T]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id().as_str()) {
            return Err(AppError::ValidationError(format!(
                "duplicate {} id '{}' in seed data",
                T::KIND,
                record.id().as_str()
            )));
        }
    }
    Ok(())
}
