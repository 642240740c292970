use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Event, Location, Participant, User};

/// Initial contents of the store, read from a JSON file.
///
/// Every list is optional:
///
/// ```json
/// { "users": [{ "id": "1", "username": "a", "email": "a@x.com" }] }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub users: Vec<User>,
    pub locations: Vec<Location>,
    pub events: Vec<Event>,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Seed {
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
