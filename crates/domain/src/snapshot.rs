//! Snapshot: the host's full state map at one point in time.
//!
//! A snapshot is owned by the host and replaced wholesale on every push;
//! the card never mutates one. On the wire it is a plain JSON object keyed
//! by entity id.

mod attribute;
mod entity_state;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use attribute::attribute_text;
pub use entity_state::EntityState;

/// Entity id → state map published by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    states: HashMap<String, EntityState>,
}

impl Snapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entity while building a snapshot.
    #[must_use]
    pub fn with_entity(mut self, entity_id: impl Into<String>, state: EntityState) -> Self {
        self.states.insert(entity_id.into(), state);
        self
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    /// Whether the snapshot contains the entity.
    #[must_use]
    pub fn contains(&self, entity_id: &str) -> bool {
        self.states.contains_key(entity_id)
    }

    /// Number of entities in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the snapshot holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
