//! Card configuration: the entity identifiers the card reads from.
//!
//! Supplied once at setup. Only `entity` is mandatory; the two secondary
//! identifiers fall back to the sensors published by the backup guardian
//! integration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default sensor holding the most recent backup.
pub const DEFAULT_LAST_BACKUP_ENTITY: &str = "sensor.backup_guardian_ultimo_backup";

/// Default sensor holding the total size of all backups.
pub const DEFAULT_SIZE_ENTITY: &str = "sensor.backup_guardian_dimensione_totale";

/// Configuration of a status card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Primary entity: total backup count, carries the `backup_list` attribute.
    #[serde(default)]
    pub entity: String,
    /// Entity describing the most recent backup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_entity: Option<String>,
    /// Entity whose state is the total size of all backups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_entity: Option<String>,
}

impl CardConfig {
    /// Create a configuration for the given primary entity, using defaults
    /// for the secondary entities.
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            last_backup_entity: None,
            size_entity: None,
        }
    }

    /// Override the last-backup entity.
    #[must_use]
    pub fn with_last_backup_entity(mut self, entity: impl Into<String>) -> Self {
        self.last_backup_entity = Some(entity.into());
        self
    }

    /// Override the total-size entity.
    #[must_use]
    pub fn with_size_entity(mut self, entity: impl Into<String>) -> Self {
        self.size_entity = Some(entity.into());
        self
    }

    /// Check setup invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingEntity`] if `entity` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.entity.is_empty() {
            return Err(ValidationError::MissingEntity);
        }
        Ok(())
    }

    /// Entity describing the most recent backup, or its default.
    #[must_use]
    pub fn last_backup_entity(&self) -> &str {
        non_empty_or(
            self.last_backup_entity.as_deref(),
            DEFAULT_LAST_BACKUP_ENTITY,
        )
    }

    /// Entity holding the total size, or its default.
    #[must_use]
    pub fn size_entity(&self) -> &str {
        non_empty_or(self.size_entity.as_deref(), DEFAULT_SIZE_ENTITY)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(val) if !val.is_empty() => val,
        _ => fallback,
    }
}
