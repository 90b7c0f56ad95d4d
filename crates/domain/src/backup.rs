//! Backup records and the last-backup summary, as published by the
//! backup guardian sensors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::destination::DEFAULT_DESTINATION;
use crate::snapshot::{EntityState, attribute_text};

/// Attribute on the total-backups entity holding the history list.
pub const BACKUP_LIST_ATTRIBUTE: &str = "backup_list";

/// State of the last-backup entity when no backup exists yet.
pub const NO_BACKUP_SENTINEL: &str = "Nessun backup";

/// Placeholder shown for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of hash characters shown inline before the ellipsis.
pub const HASH_PREVIEW_CHARS: usize = 16;

/// One historical backup. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub size: Option<String>,
    pub hash: Option<String>,
}

impl BackupRecord {
    /// Read a record from one `backup_list` element.
    ///
    /// Returns `None` when the element is not an object.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let text = |key: &str| fields.get(key).and_then(attribute_text);
        Some(Self {
            name: text("name"),
            destination: text("destination"),
            date: text("date"),
            time: text("time"),
            size: text("size"),
            hash: text("hash"),
        })
    }

    /// Destination, or the local default when the record names none.
    #[must_use]
    pub fn destination_or_default(&self) -> &str {
        self.destination.as_deref().unwrap_or(DEFAULT_DESTINATION)
    }

    /// Hash formatted for inline display.
    #[must_use]
    pub fn hash_display(&self) -> HashDisplay {
        HashDisplay::new(self.hash.as_deref())
    }
}

/// Summary of the most recent backup, read from the last-backup entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LastBackup {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub size: Option<String>,
    pub hash: Option<String>,
    pub kind: Option<String>,
}

impl LastBackup {
    /// Read the summary from the last-backup entity.
    ///
    /// Returns `None` when the entity reports [`NO_BACKUP_SENTINEL`].
    #[must_use]
    pub fn from_entity(entity: &EntityState) -> Option<Self> {
        if entity.state == NO_BACKUP_SENTINEL {
            return None;
        }
        Some(Self {
            name: entity.attribute_text("backup_name"),
            destination: entity.attribute_text("backup_destination"),
            date: entity.attribute_text("backup_date"),
            time: entity.attribute_text("backup_time"),
            size: entity.attribute_text("backup_size"),
            hash: entity.attribute_text("backup_hash"),
            kind: entity.attribute_text("backup_type"),
        })
    }

    /// Destination, or the local default when the entity names none.
    #[must_use]
    pub fn destination_or_default(&self) -> &str {
        self.destination.as_deref().unwrap_or(DEFAULT_DESTINATION)
    }

    /// Hash formatted for inline display.
    #[must_use]
    pub fn hash_display(&self) -> HashDisplay {
        HashDisplay::new(self.hash.as_deref())
    }
}

/// Compact hash for inline display plus the full value for the tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashDisplay {
    pub short: String,
    pub full: String,
}

impl HashDisplay {
    /// Apply the display policy: hashes longer than [`HASH_PREVIEW_CHARS`]
    /// are cut and suffixed with `...`; a missing or empty hash is `N/A`.
    #[must_use]
    pub fn new(hash: Option<&str>) -> Self {
        match hash {
            Some(full) if !full.is_empty() => {
                let short = if full.chars().count() > HASH_PREVIEW_CHARS {
                    let prefix: String = full.chars().take(HASH_PREVIEW_CHARS).collect();
                    format!("{prefix}...")
                } else {
                    full.to_string()
                };
                Self {
                    short,
                    full: full.to_string(),
                }
            }
            _ => Self {
                short: NOT_AVAILABLE.to_string(),
                full: NOT_AVAILABLE.to_string(),
            },
        }
    }
}
