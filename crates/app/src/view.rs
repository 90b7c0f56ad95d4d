//! Card view model: everything a renderer needs, already formatted.

use serde::Serialize;

use guardian_domain::backup::{BackupRecord, HashDisplay, LastBackup, NOT_AVAILABLE};
use guardian_domain::config::CardConfig;
use guardian_domain::destination::Badge;
use guardian_domain::snapshot::Snapshot;

/// Total size shown when the size entity is absent.
pub const DEFAULT_TOTAL_SIZE: &str = "0";

/// What the card shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardView {
    /// The primary entity is missing; nothing else is shown.
    EntityNotFound { entity_id: String },
    /// Normal status card.
    Status(Box<StatusView>),
}

/// Status card content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    /// Panel for the most recent backup, if there is one.
    pub last_backup: Option<LastBackupView>,
    /// Primary entity state.
    pub total_backups: String,
    /// Size entity state, or [`DEFAULT_TOTAL_SIZE`].
    pub total_size: String,
    /// History rows in published order.
    pub backups: Vec<BackupRowView>,
    /// Whether the history list is open.
    pub expanded: bool,
}

/// Last-backup panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastBackupView {
    pub name: String,
    pub badge: Badge,
    pub date: String,
    pub time: String,
    pub size: String,
    pub hash: HashDisplay,
    pub kind: Option<String>,
}

/// One history row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupRowView {
    pub name: String,
    pub badge: Badge,
    pub date_time: String,
    pub size: String,
    pub hash: HashDisplay,
}

impl CardView {
    /// Build the view for `snapshot` as seen through `config`.
    #[must_use]
    pub fn build(config: &CardConfig, snapshot: &Snapshot, expanded: bool) -> Self {
        let Some(total) = snapshot.get(&config.entity) else {
            return Self::EntityNotFound {
                entity_id: config.entity.clone(),
            };
        };

        let last_backup = snapshot
            .get(config.last_backup_entity())
            .and_then(LastBackup::from_entity)
            .map(|last| LastBackupView::from(&last));

        let total_size = snapshot
            .get(config.size_entity())
            .map_or_else(|| DEFAULT_TOTAL_SIZE.to_string(), |size| size.state.clone());

        Self::Status(Box::new(StatusView {
            last_backup,
            total_backups: total.state.clone(),
            total_size,
            backups: total.backup_list().iter().map(BackupRowView::from).collect(),
            expanded,
        }))
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

impl From<&LastBackup> for LastBackupView {
    fn from(last: &LastBackup) -> Self {
        Self {
            name: or_not_available(last.name.as_deref()),
            badge: Badge::for_destination(last.destination_or_default()),
            date: or_not_available(last.date.as_deref()),
            time: or_not_available(last.time.as_deref()),
            size: or_not_available(last.size.as_deref()),
            hash: last.hash_display(),
            kind: last.kind.clone(),
        }
    }
}

impl From<&BackupRecord> for BackupRowView {
    fn from(record: &BackupRecord) -> Self {
        let date_time = match (record.date.as_deref(), record.time.as_deref()) {
            (Some(date), Some(time)) => format!("{date} {time}"),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => NOT_AVAILABLE.to_string(),
        };
        Self {
            name: or_not_available(record.name.as_deref()),
            badge: Badge::for_destination(record.destination_or_default()),
            date_time,
            size: or_not_available(record.size.as_deref()),
            hash: record.hash_display(),
        }
    }
}
