//! Destination formatting: badge label and color for a backup target.
//!
//! The table accepts both integration codes (`google_drive`) and the friendly
//! names the integration publishes (`Google Drive`). Brand colors are fixed.

use serde::Serialize;

/// Color used for local backups and for any unknown destination.
pub const DEFAULT_COLOR: &str = "#03A9F4";

/// Destination assumed when a backup does not name one.
pub const DEFAULT_DESTINATION: &str = "Home Assistant Locale";

struct Destination {
    code: &'static str,
    friendly: &'static str,
    label: &'static str,
    color: &'static str,
}

const DESTINATIONS: [Destination; 6] = [
    Destination {
        code: "local",
        friendly: "home assistant locale",
        label: "HOME ASSISTANT LOCALE",
        color: "#03A9F4",
    },
    Destination {
        code: "google_drive",
        friendly: "google drive",
        label: "GOOGLE DRIVE",
        color: "#4CAF50",
    },
    Destination {
        code: "dropbox",
        friendly: "dropbox",
        label: "DROPBOX",
        color: "#0061FF",
    },
    Destination {
        code: "onedrive",
        friendly: "onedrive",
        label: "ONEDRIVE",
        color: "#E74C3C",
    },
    Destination {
        code: "nas",
        friendly: "nas",
        label: "NAS",
        color: "#FF9800",
    },
    Destination {
        code: "ftp",
        friendly: "ftp",
        label: "FTP",
        color: "#9C27B0",
    },
];

fn find(key: &str) -> Option<&'static Destination> {
    DESTINATIONS
        .iter()
        .find(|dest| dest.code == key || dest.friendly == key)
}

/// Lower-cased match first, then the raw input.
fn lookup(destination: &str) -> Option<&'static Destination> {
    find(&destination.to_lowercase()).or_else(|| find(destination))
}

/// Badge color for a destination, falling back to [`DEFAULT_COLOR`].
#[must_use]
pub fn color_for(destination: &str) -> &'static str {
    lookup(destination).map_or(DEFAULT_COLOR, |dest| dest.color)
}

/// Upper-case badge label for a destination.
///
/// Unknown destinations are shown as their upper-cased raw text.
#[must_use]
pub fn label_for(destination: &str) -> String {
    lookup(destination).map_or_else(|| destination.to_uppercase(), |dest| dest.label.to_string())
}

/// Label and color pair rendered as a destination badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: &'static str,
}

impl Badge {
    /// Build the badge for a destination.
    #[must_use]
    pub fn for_destination(destination: &str) -> Self {
        Self {
            label: label_for(destination),
            color: color_for(destination),
        }
    }
}
