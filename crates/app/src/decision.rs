//! Render decision: whether a snapshot push must re-render the card.

use serde::Serialize;

use guardian_domain::snapshot::Snapshot;

/// Outcome of a snapshot push or a user toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderDecision {
    /// Nothing has been rendered yet.
    Initial,
    /// The primary entity's state or backup list changed.
    Changed,
    /// Nothing the card shows has changed.
    Unchanged,
    /// The history list is open; the push is ignored to keep its scroll position.
    Suppressed,
    /// The user opened or closed the history list.
    Toggled,
}

impl RenderDecision {
    /// Whether this outcome requires a full render.
    #[must_use]
    pub fn should_render(self) -> bool {
        matches!(self, Self::Initial | Self::Changed | Self::Toggled)
    }
}

/// Decide whether pushing `next` must re-render a card watching `entity_id`.
///
/// Only the primary entity is compared: its `state` string and the
/// serialized `backup_list` attribute. A primary entity that is missing from
/// either snapshot always counts as a change.
#[must_use]
pub fn decide(
    entity_id: &str,
    previous: Option<&Snapshot>,
    next: &Snapshot,
    rendered: bool,
    expanded: bool,
) -> RenderDecision {
    if !rendered {
        return RenderDecision::Initial;
    }
    if expanded {
        return RenderDecision::Suppressed;
    }
    let old = previous.and_then(|snapshot| snapshot.get(entity_id));
    let new = next.get(entity_id);
    match (old, new) {
        (Some(old), Some(new))
            if old.state == new.state
                && old.backup_list_fingerprint() == new.backup_list_fingerprint() =>
        {
            RenderDecision::Unchanged
        }
        _ => RenderDecision::Changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_domain::snapshot::EntityState;
    use serde_json::json;

    const TOTAL: &str = "sensor.backup_guardian_totale_backup";

    fn snapshot(state: &str, list: serde_json::Value) -> Snapshot {
        Snapshot::new().with_entity(
            TOTAL,
            EntityState::new(state).with_attribute("backup_list", list),
        )
    }

    #[test]
    fn should_render_initially_even_when_expanded() {
        let next = snapshot("1", json!([]));
        assert_eq!(
            decide(TOTAL, None, &next, false, true),
            RenderDecision::Initial
        );
    }

    #[test]
    fn should_suppress_while_expanded() {
        let prev = snapshot("1", json!([]));
        let next = snapshot("2", json!([{"name": "new"}]));
        assert_eq!(
            decide(TOTAL, Some(&prev), &next, true, true),
            RenderDecision::Suppressed
        );
    }

    #[test]
    fn should_detect_state_change() {
        let prev = snapshot("1", json!([]));
        let next = snapshot("2", json!([]));
        assert_eq!(
            decide(TOTAL, Some(&prev), &next, true, false),
            RenderDecision::Changed
        );
    }

    #[test]
    fn should_detect_backup_list_change_with_same_state() {
        let prev = snapshot("1", json!([{"name": "a", "hash": "1"}]));
        let next = snapshot("1", json!([{"name": "a", "hash": "2"}]));
        assert_eq!(
            decide(TOTAL, Some(&prev), &next, true, false),
            RenderDecision::Changed
        );
    }

    #[test]
    fn should_report_unchanged_for_identical_primary_entity() {
        let prev = snapshot("1", json!([{"name": "a"}]));
        let next = snapshot("1", json!([{"name": "a"}]))
            .with_entity("sensor.unrelated", EntityState::new("whatever"));
        assert_eq!(
            decide(TOTAL, Some(&prev), &next, true, false),
            RenderDecision::Unchanged
        );
    }

    #[test]
    fn should_ignore_changes_to_other_entities() {
        let prev = snapshot("1", json!([])).with_entity(
            "sensor.backup_guardian_dimensione_totale",
            EntityState::new("100"),
        );
        let next = snapshot("1", json!([])).with_entity(
            "sensor.backup_guardian_dimensione_totale",
            EntityState::new("200"),
        );
        assert_eq!(
            decide(TOTAL, Some(&prev), &next, true, false),
            RenderDecision::Unchanged
        );
    }

    #[test]
    fn should_treat_missing_previous_entity_as_change() {
        let prev = Snapshot::new();
        let next = snapshot("1", json!([]));
        assert_eq!(
            decide(TOTAL, Some(&prev), &next, true, false),
            RenderDecision::Changed
        );
    }

    #[test]
    fn should_treat_vanished_entity_as_change() {
        let prev = snapshot("1", json!([]));
        let next = Snapshot::new();
        assert_eq!(
            decide(TOTAL, Some(&prev), &next, true, false),
            RenderDecision::Changed
        );
    }

    #[test]
    fn should_only_render_for_initial_changed_and_toggled() {
        assert!(RenderDecision::Initial.should_render());
        assert!(RenderDecision::Changed.should_render());
        assert!(RenderDecision::Toggled.should_render());
        assert!(!RenderDecision::Unchanged.should_render());
        assert!(!RenderDecision::Suppressed.should_render());
    }

    #[test]
    fn should_serialize_decision_in_snake_case() {
        let json = serde_json::to_string(&RenderDecision::Suppressed).unwrap();
        assert_eq!(json, "\"suppressed\"");
    }
}
