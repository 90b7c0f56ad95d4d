//! Status card: configuration, the `expanded` flag and the latest snapshot.

use guardian_domain::config::CardConfig;
use guardian_domain::error::ValidationError;
use guardian_domain::snapshot::Snapshot;

use crate::decision::{RenderDecision, decide};
use crate::view::CardView;

/// Layout weight reported to the dashboard host.
pub const CARD_SIZE: u32 = 3;

/// A configured backup status card.
///
/// Only the latest snapshot is retained. The previous one lives just long
/// enough to be compared against the new push.
#[derive(Debug)]
pub struct StatusCard {
    config: CardConfig,
    expanded: bool,
    rendered: bool,
    current: Option<Snapshot>,
}

impl StatusCard {
    /// Create a card from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingEntity`] if the configuration has
    /// no primary entity.
    pub fn new(config: CardConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            expanded: false,
            rendered: false,
            current: None,
        })
    }

    /// The card configuration.
    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Whether the history list is open.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether a render has been applied since construction.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// The latest snapshot, even if its push did not trigger a render.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// Accept a new snapshot from the host and decide whether to re-render.
    ///
    /// The snapshot always replaces the current one, so a later toggle
    /// renders the freshest data.
    pub fn push(&mut self, snapshot: Snapshot) -> RenderDecision {
        let previous = self.current.take();
        let decision = decide(
            &self.config.entity,
            previous.as_ref(),
            &snapshot,
            self.rendered,
            self.expanded,
        );
        self.current = Some(snapshot);
        decision
    }

    /// Open or close the history list. Always requires a render.
    pub fn toggle(&mut self) -> RenderDecision {
        self.expanded = !self.expanded;
        RenderDecision::Toggled
    }

    /// Record that the current view has been rendered.
    pub fn mark_rendered(&mut self) {
        self.rendered = true;
    }

    /// View model for the current snapshot, `None` before the first push.
    #[must_use]
    pub fn view(&self) -> Option<CardView> {
        self.current
            .as_ref()
            .map(|snapshot| CardView::build(&self.config, snapshot, self.expanded))
    }

    /// Layout weight, independent of content.
    #[must_use]
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_domain::snapshot::EntityState;
    use serde_json::json;

    const TOTAL: &str = "sensor.backup_guardian_totale_backup";

    fn card() -> StatusCard {
        StatusCard::new(CardConfig::new(TOTAL)).unwrap()
    }

    fn snapshot(state: &str) -> Snapshot {
        Snapshot::new().with_entity(
            TOTAL,
            EntityState::new(state).with_attribute("backup_list", json!([])),
        )
    }

    #[test]
    fn should_fail_setup_without_entity() {
        let err = StatusCard::new(CardConfig::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingEntity);
    }

    #[test]
    fn should_start_collapsed_and_unrendered() {
        let card = card();
        assert!(!card.is_expanded());
        assert!(!card.is_rendered());
        assert!(card.view().is_none());
    }

    #[test]
    fn should_report_fixed_card_size() {
        assert_eq!(card().card_size(), 3);
    }

    #[test]
    fn should_render_initially_until_marked() {
        let mut card = card();
        assert_eq!(card.push(snapshot("1")), RenderDecision::Initial);
        assert_eq!(card.push(snapshot("1")), RenderDecision::Initial);
        card.mark_rendered();
        assert_eq!(card.push(snapshot("1")), RenderDecision::Unchanged);
    }

    #[test]
    fn should_keep_latest_snapshot_while_suppressed() {
        let mut card = card();
        card.push(snapshot("1"));
        card.mark_rendered();
        card.toggle();

        assert_eq!(card.push(snapshot("2")), RenderDecision::Suppressed);
        assert_eq!(card.snapshot().unwrap().get(TOTAL).unwrap().state, "2");
    }

    #[test]
    fn should_compare_against_last_push_not_last_render() {
        let mut card = card();
        card.push(snapshot("1"));
        card.mark_rendered();
        card.toggle();
        card.push(snapshot("2"));
        card.toggle();

        assert_eq!(card.push(snapshot("2")), RenderDecision::Unchanged);
        assert_eq!(card.push(snapshot("3")), RenderDecision::Changed);
    }

    #[test]
    fn should_flip_expanded_on_each_toggle() {
        let mut card = card();
        assert_eq!(card.toggle(), RenderDecision::Toggled);
        assert!(card.is_expanded());
        assert_eq!(card.toggle(), RenderDecision::Toggled);
        assert!(!card.is_expanded());
    }

    #[test]
    fn should_carry_expanded_flag_into_view() {
        let mut card = card();
        card.push(snapshot("1"));
        card.toggle();
        match card.view().unwrap() {
            CardView::Status(status) => assert!(status.expanded),
            CardView::EntityNotFound { .. } => panic!("expected status view"),
        }
    }
}
