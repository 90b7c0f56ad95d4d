//! Card registry: descriptors the dashboard editor offers as installable cards.
//!
//! Registration is an explicit call made by the composition root at startup.

use serde::{Deserialize, Serialize};

use guardian_domain::error::ValidationError;

/// Tag under which the status card is registered.
pub const STATUS_CARD_TYPE: &str = "backup-guardian-card";

/// Descriptor published to the dashboard editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub description: String,
    pub preview: bool,
}

impl CardDescriptor {
    /// Descriptor of the backup status card.
    #[must_use]
    pub fn status_card() -> Self {
        Self {
            card_type: STATUS_CARD_TYPE.to_string(),
            name: "Backup Guardian Card".to_string(),
            description: "Custom card showing Home Assistant backups".to_string(),
            preview: true,
        }
    }
}

/// Registered card descriptors, in registration order.
#[derive(Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDescriptor>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateCardType`] if a card with the same
    /// type is already registered.
    pub fn register(&mut self, descriptor: CardDescriptor) -> Result<(), ValidationError> {
        if self.get(&descriptor.card_type).is_some() {
            return Err(ValidationError::DuplicateCardType(descriptor.card_type));
        }
        tracing::info!(card_type = %descriptor.card_type, "card registered");
        self.cards.push(descriptor);
        Ok(())
    }

    /// Look up a descriptor by card type.
    #[must_use]
    pub fn get(&self, card_type: &str) -> Option<&CardDescriptor> {
        self.cards.iter().find(|card| card.card_type == card_type)
    }

    /// All registered descriptors.
    #[must_use]
    pub fn list(&self) -> &[CardDescriptor] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_descriptor_with_type_key() {
        let json = serde_json::to_value(CardDescriptor::status_card()).unwrap();
        assert_eq!(json["type"], "backup-guardian-card");
        assert_eq!(json["name"], "Backup Guardian Card");
        assert_eq!(json["preview"], true);
    }

    #[test]
    fn should_register_and_list_cards() {
        let mut registry = CardRegistry::new();
        registry.register(CardDescriptor::status_card()).unwrap();
        assert_eq!(registry.list().len(), 1);
        assert!(registry.get(STATUS_CARD_TYPE).is_some());
    }

    #[test]
    fn should_reject_duplicate_card_type() {
        let mut registry = CardRegistry::new();
        registry.register(CardDescriptor::status_card()).unwrap();
        let err = registry
            .register(CardDescriptor::status_card())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateCardType(STATUS_CARD_TYPE.to_string())
        );
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn should_start_empty() {
        let registry = CardRegistry::new();
        assert!(registry.list().is_empty());
        assert!(registry.get(STATUS_CARD_TYPE).is_none());
    }
}
