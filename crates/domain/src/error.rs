//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GuardianError`] via `#[from]`.

/// Top-level error for card operations.
#[derive(Debug, thiserror::Error)]
pub enum GuardianError {
    /// A setup or registration invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The renderer failed to produce markup.
    #[error("render error")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected before any rendering happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The card configuration has no primary `entity`.
    #[error("card configuration must define an entity (e.g. sensor.backup_guardian_totale_backup)")]
    MissingEntity,

    /// The render broadcast needs room for at least one fragment.
    #[error("stream capacity must be non-zero")]
    ZeroStreamCapacity,

    /// A card with the same type tag is already registered.
    #[error("card type {0:?} is already registered")]
    DuplicateCardType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_guardian_error() {
        let err: GuardianError = ValidationError::MissingEntity.into();
        assert!(matches!(
            err,
            GuardianError::Validation(ValidationError::MissingEntity)
        ));
    }

    #[test]
    fn should_name_example_entity_in_missing_entity_message() {
        let message = ValidationError::MissingEntity.to_string();
        assert!(message.contains("sensor.backup_guardian_totale_backup"));
    }

    #[test]
    fn should_quote_card_type_in_duplicate_message() {
        let err = ValidationError::DuplicateCardType("backup-guardian-card".to_string());
        assert_eq!(
            err.to_string(),
            "card type \"backup-guardian-card\" is already registered"
        );
    }

    #[test]
    fn should_expose_render_source() {
        let io = std::io::Error::other("template exploded");
        let err = GuardianError::Render(Box::new(io));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("template exploded"));
    }
}
