//! askama implementation of the [`CardRenderer`] port.
//!
//! Produces the card's isolated fragment: the card stylesheet followed by
//! its markup. The history toggle is a plain form, so the fragment works
//! without JavaScript.

use askama::Template;

use guardian_app::ports::CardRenderer;
use guardian_app::view::{CardView, StatusView};
use guardian_domain::error::GuardianError;

/// Route the toggle form posts to by default.
pub const DEFAULT_TOGGLE_ACTION: &str = "/card/toggle";

#[derive(Template)]
#[template(path = "card.html")]
struct StatusTemplate<'a> {
    status: &'a StatusView,
    toggle_action: &'a str,
}

#[derive(Template)]
#[template(path = "card_not_found.html")]
struct NotFoundTemplate<'a> {
    entity_id: &'a str,
}

/// Renders card views through askama templates.
#[derive(Debug, Clone)]
pub struct AskamaRenderer {
    toggle_action: String,
}

impl Default for AskamaRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TOGGLE_ACTION)
    }
}

impl AskamaRenderer {
    /// Create a renderer whose toggle form posts to `toggle_action`.
    pub fn new(toggle_action: impl Into<String>) -> Self {
        Self {
            toggle_action: toggle_action.into(),
        }
    }
}

impl CardRenderer for AskamaRenderer {
    fn render(&self, view: &CardView) -> Result<String, GuardianError> {
        let result = match view {
            CardView::EntityNotFound { entity_id } => NotFoundTemplate { entity_id }.render(),
            CardView::Status(status) => StatusTemplate {
                status,
                toggle_action: &self.toggle_action,
            }
            .render(),
        };
        result.map_err(|err| GuardianError::Render(Box::new(err)))
    }
}
