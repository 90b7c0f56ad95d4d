//! Renderer port: turns a card view model into markup.

use guardian_domain::error::GuardianError;

use crate::view::CardView;

/// Produces the card's isolated fragment (style + markup) for a view.
pub trait CardRenderer {
    /// Render the view.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::Render`] if markup cannot be produced.
    fn render(&self, view: &CardView) -> Result<String, GuardianError>;
}

impl<T: CardRenderer + ?Sized> CardRenderer for std::sync::Arc<T> {
    fn render(&self, view: &CardView) -> Result<String, GuardianError> {
        (**self).render(view)
    }
}
