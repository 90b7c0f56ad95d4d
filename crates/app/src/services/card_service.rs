//! Card service: applies snapshot pushes and toggles to the card and keeps
//! the last rendered fragment.
//!
//! Every operation takes the card lock, so pushes and toggles are applied
//! one at a time in arrival order.

use serde::Serialize;
use tokio::sync::{Mutex, broadcast};

use guardian_domain::config::CardConfig;
use guardian_domain::error::{GuardianError, ValidationError};
use guardian_domain::snapshot::Snapshot;
use guardian_domain::time::{Timestamp, now};

use crate::card::{CARD_SIZE, StatusCard};
use crate::decision::RenderDecision;
use crate::ports::CardRenderer;

/// The fragment currently displayed by the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub html: String,
    pub expanded: bool,
    pub card_size: u32,
    pub rendered_at: Timestamp,
}

/// Result of a push or toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub decision: RenderDecision,
    /// Whether a new fragment was produced.
    pub rendered: bool,
    pub expanded: bool,
}

struct CardState {
    card: StatusCard,
    rendered: Option<RenderedCard>,
}

/// Application service owning one status card and its renderer.
pub struct CardService<R> {
    config: CardConfig,
    renderer: R,
    state: Mutex<CardState>,
    updates: broadcast::Sender<RenderedCard>,
}

impl<R: CardRenderer> CardService<R> {
    /// Set up the card. `capacity` bounds the broadcast of rendered fragments.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::Validation`] if the configuration is invalid
    /// or `capacity` is zero.
    pub fn new(config: CardConfig, renderer: R, capacity: usize) -> Result<Self, GuardianError> {
        if capacity == 0 {
            return Err(ValidationError::ZeroStreamCapacity.into());
        }
        let card = StatusCard::new(config.clone())?;
        let (updates, _) = broadcast::channel(capacity);
        Ok(Self {
            config,
            renderer,
            state: Mutex::new(CardState {
                card,
                rendered: None,
            }),
            updates,
        })
    }

    /// The card configuration.
    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Layout weight reported to the dashboard host.
    #[must_use]
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    /// Subscribe to fragments rendered *after* the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RenderedCard> {
        self.updates.subscribe()
    }

    /// Push a full snapshot from the host.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::Render`] if the renderer fails; the card then
    /// renders from scratch on the next push.
    pub async fn push_snapshot(&self, snapshot: Snapshot) -> Result<UpdateOutcome, GuardianError> {
        let mut state = self.state.lock().await;
        let decision = state.card.push(snapshot);
        tracing::debug!(entity = %self.config.entity, ?decision, "snapshot pushed");
        self.apply(&mut state, decision)
    }

    /// Open or close the history list and re-render.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::Render`] if the renderer fails.
    pub async fn toggle(&self) -> Result<UpdateOutcome, GuardianError> {
        let mut state = self.state.lock().await;
        let decision = state.card.toggle();
        tracing::debug!(expanded = state.card.is_expanded(), "history list toggled");
        self.apply(&mut state, decision)
    }

    /// The fragment currently displayed, `None` before the first render.
    pub async fn current(&self) -> Option<RenderedCard> {
        self.state.lock().await.rendered.clone()
    }

    fn apply(
        &self,
        state: &mut CardState,
        decision: RenderDecision,
    ) -> Result<UpdateOutcome, GuardianError> {
        let expanded = state.card.is_expanded();
        let view = if decision.should_render() {
            state.card.view()
        } else {
            None
        };
        let Some(view) = view else {
            return Ok(UpdateOutcome {
                decision,
                rendered: false,
                expanded,
            });
        };

        let html = self.renderer.render(&view)?;
        state.card.mark_rendered();

        let rendered = RenderedCard {
            html,
            expanded,
            card_size: CARD_SIZE,
            rendered_at: now(),
        };
        // Fails only when nobody is subscribed.
        let _ = self.updates.send(rendered.clone());
        state.rendered = Some(rendered);

        Ok(UpdateOutcome {
            decision,
            rendered: true,
            expanded,
        })
    }
}
