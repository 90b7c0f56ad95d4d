//! # guardian-app
//!
//! Application layer: the card's use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Decide, for every pushed snapshot, whether the card must re-render
//!   (`decision`), as a pure function of the previous and next snapshot
//! - Derive the card's view model from a snapshot (`view`)
//! - Hold the card's only mutable state: the `expanded` flag and the latest
//!   snapshot (`card`)
//! - Keep the registry of installable card descriptors (`registry`)
//! - Define the **driven port** `CardRenderer`, implemented by adapters
//! - Provide the **driving** `CardService` that serializes pushes and toggles
//!   and publishes freshly rendered markup
//!
//! ## Dependency rule
//! Depends on `guardian-domain` only (plus `tokio::sync` for the mutex and
//! the broadcast channel). Never imports adapter crates.

pub mod card;
pub mod decision;
pub mod ports;
pub mod registry;
pub mod services;
pub mod view;
