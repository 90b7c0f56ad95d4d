//! # guardian-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Implement the `CardRenderer` port with [askama](https://docs.rs/askama)
//!   templates (`render`)
//! - Serve a **JSON API** the host pushes snapshots to and reads the card
//!   from (`/api/states`, `/api/card`, `/api/cards`, …)
//! - Serve a **server-side-rendered dashboard page** embedding the card,
//!   working with **zero JavaScript**: the toggle is a `<form>` that POSTs
//!   and redirects (PRG pattern), and the page auto-reloads through
//!   `<meta http-equiv="refresh">`
//! - Stream freshly rendered fragments over SSE
//!
//! ## Dependency rule
//! Depends on `guardian-app` (for the port trait and services) and
//! `guardian-domain` (for snapshot types used in request mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod router;
pub mod state;
