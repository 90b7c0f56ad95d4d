//! # guardian-domain
//!
//! Pure domain model for the backup guardian status card.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **card configuration** and its setup-time validation
//! - Define **snapshots** (host-owned entity id → state/attributes maps)
//! - Define **backup records** and the last-backup summary read from entities
//! - Define the **destination** label/color lookup and hash display policy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Rendering is expressed as a trait in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod backup;
pub mod config;
pub mod destination;
pub mod snapshot;
