//! Application services: use-case entry points.

pub mod card_service;
