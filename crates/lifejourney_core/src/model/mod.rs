//! Domain model for a personal life journey.
//!
//! # Responsibility
//! - Define the event record, its closed label sets and the partial-update patch.
//! - Define the journey aggregate and the read models derived from it.
//!
//! # Invariants
//! - `LifeEvent::year` mirrors the year of `LifeEvent::date` when built through
//!   the provided constructors.
//! - Wire labels for every enum are kebab-case.

pub mod event;
pub mod journey;
pub mod stats;
