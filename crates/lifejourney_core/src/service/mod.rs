//! Core use-case services.
//!
//! # Responsibility
//! - Own the journey aggregate and expose its mutations and queries.
//! - Offer an opt-in locked handle for multi-threaded callers.

mod analytics;
pub mod journey_store;
pub mod shared;
