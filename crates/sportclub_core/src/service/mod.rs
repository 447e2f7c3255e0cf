//! Club use-case services.
//!
//! # Responsibility
//! - Turn structured controller input into validated repository calls.
//! - Compute read-only projections for the UI to render.
//!
//! # Invariants
//! - Services never bypass repository validation or persistence.
//! - Projections never mutate repository state and are recomputed per call.

pub mod club_service;
pub mod projection;
