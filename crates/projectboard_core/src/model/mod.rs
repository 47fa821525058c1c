//! Domain model for board entries.
//!
//! # Responsibility
//! - Define the canonical data structures used by state and view layers.
//! - Keep one project-centric shape shared by both list projections.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted; they only move between the two statuses.

pub mod project;
