//! Observable application state.
//!
//! # Responsibility
//! - Provide the generic observable sequence primitive.
//! - Provide the project store built on top of it.
//!
//! # Invariants
//! - All notification is synchronous, ordered fan-out on the calling thread.

pub mod observable;
pub mod project_state;
