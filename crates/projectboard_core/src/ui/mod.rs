//! Visual layer abstractions.
//!
//! # Responsibility
//! - Model the element tree the board renders into.
//! - Provide template/host resolution, mounting, and the drag protocol.
//!
//! # Invariants
//! - Everything here is single-threaded and DOM-free; the real presentation
//!   (terminal, tests) reads the tree through `NodeHandle` queries.

pub mod component;
pub mod document;
pub mod drag;
pub mod node;
