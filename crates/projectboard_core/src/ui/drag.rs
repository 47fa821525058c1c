//! Drag payload protocol.
//!
//! # Responsibility
//! - Carry the payload of one drag operation between source and target.
//!
//! # Invariants
//! - One text-typed slot; setting data replaces any previous slot.
//! - The board only ever uses `TEXT_PLAIN` with a project id string.

/// The only transfer format the board uses.
pub const TEXT_PLAIN: &str = "text/plain";

/// Declared effect of a drag operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
}

/// Payload container for one drag operation.
#[derive(Debug, Default)]
pub struct DragTransfer {
    slot: Option<(String, String)>,
    effect: Option<DropEffect>,
}

impl DragTransfer {
    /// Creates an empty transfer with no payload and no declared effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the payload under `format`, replacing any previous slot.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        self.slot = Some((format.to_string(), data.into()));
    }

    /// Payload stored under `format`, if any.
    pub fn data(&self, format: &str) -> Option<String> {
        self.slot
            .as_ref()
            .filter(|(stored, _)| stored == format)
            .map(|(_, data)| data.clone())
    }

    /// Format of the carried payload; drop targets check this before
    /// accepting a drag.
    pub fn first_format(&self) -> Option<String> {
        self.slot.as_ref().map(|(format, _)| format.clone())
    }

    pub fn set_effect(&mut self, effect: DropEffect) {
        self.effect = Some(effect);
    }

    pub fn effect(&self) -> Option<DropEffect> {
        self.effect
    }
}
