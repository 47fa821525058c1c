//! Core logic for the project board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod logging;
pub mod model;
pub mod state;
pub mod ui;
pub mod view;

pub use board::ProjectBoard;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    parse_project_status, Project, ProjectId, ProjectStatus, StatusParseError,
};
pub use state::observable::ObservableSeq;
pub use state::project_state::ProjectState;
pub use ui::component::{mount, Placement, View};
pub use ui::document::{Document, UiError};
pub use ui::drag::{DragTransfer, DropEffect, TEXT_PLAIN};
pub use ui::node::NodeHandle;
pub use view::project_input::{parse_project_input, InputError, NewProjectInput, ProjectInputView};
pub use view::project_item::ProjectItemView;
pub use view::project_list::ProjectListView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
