//! Board view components.
//!
//! # Responsibility
//! - Render projects into the element tree and react to store notifications.
//! - Implement both ends of the drag protocol plus the input form.
//!
//! # Invariants
//! - Views read and write projects only through the injected `ProjectState`
//!   handle; the only per-view cache is the filtered snapshot a list view
//!   received at its last notification.

pub mod project_input;
pub mod project_item;
pub mod project_list;

/// Template id for one rendered project item.
pub const TEMPLATE_SINGLE_PROJECT: &str = "single-project";
/// Template id for one status list (header + `ul`).
pub const TEMPLATE_PROJECT_LIST: &str = "project-list";
/// Template id for the new-project input form.
pub const TEMPLATE_PROJECT_INPUT: &str = "project-input";

/// Element id of the application mount point.
pub const HOST_APP: &str = "app";

/// Class marking a list as a valid drop target while a drag hovers over it.
pub const DROPPABLE_CLASS: &str = "droppable";
