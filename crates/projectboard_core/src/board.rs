//! Board assembly.
//!
//! # Responsibility
//! - Build one complete board: document, templates, store, form, two lists.
//! - Drive the user-facing flows (submit, drag) that a browser event loop
//!   would otherwise dispatch.
//!
//! # Invariants
//! - Construction order: input form first, then the active list, then the
//!   finished list.
//! - `drag_project` runs the full pipeline (start, over, drop, end) so the
//!   droppable marker behavior stays exercised.

use crate::model::project::{ProjectId, ProjectStatus};
use crate::state::project_state::ProjectState;
use crate::ui::document::{Document, UiError};
use crate::ui::drag::DragTransfer;
use crate::ui::node::NodeHandle;
use crate::view::project_input::ProjectInputView;
use crate::view::project_item::ProjectItemView;
use crate::view::project_list::ProjectListView;
use crate::view::{HOST_APP, TEMPLATE_PROJECT_INPUT, TEMPLATE_PROJECT_LIST, TEMPLATE_SINGLE_PROJECT};
use log::{debug, info};

/// One fully wired project board.
pub struct ProjectBoard {
    doc: Document,
    state: ProjectState,
    input: ProjectInputView,
    active_list: ProjectListView,
    finished_list: ProjectListView,
}

impl ProjectBoard {
    /// Builds an empty board with its own document and store.
    pub fn new() -> Result<Self, UiError> {
        let doc = Document::new();
        doc.root()
            .append_child(NodeHandle::new("div").with_id(HOST_APP));
        register_board_templates(&doc);

        let state = ProjectState::new();
        let input = ProjectInputView::new(&doc, &state)?;
        let active_list = ProjectListView::new(&doc, &state, ProjectStatus::Active)?;
        let finished_list = ProjectListView::new(&doc, &state, ProjectStatus::Finished)?;

        info!("event=board_ready module=board status=ok");
        Ok(Self {
            doc,
            state,
            input,
            active_list,
            finished_list,
        })
    }

    /// Fills the input form and submits it.
    ///
    /// Returns whether the submission was accepted; on rejection the
    /// document carries one new alert.
    pub fn submit_project(&self, title: &str, description: &str, people: &str) -> bool {
        self.input.set_inputs(title, description, people);
        self.input.submit()
    }

    /// Drags the rendered item with `id` onto the list for `target`.
    ///
    /// Runs the whole pipeline: drag-start on the item, drag-over and drop
    /// on the target list, drag-end on the item. Returns `false` when no
    /// list currently renders `id` or the target refuses the payload; the
    /// store itself still treats same-status drops as silent no-ops.
    pub fn drag_project(&self, id: ProjectId, target: ProjectStatus) -> bool {
        let Some(item) = self.find_item(id) else {
            debug!("event=drag_skipped module=board reason=not_rendered id={id}");
            return false;
        };
        let target_list = self.list(target);

        let mut transfer = DragTransfer::new();
        item.drag_start(&mut transfer);
        if !target_list.drag_over(&transfer) {
            item.drag_end();
            return false;
        }
        target_list.drop_payload(&transfer);
        item.drag_end();
        true
    }

    /// The list view rendering `status`.
    pub fn list(&self, status: ProjectStatus) -> &ProjectListView {
        match status {
            ProjectStatus::Active => &self.active_list,
            ProjectStatus::Finished => &self.finished_list,
        }
    }

    /// The injected store handle.
    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    /// The board's document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The input form view.
    pub fn input(&self) -> &ProjectInputView {
        &self.input
    }

    fn find_item(&self, id: ProjectId) -> Option<ProjectItemView> {
        self.active_list
            .item_by_id(id)
            .or_else(|| self.finished_list.item_by_id(id))
    }
}

/// Registers the three built-in templates the views mount from.
fn register_board_templates(doc: &Document) {
    doc.register_template(
        TEMPLATE_SINGLE_PROJECT,
        NodeHandle::new("li")
            .with_child(NodeHandle::new("h2"))
            .with_child(NodeHandle::new("h3"))
            .with_child(NodeHandle::new("p")),
    );
    doc.register_template(
        TEMPLATE_PROJECT_LIST,
        NodeHandle::new("section")
            .with_child(NodeHandle::new("header").with_child(NodeHandle::new("h2")))
            .with_child(NodeHandle::new("ul")),
    );
    doc.register_template(
        TEMPLATE_PROJECT_INPUT,
        NodeHandle::new("form")
            .with_child(NodeHandle::new("input").with_id("title"))
            .with_child(NodeHandle::new("input").with_id("description"))
            .with_child(NodeHandle::new("input").with_id("people"))
            .with_child(NodeHandle::new("button")),
    );
}
