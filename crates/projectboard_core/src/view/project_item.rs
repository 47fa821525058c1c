//! Single project item view; drag source.
//!
//! # Responsibility
//! - Render one project's title, people count and description.
//! - Start drag operations carrying the project id.
//!
//! # Invariants
//! - The mounted element's id is the project id string, so drop targets and
//!   tests can locate it.
//! - `drag_end` clears the droppable marker from the document-order FIRST
//!   `ul`, not this item's hosting list. Long-standing quirk; targets must
//!   not rely on their own list being unmarked after a drag ends.

use crate::model::project::Project;
use crate::ui::component::{mount, Placement, View};
use crate::ui::document::{Document, UiError};
use crate::ui::drag::{DragTransfer, DropEffect, TEXT_PLAIN};
use crate::ui::node::NodeHandle;
use crate::view::{DROPPABLE_CLASS, TEMPLATE_SINGLE_PROJECT};
use log::debug;

/// One rendered board entry inside a status list.
#[derive(Clone)]
pub struct ProjectItemView {
    doc: Document,
    project: Project,
    element: NodeHandle,
}

impl ProjectItemView {
    /// Mounts a new item at the end of the list identified by `host_list_id`.
    pub fn new(doc: &Document, host_list_id: &str, project: Project) -> Result<Self, UiError> {
        let element = mount(
            doc,
            TEMPLATE_SINGLE_PROJECT,
            host_list_id,
            Placement::BeforeEnd,
            Some(project.id.to_string().as_str()),
        )?;

        let mut view = Self {
            doc: doc.clone(),
            project,
            element,
        };
        view.configure();
        view.render();
        Ok(view)
    }

    /// The project this item renders.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The mounted element.
    pub fn element(&self) -> NodeHandle {
        self.element.clone()
    }

    /// Drag-start handler: exports the project id and declares a move.
    pub fn drag_start(&self, transfer: &mut DragTransfer) {
        transfer.set_data(TEXT_PLAIN, self.project.id.to_string());
        transfer.set_effect(DropEffect::Move);
        debug!(
            "event=drag_started module=view id={} project_status={}",
            self.project.id, self.project.status
        );
    }

    /// Drag-end handler: clears the droppable marker.
    ///
    /// Targets the first `ul` in the whole document (see module docs).
    pub fn drag_end(&self) {
        if let Some(list) = self.doc.first_by_tag("ul") {
            list.remove_class(DROPPABLE_CLASS);
        }
    }
}

impl View for ProjectItemView {
    fn configure(&mut self) {
        // Drag events arrive as direct method calls from the driver; there
        // is no event bus to subscribe to.
    }

    fn render(&mut self) {
        if let Some(heading) = self.element.find_tag("h2") {
            heading.set_text(self.project.title.clone());
        }
        if let Some(subheading) = self.element.find_tag("h3") {
            subheading.set_text(format!("{} Assigned.", self.project.persons_label()));
        }
        if let Some(body) = self.element.find_tag("p") {
            body.set_text(self.project.description.clone());
        }
    }
}
