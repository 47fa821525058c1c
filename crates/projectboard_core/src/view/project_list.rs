//! Status list view; drop target.
//!
//! # Responsibility
//! - Render the set of projects matching one status.
//! - Re-render from scratch on every store notification.
//! - Accept drops carrying a project id and ask the store to move it.
//!
//! # Invariants
//! - The list caches only the item views rebuilt from the last filtered
//!   snapshot; the store stays authoritative.
//! - A drop with an unparseable or unknown id is a silent no-op.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::project_state::ProjectState;
use crate::ui::component::{mount, Placement, View};
use crate::ui::document::{Document, UiError};
use crate::ui::drag::{DragTransfer, TEXT_PLAIN};
use crate::ui::node::NodeHandle;
use crate::view::project_item::ProjectItemView;
use crate::view::{DROPPABLE_CLASS, HOST_APP, TEMPLATE_PROJECT_LIST};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// One status column of the board.
pub struct ProjectListView {
    doc: Document,
    state: ProjectState,
    status: ProjectStatus,
    element: NodeHandle,
    items: Rc<RefCell<Vec<ProjectItemView>>>,
}

impl ProjectListView {
    /// Mounts the list into the `app` host, after any existing children.
    pub fn new(
        doc: &Document,
        state: &ProjectState,
        status: ProjectStatus,
    ) -> Result<Self, UiError> {
        let element = mount(
            doc,
            TEMPLATE_PROJECT_LIST,
            HOST_APP,
            Placement::BeforeEnd,
            Some(format!("{status}-projects").as_str()),
        )?;

        let mut view = Self {
            doc: doc.clone(),
            state: state.clone(),
            status,
            element,
            items: Rc::new(RefCell::new(Vec::new())),
        };
        view.configure();
        view.render();
        Ok(view)
    }

    /// Status this list renders.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// The mounted section element.
    pub fn element(&self) -> NodeHandle {
        self.element.clone()
    }

    /// Element id of the inner `ul` item views mount into.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Projects rendered at the last notification, in list order.
    pub fn rendered_projects(&self) -> Vec<Project> {
        self.items
            .borrow()
            .iter()
            .map(|item| item.project().clone())
            .collect()
    }

    /// The item view currently rendering `id`, if any.
    pub fn item_by_id(&self, id: ProjectId) -> Option<ProjectItemView> {
        self.items
            .borrow()
            .iter()
            .find(|item| item.project().id == id)
            .cloned()
    }

    /// Drag-over handler.
    ///
    /// Returns `true` when the drop is allowed (the payload carries the
    /// expected plain-text format), after marking the inner list droppable.
    pub fn drag_over(&self, transfer: &DragTransfer) -> bool {
        if transfer.first_format().as_deref() != Some(TEXT_PLAIN) {
            return false;
        }
        if let Some(list) = self.element.find_tag("ul") {
            list.add_class(DROPPABLE_CLASS);
        }
        true
    }

    /// Drag-leave handler: removes the droppable marker.
    pub fn drag_leave(&self) {
        if let Some(list) = self.element.find_tag("ul") {
            list.remove_class(DROPPABLE_CLASS);
        }
    }

    /// Drop handler: moves the carried project to this list's status.
    pub fn drop_payload(&self, transfer: &DragTransfer) {
        let Some(raw_id) = transfer.data(TEXT_PLAIN) else {
            debug!(
                "event=drop_ignored module=view reason=no_payload list={}",
                self.status
            );
            return;
        };
        match Uuid::parse_str(&raw_id) {
            Ok(id) => self.state.move_project(id, self.status),
            Err(_) => debug!(
                "event=drop_ignored module=view reason=bad_id list={} payload={raw_id}",
                self.status
            ),
        }
    }

    fn rebuild(doc: &Document, list_id: &str, projects: Vec<Project>) -> Vec<ProjectItemView> {
        let Ok(list) = doc.host(list_id) else {
            warn!("event=list_render_failed module=view status=error list={list_id}");
            return Vec::new();
        };
        list.clear_children();

        let mut rebuilt = Vec::with_capacity(projects.len());
        for project in projects {
            match ProjectItemView::new(doc, list_id, project) {
                Ok(item) => rebuilt.push(item),
                Err(err) => {
                    warn!("event=item_render_failed module=view status=error error={err}");
                }
            }
        }
        rebuilt
    }
}

impl View for ProjectListView {
    /// Subscribes to store notifications; each one re-filters the snapshot
    /// by this list's status and rebuilds the item views.
    fn configure(&mut self) {
        let doc = self.doc.clone();
        let items = Rc::clone(&self.items);
        let status = self.status;
        let list_id = self.list_id();

        self.state.add_listener(move |projects| {
            let relevant: Vec<Project> = projects
                .iter()
                .filter(|project| project.status == status)
                .cloned()
                .collect();
            *items.borrow_mut() = Self::rebuild(&doc, &list_id, relevant);
        });
    }

    fn render(&mut self) {
        if let Some(list) = self.element.find_tag("ul") {
            list.set_id(self.list_id());
        }
        if let Some(header) = self.element.find_tag("h2") {
            header.set_text(format!("{} Projects", self.status.as_str().to_uppercase()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectListView;
    use crate::model::project::{Project, ProjectStatus};
    use crate::state::project_state::ProjectState;
    use crate::ui::document::Document;
    use crate::ui::drag::{DragTransfer, TEXT_PLAIN};
    use crate::ui::node::NodeHandle;
    use crate::view::{DROPPABLE_CLASS, TEMPLATE_PROJECT_LIST, TEMPLATE_SINGLE_PROJECT};

    fn board_doc() -> Document {
        let doc = Document::new();
        doc.root()
            .append_child(NodeHandle::new("div").with_id("app"));
        doc.register_template(
            TEMPLATE_PROJECT_LIST,
            NodeHandle::new("section")
                .with_child(NodeHandle::new("header").with_child(NodeHandle::new("h2")))
                .with_child(NodeHandle::new("ul")),
        );
        doc.register_template(
            TEMPLATE_SINGLE_PROJECT,
            NodeHandle::new("li")
                .with_child(NodeHandle::new("h2"))
                .with_child(NodeHandle::new("h3"))
                .with_child(NodeHandle::new("p")),
        );
        doc
    }

    #[test]
    fn render_assigns_list_id_and_uppercased_header() {
        let doc = board_doc();
        let state = ProjectState::new();
        let view =
            ProjectListView::new(&doc, &state, ProjectStatus::Finished).expect("list mounts");

        assert_eq!(view.element().id(), Some("finished-projects".to_string()));
        let list = doc.node_by_id("finished-projects-list");
        assert!(list.is_some());
        assert_eq!(
            view.element().find_tag("h2").expect("header").text(),
            "FINISHED Projects"
        );
    }

    #[test]
    fn notification_rebuilds_only_matching_items() {
        let doc = board_doc();
        let state = ProjectState::new();
        let active = ProjectListView::new(&doc, &state, ProjectStatus::Active).expect("active");
        let finished =
            ProjectListView::new(&doc, &state, ProjectStatus::Finished).expect("finished");

        let project = Project::new("Sort backlog", "triage", 2);
        let id = project.id;
        state.add_project(project);

        assert_eq!(active.rendered_projects().len(), 1);
        assert!(finished.rendered_projects().is_empty());

        state.move_project(id, ProjectStatus::Finished);

        assert!(active.rendered_projects().is_empty());
        assert_eq!(finished.rendered_projects().len(), 1);
        assert_eq!(
            doc.node_by_id("finished-projects-list")
                .expect("ul")
                .child_count(),
            1
        );
    }

    #[test]
    fn drag_over_accepts_only_plain_text_payloads() {
        let doc = board_doc();
        let state = ProjectState::new();
        let view = ProjectListView::new(&doc, &state, ProjectStatus::Active).expect("list mounts");

        let mut wrong = DragTransfer::new();
        wrong.set_data("text/html", "<b>nope</b>");
        assert!(!view.drag_over(&wrong));
        let list = doc.node_by_id("active-projects-list").expect("ul");
        assert!(!list.has_class(DROPPABLE_CLASS));

        let mut ok = DragTransfer::new();
        ok.set_data(TEXT_PLAIN, "anything");
        assert!(view.drag_over(&ok));
        assert!(list.has_class(DROPPABLE_CLASS));

        view.drag_leave();
        assert!(!list.has_class(DROPPABLE_CLASS));
    }

    #[test]
    fn drop_with_unparseable_id_is_silent_noop() {
        let doc = board_doc();
        let state = ProjectState::new();
        state.add_project(Project::new("Keep me", "here", 1));
        let view =
            ProjectListView::new(&doc, &state, ProjectStatus::Finished).expect("list mounts");

        let mut transfer = DragTransfer::new();
        transfer.set_data(TEXT_PLAIN, "not-a-project-id");
        view.drop_payload(&transfer);

        assert_eq!(state.snapshot()[0].status, ProjectStatus::Active);
    }
}
