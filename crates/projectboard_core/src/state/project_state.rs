//! Authoritative project store.
//!
//! # Responsibility
//! - Own the single ordered project sequence for one board.
//! - Expose the two mutations (add, move) and the subscription entry point.
//!
//! # Invariants
//! - Views never hold an authoritative copy; they cache only the filtered
//!   snapshot handed to them at notification time.
//! - `move_project` notifies only when it actually changed a status.
//! - Id uniqueness is not enforced; a move acts on the first match in
//!   insertion order.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::observable::ObservableSeq;
use log::{debug, info};

/// Cheap cloneable handle to one board's project sequence.
///
/// Constructed explicitly and passed to every view at construction; there is
/// no process-global instance.
#[derive(Clone, Default)]
pub struct ProjectState {
    projects: ObservableSeq<Project>,
}

impl ProjectState {
    /// Creates an empty store with no subscribers.
    pub fn new() -> Self {
        Self {
            projects: ObservableSeq::new(),
        }
    }

    /// Registers a listener invoked with a snapshot on every future mutation.
    pub fn add_listener(&self, listener: impl Fn(&[Project]) + 'static) {
        self.projects.subscribe(listener);
    }

    /// Appends a project and synchronously notifies all listeners.
    ///
    /// No id-uniqueness check: a duplicate id is accepted and later moves
    /// resolve to the first match.
    pub fn add_project(&self, project: Project) {
        info!(
            "event=project_added module=state status=ok id={} project_status={}",
            project.id, project.status
        );
        self.projects.push(project);
    }

    /// Moves the first project with `id` to `new_status`.
    ///
    /// Silent no-op (no notification) when the id is unknown or the project
    /// already has `new_status`, so views are not re-rendered redundantly.
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) {
        self.projects.update(|projects| {
            let Some(project) = projects.iter_mut().find(|project| project.id == id) else {
                debug!("event=project_move_skipped module=state reason=unknown_id id={id}");
                return false;
            };
            if project.status == new_status {
                debug!(
                    "event=project_move_skipped module=state reason=same_status id={id} project_status={new_status}"
                );
                return false;
            }
            project.status = new_status;
            info!("event=project_moved module=state status=ok id={id} project_status={new_status}");
            true
        });
    }

    /// Returns a copy of the current project sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.snapshot()
    }

    /// Number of projects on the board, across both lists.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the board holds no projects yet.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectState;
    use crate::model::project::{Project, ProjectStatus};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn notification_counter(state: &ProjectState) -> Rc<RefCell<usize>> {
        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        state.add_listener(move |_| *sink.borrow_mut() += 1);
        calls
    }

    #[test]
    fn added_project_appears_in_snapshot_as_active() {
        let state = ProjectState::new();
        let project = Project::new("Plan sprint", "rough scope", 2);
        let id = project.id;

        state.add_project(project);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);
        assert_eq!(snapshot[0].status, ProjectStatus::Active);
    }

    #[test]
    fn move_changes_status_and_notifies_once() {
        let state = ProjectState::new();
        let project = Project::new("Plan sprint", "rough scope", 2);
        let id = project.id;
        state.add_project(project);

        let calls = notification_counter(&state);
        state.move_project(id, ProjectStatus::Finished);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(state.snapshot()[0].status, ProjectStatus::Finished);
    }

    #[test]
    fn move_with_unknown_id_is_silent_noop() {
        let state = ProjectState::new();
        state.add_project(Project::new("Plan sprint", "rough scope", 2));

        let calls = notification_counter(&state);
        state.move_project(uuid::Uuid::now_v7(), ProjectStatus::Finished);

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(state.snapshot()[0].status, ProjectStatus::Active);
    }

    #[test]
    fn move_to_same_status_is_silent_noop() {
        let state = ProjectState::new();
        let project = Project::new("Plan sprint", "rough scope", 2);
        let id = project.id;
        state.add_project(project);

        let calls = notification_counter(&state);
        state.move_project(id, ProjectStatus::Active);

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn duplicate_ids_are_accepted_and_move_hits_first_match() {
        let state = ProjectState::new();
        let id = uuid::Uuid::now_v7();
        state.add_project(Project::with_id(id, "first", "a", 1));
        state.add_project(Project::with_id(id, "second", "b", 1));

        state.move_project(id, ProjectStatus::Finished);

        let snapshot = state.snapshot();
        assert_eq!(snapshot[0].status, ProjectStatus::Finished);
        assert_eq!(snapshot[1].status, ProjectStatus::Active);
    }
}
