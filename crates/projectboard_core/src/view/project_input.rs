//! New-project input form.
//!
//! # Responsibility
//! - Collect title, description and people count from the user.
//! - Validate on submit; push an Active project into the store on success.
//!
//! # Invariants
//! - A failed submission surfaces exactly one alert, mutates nothing and
//!   leaves the inputs untouched.
//! - A successful submission clears all three inputs.
//! - Stored title/description keep the raw input; only the emptiness check
//!   trims.

use crate::model::project::Project;
use crate::state::project_state::ProjectState;
use crate::ui::component::{mount, Placement, View};
use crate::ui::document::{Document, UiError};
use crate::ui::node::NodeHandle;
use crate::view::{HOST_APP, TEMPLATE_PROJECT_INPUT};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated form fields, ready to become a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Form validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyField(&'static str),
    InvalidPeople(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::InvalidPeople(value) => {
                write!(f, "people must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for InputError {}

/// Validates raw form values.
///
/// Succeeds with the three fields or fails with the first offending one;
/// the number check only happens once all three emptiness checks passed.
pub fn parse_project_input(
    title: &str,
    description: &str,
    people: &str,
) -> Result<NewProjectInput, InputError> {
    if title.trim().is_empty() {
        return Err(InputError::EmptyField("title"));
    }
    if description.trim().is_empty() {
        return Err(InputError::EmptyField("description"));
    }
    let people_raw = people.trim();
    if people_raw.is_empty() {
        return Err(InputError::EmptyField("people"));
    }
    let people = people_raw
        .parse::<u32>()
        .map_err(|_| InputError::InvalidPeople(people_raw.to_string()))?;

    Ok(NewProjectInput {
        title: title.to_string(),
        description: description.to_string(),
        people,
    })
}

/// The board's input form, mounted at the top of the `app` host.
pub struct ProjectInputView {
    doc: Document,
    state: ProjectState,
    element: NodeHandle,
    title_input: NodeHandle,
    description_input: NodeHandle,
    people_input: NodeHandle,
}

impl ProjectInputView {
    /// Mounts the form before any existing children of the `app` host.
    pub fn new(doc: &Document, state: &ProjectState) -> Result<Self, UiError> {
        let element = mount(
            doc,
            TEMPLATE_PROJECT_INPUT,
            HOST_APP,
            Placement::AfterBegin,
            Some("user-input"),
        )?;

        let mut view = Self {
            doc: doc.clone(),
            state: state.clone(),
            title_input: require_input(&element, "title")?,
            description_input: require_input(&element, "description")?,
            people_input: require_input(&element, "people")?,
            element,
        };
        view.configure();
        view.render();
        Ok(view)
    }

    /// The mounted form element.
    pub fn element(&self) -> NodeHandle {
        self.element.clone()
    }

    /// Fills all three inputs, as a user typing would.
    pub fn set_inputs(&self, title: &str, description: &str, people: &str) {
        self.title_input.set_value(title);
        self.description_input.set_value(description);
        self.people_input.set_value(people);
    }

    /// Submit handler.
    ///
    /// On validation failure surfaces one alert and mutates nothing.
    /// Returns whether the submission was accepted.
    pub fn submit(&self) -> bool {
        let parsed = parse_project_input(
            &self.title_input.value(),
            &self.description_input.value(),
            &self.people_input.value(),
        );
        match parsed {
            Ok(input) => {
                self.state
                    .add_project(Project::new(input.title, input.description, input.people));
                self.clear_inputs();
                true
            }
            Err(err) => {
                debug!("event=input_rejected module=view reason={err}");
                self.doc.alert(format!("Invalid user input: {err}"));
                false
            }
        }
    }

    fn clear_inputs(&self) {
        self.title_input.set_value("");
        self.description_input.set_value("");
        self.people_input.set_value("");
    }
}

fn require_input(element: &NodeHandle, id: &str) -> Result<NodeHandle, UiError> {
    element
        .find_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

impl View for ProjectInputView {
    fn configure(&mut self) {
        // Submission arrives as a direct method call from the driver; there
        // is no event bus to subscribe to.
    }

    /// Deliberate no-op: the form has no data-driven content to populate.
    /// This is the one view that deviates from configure-then-render doing
    /// visible work in both phases.
    fn render(&mut self) {}
}
