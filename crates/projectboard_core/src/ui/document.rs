//! Document: template registry, host resolution, alert sink.
//!
//! # Responsibility
//! - Provide the two capabilities views need from the visual layer:
//!   `materialize(template_id)` and `host(host_id)`.
//! - Record blocking user alerts so callers and tests can observe them.
//!
//! # Invariants
//! - `materialize` always returns a fresh detached subtree; templates are
//!   never handed out by reference.
//! - Unknown template/host ids are typed errors, not panics.

use crate::ui::node::NodeHandle;
use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// UI resource resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    UnknownTemplate(String),
    UnknownHost(String),
    MissingElement(String),
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTemplate(id) => write!(f, "unknown template: {id}"),
            Self::UnknownHost(id) => write!(f, "unknown host element: {id}"),
            Self::MissingElement(id) => {
                write!(f, "template instance is missing a required element: {id}")
            }
        }
    }
}

impl Error for UiError {}

/// One board's visual tree plus its named-resource registries.
///
/// Cheap to clone; all clones share the same tree, templates and alert sink.
#[derive(Clone)]
pub struct Document {
    root: NodeHandle,
    templates: Rc<RefCell<HashMap<String, NodeHandle>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document with no templates and no mounted elements.
    pub fn new() -> Self {
        Self {
            root: NodeHandle::new("document"),
            templates: Rc::new(RefCell::new(HashMap::new())),
            alerts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Root of the element tree.
    pub fn root(&self) -> NodeHandle {
        self.root.clone()
    }

    /// Registers (or replaces) a named template.
    pub fn register_template(&self, id: impl Into<String>, content: NodeHandle) {
        self.templates.borrow_mut().insert(id.into(), content);
    }

    /// Clones a template's content into a new detached element.
    pub fn materialize(&self, template_id: &str) -> Result<NodeHandle, UiError> {
        self.templates
            .borrow()
            .get(template_id)
            .map(NodeHandle::deep_clone)
            .ok_or_else(|| UiError::UnknownTemplate(template_id.to_string()))
    }

    /// Resolves an attachment point by element id.
    pub fn host(&self, host_id: &str) -> Result<NodeHandle, UiError> {
        self.node_by_id(host_id)
            .ok_or_else(|| UiError::UnknownHost(host_id.to_string()))
    }

    /// First element with the given id, document order.
    pub fn node_by_id(&self, id: &str) -> Option<NodeHandle> {
        self.root.find_id(id)
    }

    /// First element with the given tag, document order.
    pub fn first_by_tag(&self, tag: &str) -> Option<NodeHandle> {
        self.root.find_tag(tag)
    }

    /// Surfaces a blocking alert to the user.
    ///
    /// There is no modal here; the message is recorded for the frontend to
    /// present and logged as a warning.
    pub fn alert(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("event=user_alert module=ui message={message}");
        self.alerts.borrow_mut().push(message);
    }

    /// All alerts surfaced so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Number of alerts surfaced so far.
    pub fn alert_count(&self) -> usize {
        self.alerts.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, UiError};
    use crate::ui::node::NodeHandle;

    #[test]
    fn materialize_clones_template_content() {
        let doc = Document::new();
        doc.register_template(
            "single-project",
            NodeHandle::new("li").with_child(NodeHandle::new("h2")),
        );

        let first = doc.materialize("single-project").expect("template exists");
        let second = doc.materialize("single-project").expect("template exists");

        first.set_id("claimed");
        assert_eq!(second.id(), None);
        assert!(!first.same_node(&second));
    }

    #[test]
    fn unknown_template_and_host_are_typed_errors() {
        let doc = Document::new();

        assert_eq!(
            doc.materialize("missing").expect_err("must fail"),
            UiError::UnknownTemplate("missing".to_string())
        );
        assert_eq!(
            doc.host("app").expect_err("must fail"),
            UiError::UnknownHost("app".to_string())
        );
    }

    #[test]
    fn alerts_accumulate_in_order() {
        let doc = Document::new();
        doc.alert("first");
        doc.alert("second");

        assert_eq!(doc.alert_count(), 2);
        assert_eq!(doc.alerts(), vec!["first".to_string(), "second".to_string()]);
    }
}
