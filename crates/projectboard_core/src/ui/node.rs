//! In-memory element tree.
//!
//! # Responsibility
//! - Model the visual layer the board renders into, without a real DOM.
//! - Provide the mutation and query helpers views need (classes, text,
//!   child insertion at either end, descendant lookup, deep clone).
//!
//! # Invariants
//! - Single-threaded: handles are `Rc`-based and never cross threads.
//! - `find_*` helpers search descendants in document order, never self.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    children: Vec<NodeHandle>,
}

/// Cheap cloneable handle to one element in the tree.
#[derive(Clone, Debug)]
pub struct NodeHandle {
    node: Rc<RefCell<Node>>,
}

impl NodeHandle {
    /// Creates a detached element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                tag: tag.into(),
                id: None,
                classes: Vec::new(),
                text: String::new(),
                value: String::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Builder-style id assignment for template construction.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Builder-style child attachment for template construction.
    pub fn with_child(self, child: NodeHandle) -> Self {
        self.append_child(child);
        self
    }

    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.node.borrow().id.clone()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        self.node.borrow_mut().id = Some(id.into());
    }

    pub fn text(&self) -> String {
        self.node.borrow().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.node.borrow_mut().text = text.into();
    }

    /// Current input value; meaningful for `input` elements only.
    pub fn value(&self) -> String {
        self.node.borrow().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.node.borrow_mut().value = value.into();
    }

    /// Adds a class; idempotent.
    pub fn add_class(&self, class: &str) {
        let mut node = self.node.borrow_mut();
        if !node.classes.iter().any(|existing| existing == class) {
            node.classes.push(class.to_string());
        }
    }

    /// Removes a class; absent classes are ignored.
    pub fn remove_class(&self, class: &str) {
        self.node
            .borrow_mut()
            .classes
            .retain(|existing| existing != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.node
            .borrow()
            .classes
            .iter()
            .any(|existing| existing == class)
    }

    /// Appends a child at the end of existing children.
    pub fn append_child(&self, child: NodeHandle) {
        self.node.borrow_mut().children.push(child);
    }

    /// Inserts a child before existing children.
    pub fn prepend_child(&self, child: NodeHandle) {
        self.node.borrow_mut().children.insert(0, child);
    }

    /// Detaches all children.
    pub fn clear_children(&self) {
        self.node.borrow_mut().children.clear();
    }

    pub fn children(&self) -> Vec<NodeHandle> {
        self.node.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// First descendant with the given tag, depth-first document order.
    pub fn find_tag(&self, tag: &str) -> Option<NodeHandle> {
        for child in self.children() {
            if child.tag() == tag {
                return Some(child);
            }
            if let Some(found) = child.find_tag(tag) {
                return Some(found);
            }
        }
        None
    }

    /// First descendant with the given element id, depth-first document order.
    pub fn find_id(&self, id: &str) -> Option<NodeHandle> {
        for child in self.children() {
            if child.id().as_deref() == Some(id) {
                return Some(child);
            }
            if let Some(found) = child.find_id(id) {
                return Some(found);
            }
        }
        None
    }

    /// Recursive copy of this element and its subtree.
    ///
    /// The clone is fully detached: no handle into the original tree is
    /// shared, mirroring template instantiation semantics.
    pub fn deep_clone(&self) -> NodeHandle {
        let node = self.node.borrow();
        let clone = NodeHandle {
            node: Rc::new(RefCell::new(Node {
                tag: node.tag.clone(),
                id: node.id.clone(),
                classes: node.classes.clone(),
                text: node.text.clone(),
                value: node.value.clone(),
                children: Vec::new(),
            })),
        };
        for child in &node.children {
            clone.append_child(child.deep_clone());
        }
        clone
    }

    /// Whether two handles point at the same element.
    pub fn same_node(&self, other: &NodeHandle) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}
