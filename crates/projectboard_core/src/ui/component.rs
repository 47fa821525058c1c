//! View mounting and lifecycle contract.
//!
//! # Responsibility
//! - Mount a template instance into a host at either end of its children.
//! - Define the two-phase lifecycle every view implements.
//!
//! # Invariants
//! - `configure` and `render` each run exactly once, at view construction.
//! - Default ordering is configure-then-render; a view deviating from that
//!   (the input form's no-op `render`) documents it at the impl site.

use crate::ui::document::{Document, UiError};
use crate::ui::node::NodeHandle;

/// Where a mounted element lands among the host's existing children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Before existing children.
    AfterBegin,
    /// After existing children.
    BeforeEnd,
}

/// Two-phase view lifecycle: wire handlers/subscriptions, then populate
/// visible content.
pub trait View {
    fn configure(&mut self);
    fn render(&mut self);
}

/// Materializes `template_id`, optionally assigns `element_id`, and attaches
/// the new element into `host_id` at the requested position.
///
/// Returns the mounted element.
pub fn mount(
    doc: &Document,
    template_id: &str,
    host_id: &str,
    placement: Placement,
    element_id: Option<&str>,
) -> Result<NodeHandle, UiError> {
    let element = doc.materialize(template_id)?;
    if let Some(id) = element_id {
        element.set_id(id);
    }

    let host = doc.host(host_id)?;
    match placement {
        Placement::AfterBegin => host.prepend_child(element.clone()),
        Placement::BeforeEnd => host.append_child(element.clone()),
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::{mount, Placement};
    use crate::ui::document::Document;
    use crate::ui::node::NodeHandle;

    fn doc_with_app_host() -> Document {
        let doc = Document::new();
        doc.root()
            .append_child(NodeHandle::new("div").with_id("app"));
        doc.register_template("widget", NodeHandle::new("section"));
        doc
    }

    #[test]
    fn mount_assigns_id_and_attaches_at_end() {
        let doc = doc_with_app_host();
        doc.host("app")
            .expect("app host")
            .append_child(NodeHandle::new("p"));

        let mounted = mount(&doc, "widget", "app", Placement::BeforeEnd, Some("w1"))
            .expect("mount succeeds");

        assert_eq!(mounted.id().as_deref(), Some("w1"));
        let children = doc.host("app").expect("app host").children();
        assert_eq!(children.len(), 2);
        assert!(children[1].same_node(&mounted));
    }

    #[test]
    fn mount_after_begin_goes_before_existing_children() {
        let doc = doc_with_app_host();
        doc.host("app")
            .expect("app host")
            .append_child(NodeHandle::new("p"));

        let mounted =
            mount(&doc, "widget", "app", Placement::AfterBegin, None).expect("mount succeeds");

        let children = doc.host("app").expect("app host").children();
        assert!(children[0].same_node(&mounted));
        assert_eq!(mounted.id(), None);
    }
}
