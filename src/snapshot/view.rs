use crate::snapshot::snapshot_model::{BoundingBox, ComputedStyle, DomSnapshot, NodeId};

/// Read-only view over a rendered DOM.
///
/// Classification, naming and selector synthesis only ever talk to the page
/// through this trait, so they can run against a constructed snapshot just as
/// well as against one captured from a live browser.
pub trait DomView {
    type Id: Copy + Eq;

    /// Every element node, in document order.
    fn document_order(&self) -> Vec<Self::Id>;

    /// Lowercase tag name.
    fn tag_name(&self, node: Self::Id) -> &str;

    fn attribute(&self, node: Self::Id, name: &str) -> Option<&str>;

    fn computed_style(&self, node: Self::Id) -> &ComputedStyle;

    fn bounding_box(&self, node: Self::Id) -> BoundingBox;

    fn parent(&self, node: Self::Id) -> Option<Self::Id>;

    fn children(&self, node: Self::Id) -> &[Self::Id];

    /// Rendered inner text.
    fn inner_text(&self, node: Self::Id) -> Option<&str>;

    /// `hidden` property.
    fn hidden_property(&self, node: Self::Id) -> bool;

    /// `disabled` property.
    fn disabled_property(&self, node: Self::Id) -> bool;

    /// Whether a click listener was attached as a property.
    fn click_property(&self, node: Self::Id) -> bool;

    /// `value` property of form controls.
    fn value_property(&self, node: Self::Id) -> Option<&str>;

    fn has_attribute(&self, node: Self::Id, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// First `<label>` in document order whose `for` attribute equals `id`.
    fn label_for(&self, id: &str) -> Option<Self::Id> {
        self.document_order()
            .into_iter()
            .find(|&n| self.tag_name(n) == "label" && self.attribute(n, "for") == Some(id))
    }

    /// Nearest ancestor (excluding the node itself) with the given tag.
    fn closest_ancestor(&self, node: Self::Id, tag: &str) -> Option<Self::Id> {
        let mut current = self.parent(node);
        while let Some(n) = current {
            if self.tag_name(n) == tag {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }
}

impl DomView for DomSnapshot {
    type Id = NodeId;

    fn document_order(&self) -> Vec<NodeId> {
        (0..self.len()).map(NodeId).collect()
    }

    fn tag_name(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).attributes.get(name).map(String::as_str)
    }

    fn computed_style(&self, node: NodeId) -> &ComputedStyle {
        &self.node(node).computed_style
    }

    fn bounding_box(&self, node: NodeId) -> BoundingBox {
        self.node(node).bounding_box
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent.map(NodeId)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.children_of(node)
    }

    fn inner_text(&self, node: NodeId) -> Option<&str> {
        self.node(node).text.as_deref()
    }

    fn hidden_property(&self, node: NodeId) -> bool {
        self.node(node).hidden
    }

    fn disabled_property(&self, node: NodeId) -> bool {
        self.node(node).disabled
    }

    fn click_property(&self, node: NodeId) -> bool {
        self.node(node).has_click_handler
    }

    fn value_property(&self, node: NodeId) -> Option<&str> {
        self.node(node).value.as_deref()
    }
}
