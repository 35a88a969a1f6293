use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ReconError;

// ============================================================================
// Rendered DOM snapshot handed over by the extractor
// ============================================================================

/// Index of a node within a [`DomSnapshot`], in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Rendered geometry of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// True when the box occupies no area on screen.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Computed style values, verbatim as the rendering engine reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStyle {
    pub display: Option<String>,
    pub visibility: Option<String>,
    pub opacity: Option<String>,
}

/// A single element node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomNode {
    pub tag: String,

    /// Index of the parent node; always an earlier node in document order.
    #[serde(default)]
    pub parent: Option<usize>,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Rendered inner text
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub bounding_box: BoundingBox,

    #[serde(default)]
    pub computed_style: ComputedStyle,

    /// `hidden` DOM property
    #[serde(default)]
    pub hidden: bool,

    /// `disabled` DOM property
    #[serde(default)]
    pub disabled: bool,

    /// Click listener attached as a property (`el.onclick = ...`)
    #[serde(default)]
    pub has_click_handler: bool,

    /// `value` DOM property of form controls
    #[serde(default)]
    pub value: Option<String>,
}

impl DomNode {
    /// A bare element with no geometry (i.e. not rendered).
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = bounding_box;
        self
    }

    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.computed_style = style;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_click_handler(mut self, has_handler: bool) -> Self {
        self.has_click_handler = has_handler;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

/// A complete, consistent snapshot of a rendered page.
///
/// Nodes are stored in document order. Children lists are derived when the
/// snapshot is constructed, so a snapshot can only be built through
/// [`DomSnapshot::from_nodes`] (or deserialization, which goes through it).
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "SnapshotWire")]
pub struct DomSnapshot {
    pub url: Option<String>,
    pub title: Option<String>,
    nodes: Vec<DomNode>,
    children: Vec<Vec<NodeId>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotWire {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    nodes: Vec<DomNode>,
}

impl TryFrom<SnapshotWire> for DomSnapshot {
    type Error = ReconError;

    fn try_from(wire: SnapshotWire) -> Result<Self, Self::Error> {
        DomSnapshot::from_nodes(wire.url, wire.title, wire.nodes)
    }
}

impl DomSnapshot {
    /// Build a snapshot, normalizing tag names and deriving children.
    pub fn from_nodes(
        url: Option<String>,
        title: Option<String>,
        mut nodes: Vec<DomNode>,
    ) -> Result<Self, ReconError> {
        let mut children = vec![Vec::new(); nodes.len()];

        for (index, node) in nodes.iter_mut().enumerate() {
            node.tag = node.tag.trim().to_ascii_lowercase();

            if let Some(parent) = node.parent {
                if parent >= index {
                    return Err(ReconError::InvalidSnapshot(format!(
                        "node {} ({}) names parent {}, which does not precede it",
                        index, node.tag, parent
                    )));
                }
                children[parent].push(NodeId(index));
            }
        }

        Ok(Self {
            url,
            title,
            nodes,
            children,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &DomNode {
        &self.nodes[id.0]
    }

    pub(crate) fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }
}
