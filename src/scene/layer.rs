use super::node::RectNode;
use super::types::Vec2;
use crate::error::CanvasError;
use crate::types::RectAttrs;

/// Ordered collection of rectangle nodes; later nodes draw on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    nodes: Vec<RectNode>,
    /// Incremented on every redraw request
    draw_count: u64,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[RectNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&RectNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut RectNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Look up a node, failing if the id does not resolve
    pub fn require_mut(&mut self, id: &str) -> Result<&mut RectNode, CanvasError> {
        self.node_mut(id)
            .ok_or_else(|| CanvasError::UnknownNode(id.to_string()))
    }

    /// Create or update the node for `attrs`, inserting new nodes at `index`
    /// (clamped to the end) so draw order follows the view's list order.
    pub fn sync_node(&mut self, index: usize, attrs: &RectAttrs) -> &RectNode {
        let pos = match self.nodes.iter().position(|n| n.id == attrs.id) {
            Some(pos) => {
                self.nodes[pos].apply_attrs(attrs);
                pos
            }
            None => {
                let at = index.min(self.nodes.len());
                self.nodes.insert(at, RectNode::from_attrs(attrs));
                at
            }
        };
        &self.nodes[pos]
    }

    pub fn remove_node(&mut self, id: &str) -> Option<RectNode> {
        let pos = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(pos))
    }

    /// Topmost node under `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<&RectNode> {
        self.nodes.iter().rev().find(|n| n.contains_point(point))
    }

    pub fn batch_draw(&mut self) {
        self.draw_count += 1;
    }

    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }
}
