use std::fmt;

use super::layer::Layer;
use super::types::{BBox, HandleName, Vec2};
use crate::error::CanvasError;
use crate::types::{ANCHOR_SIZE, MIN_SIZE};

/// Filters a proposed client rectangle given the one currently in effect.
pub type BoundBoxFunc = fn(&BBox, &BBox) -> BBox;

/// Reject any box narrower or shorter than [`MIN_SIZE`], keeping the old one.
pub fn limit_resize(old_box: &BBox, new_box: &BBox) -> BBox {
    if new_box.width < MIN_SIZE || new_box.height < MIN_SIZE {
        return *old_box;
    }
    *new_box
}

#[derive(Clone, Debug, PartialEq)]
struct ActiveTransform {
    handle: HandleName,
    node_id: String,
    start_box: BBox,
    start_pointer: Vec2,
}

/// Shared resize-handle widget.
///
/// Nodes are referenced by id and resolved through the layer on every
/// call, so a transformer never owns or outlives the shapes it decorates.
#[derive(Clone)]
pub struct Transformer {
    nodes: Vec<String>,
    /// Corner anchors preserve the aspect ratio the drag started with
    pub keep_ratio: bool,
    bound_box_func: BoundBoxFunc,
    active: Option<ActiveTransform>,
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("nodes", &self.nodes)
            .field("keep_ratio", &self.keep_ratio)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            keep_ratio: true,
            bound_box_func: limit_resize,
            active: None,
        }
    }
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bound_box_func(mut self, func: BoundBoxFunc) -> Self {
        self.bound_box_func = func;
        self
    }

    pub fn with_keep_ratio(mut self, keep_ratio: bool) -> Self {
        self.keep_ratio = keep_ratio;
        self
    }

    /// Attach to the given node ids, abandoning any transform in progress.
    pub fn set_nodes(&mut self, ids: Vec<String>) {
        self.active = None;
        self.nodes = ids;
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn attached(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn is_attached_to(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n == id)
    }

    pub fn detach(&mut self) {
        self.set_nodes(Vec::new());
    }

    /// Detach only if currently attached to `id`. Returns whether it was.
    pub fn detach_node(&mut self, id: &str) -> bool {
        if !self.is_attached_to(id) {
            return false;
        }
        self.detach();
        true
    }

    pub fn is_transforming(&self) -> bool {
        self.active.is_some()
    }

    /// Client rectangle of the attached node, if it resolves.
    pub fn client_rect(&self, layer: &Layer) -> Option<BBox> {
        let id = self.attached()?;
        layer.node(id).map(|n| n.client_rect())
    }

    pub fn anchors(&self, layer: &Layer) -> Vec<(HandleName, Vec2)> {
        match self.client_rect(layer) {
            Some(bbox) => HandleName::ALL
                .iter()
                .map(|h| (*h, h.calc_position(&bbox)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Anchor whose square contains `point`.
    pub fn anchor_at(&self, layer: &Layer, point: Vec2) -> Option<HandleName> {
        let half = ANCHOR_SIZE / 2.0;
        self.anchors(layer)
            .into_iter()
            .find(|(_, pos)| (point.x - pos.x).abs() <= half && (point.y - pos.y).abs() <= half)
            .map(|(handle, _)| handle)
    }

    pub fn start(
        &mut self,
        handle: HandleName,
        pointer: Vec2,
        layer: &Layer,
    ) -> Result<(), CanvasError> {
        let node_id = self.attached().ok_or(CanvasError::NotAttached)?.to_string();
        let start_box = layer
            .node(&node_id)
            .map(|n| n.client_rect())
            .ok_or_else(|| CanvasError::UnknownNode(node_id.clone()))?;
        self.active = Some(ActiveTransform {
            handle,
            node_id,
            start_box,
            start_pointer: pointer,
        });
        Ok(())
    }

    /// Move the active anchor to `pointer`.
    ///
    /// Returns `Ok(false)` when nothing is in progress or the bound-box
    /// function kept the previous box.
    pub fn drag_to(&mut self, pointer: Vec2, layer: &mut Layer) -> Result<bool, CanvasError> {
        let Some(active) = &self.active else {
            return Ok(false);
        };
        let delta = pointer - active.start_pointer;
        let proposed = proposed_box(&active.start_box, active.handle, delta, self.keep_ratio);

        let node = layer.require_mut(&active.node_id)?;
        let old_box = node.client_rect();
        let new_box = (self.bound_box_func)(&old_box, &proposed);
        node.apply_client_rect(&new_box)?;

        let accepted = new_box == proposed;
        if !accepted {
            log::debug!("bound box rejected {:?} for `{}`", proposed, active.node_id);
        }
        Ok(accepted)
    }

    /// Finish the active transform, returning the node it applied to.
    pub fn end(&mut self) -> Option<String> {
        self.active.take().map(|a| a.node_id)
    }
}

/// Box produced by dragging `handle` by `delta` from `start`.
fn proposed_box(start: &BBox, handle: HandleName, delta: Vec2, keep_ratio: bool) -> BBox {
    let mut bbox = *start;
    if handle.moves_left() {
        bbox.x += delta.x;
        bbox.width -= delta.x;
    }
    if handle.moves_right() {
        bbox.width += delta.x;
    }
    if handle.moves_top() {
        bbox.y += delta.y;
        bbox.height -= delta.y;
    }
    if handle.moves_bottom() {
        bbox.height += delta.y;
    }

    if keep_ratio && handle.is_corner() && start.width != 0.0 && start.height != 0.0 {
        let sx = bbox.width / start.width;
        let sy = bbox.height / start.height;
        let s = if sx.abs() >= sy.abs() { sx } else { sy };
        let width = start.width * s;
        let height = start.height * s;
        bbox.x = if handle.moves_left() { start.right() - width } else { start.x };
        bbox.y = if handle.moves_top() { start.bottom() - height } else { start.y };
        bbox.width = width;
        bbox.height = height;
    }

    bbox
}
