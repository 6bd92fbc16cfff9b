//! Behaviour of a single rectangle element: how it hooks the shared
//! transformer and what it reports when a drag or resize finishes.

use crate::scene::{RectNode, Stage, Vec2};
use crate::types::{RectAttrs, MIN_SIZE};

/// Point the shared transformer at `id` and request a layer redraw.
pub fn attach_transformer(stage: &mut Stage, id: &str) {
    stage.transformer.set_nodes(vec![id.to_string()]);
    stage.layer.batch_draw();
}

/// Drop the transformer from `id` if it is still attached there.
pub fn release_transformer(stage: &mut Stage, id: &str) -> bool {
    let released = stage.transformer.detach_node(id);
    if released {
        stage.layer.batch_draw();
    }
    released
}

/// Attributes to report once a drag ends with the node at `position`.
pub fn drag_end_attrs(shape_props: &RectAttrs, position: Vec2) -> RectAttrs {
    shape_props.with_position(position.x, position.y)
}

/// Fold the transformer's scale back into width and height.
///
/// The node's scale is reset to identity so that width and height remain
/// the only record of size. Width is floored at [`MIN_SIZE`]; height is
/// only kept non-negative.
pub fn transform_end_attrs(shape_props: &RectAttrs, node: &mut RectNode) -> RectAttrs {
    let scale_x = node.scale_x();
    let scale_y = node.scale_y();
    node.reset_scale();

    RectAttrs {
        x: node.x(),
        y: node.y(),
        width: (node.width * scale_x).max(MIN_SIZE),
        // TODO: confirm whether height should share the MIN_SIZE floor.
        height: (node.height * scale_y).max(0.0),
        ..shape_props.clone()
    }
}
