use super::types::{BBox, Vec2};
use crate::error::CanvasError;
use crate::types::RectAttrs;

/// A rectangle node in a layer.
///
/// Width and height come from the attributes the view applied; the
/// transformer never touches them and resizes through `scale` instead.
#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    /// Identifier shared with the view's `RectAttrs`
    pub id: String,

    /// Top-left corner in stage coordinates
    pub position: Vec2,

    pub width: f64,
    pub height: f64,

    /// Scale written by the transformer, identity when idle
    pub scale: Vec2,

    pub fill: String,

    pub draggable: bool,

    /// Attributes last applied from the view
    applied: RectAttrs,
}

impl RectNode {
    pub fn from_attrs(attrs: &RectAttrs) -> Self {
        Self {
            id: attrs.id.clone(),
            position: Vec2::new(attrs.x, attrs.y),
            width: attrs.width,
            height: attrs.height,
            scale: Vec2::ONE,
            fill: attrs.fill.clone(),
            draggable: true,
            applied: attrs.clone(),
        }
    }

    /// Apply view attributes if they differ from the last applied set.
    ///
    /// Re-rendering with unchanged attributes must not undo an in-flight
    /// drag, so only a real change overwrites position, size and fill.
    /// Returns whether anything was applied.
    pub fn apply_attrs(&mut self, attrs: &RectAttrs) -> bool {
        if self.applied == *attrs {
            return false;
        }
        self.id = attrs.id.clone();
        self.position = Vec2::new(attrs.x, attrs.y);
        self.width = attrs.width;
        self.height = attrs.height;
        self.fill = attrs.fill.clone();
        self.applied = attrs.clone();
        true
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn scale_x(&self) -> f64 {
        self.scale.x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale.y
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn reset_scale(&mut self) {
        self.scale = Vec2::ONE;
    }

    /// Rectangle as drawn, with scale applied.
    pub fn client_rect(&self) -> BBox {
        BBox::new(
            self.position.x,
            self.position.y,
            self.width * self.scale.x,
            self.height * self.scale.y,
        )
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.client_rect().contains(point)
    }

    /// Make the node occupy `bbox` by moving it and adjusting its scale.
    pub fn apply_client_rect(&mut self, bbox: &BBox) -> Result<(), CanvasError> {
        if self.width == 0.0 || self.height == 0.0 {
            return Err(CanvasError::DegenerateNode(self.id.clone()));
        }
        self.position = bbox.origin();
        self.scale = Vec2::new(bbox.width / self.width, bbox.height / self.height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> RectNode {
        RectNode::from_attrs(&RectAttrs::new("rect1", 10.0, 20.0, 100.0, 50.0, "red"))
    }

    #[test]
    fn test_from_attrs() {
        let node = node();
        assert_eq!(node.id, "rect1");
        assert_eq!(node.position, Vec2::new(10.0, 20.0));
        assert_eq!(node.scale, Vec2::ONE);
        assert!(node.draggable);
    }

    #[test]
    fn test_client_rect_applies_scale() {
        let mut node = node();
        node.set_scale(Vec2::new(2.0, 0.5));
        assert_eq!(node.client_rect(), BBox::new(10.0, 20.0, 200.0, 25.0));
    }

    #[test]
    fn test_apply_client_rect_writes_scale_not_size() {
        let mut node = node();
        node.apply_client_rect(&BBox::new(0.0, 5.0, 150.0, 100.0)).unwrap();
        assert_eq!(node.width, 100.0);
        assert_eq!(node.height, 50.0);
        assert_eq!(node.position, Vec2::new(0.0, 5.0));
        assert_eq!(node.scale, Vec2::new(1.5, 2.0));
    }

    #[test]
    fn test_apply_client_rect_degenerate() {
        let mut node =
            RectNode::from_attrs(&RectAttrs::new("flat", 0.0, 0.0, 10.0, 0.0, "red"));
        let err = node.apply_client_rect(&BBox::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(err, Err(CanvasError::DegenerateNode("flat".to_string())));
    }

    #[test]
    fn test_apply_same_attrs_keeps_live_position() {
        let attrs = RectAttrs::new("rect1", 10.0, 20.0, 100.0, 50.0, "red");
        let mut node = RectNode::from_attrs(&attrs);
        node.position = Vec2::new(40.0, 40.0);
        assert!(!node.apply_attrs(&attrs));
        assert_eq!(node.position, Vec2::new(40.0, 40.0));

        let moved = attrs.with_position(40.0, 45.0);
        assert!(node.apply_attrs(&moved));
        assert_eq!(node.position, Vec2::new(40.0, 45.0));
    }
}
