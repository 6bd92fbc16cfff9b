use super::layer::Layer;
use super::transformer::Transformer;
use super::types::{HandleName, Vec2};
use crate::error::CanvasError;

/// What the pointer landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerTarget {
    /// Empty stage background
    Stage,
    Shape(String),
    Anchor(HandleName),
}

/// Events produced by the stage's pointer handling, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum StageEvent {
    MouseDown { target: PointerTarget },
    /// Press and release on a shape without moving in between
    Click { id: String },
    DragEnd { id: String, position: Vec2 },
    TransformEnd { id: String },
}

#[derive(Clone, Debug, PartialEq)]
enum Gesture {
    Pressed { id: String, origin: Vec2 },
    Dragging { id: String, grab_offset: Vec2 },
    Transforming,
}

/// Root of the scene: fixed-size surface holding one layer and the shared
/// transformer, and routing pointer input between them.
#[derive(Clone, Debug)]
pub struct Stage {
    width: f64,
    height: f64,
    pub layer: Layer,
    pub transformer: Transformer,
    gesture: Option<Gesture>,
}

impl Stage {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            layer: Layer::new(),
            transformer: Transformer::new(),
            gesture: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Anchors take priority over shapes, shapes over the background.
    pub fn target_at(&self, point: Vec2) -> PointerTarget {
        if let Some(handle) = self.transformer.anchor_at(&self.layer, point) {
            return PointerTarget::Anchor(handle);
        }
        match self.layer.hit_test(point) {
            Some(node) => PointerTarget::Shape(node.id.clone()),
            None => PointerTarget::Stage,
        }
    }

    pub fn is_pointer_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn pointer_down(&mut self, point: Vec2) -> Result<Vec<StageEvent>, CanvasError> {
        let target = self.target_at(point);
        self.gesture = match &target {
            PointerTarget::Anchor(handle) => {
                self.transformer.start(*handle, point, &self.layer)?;
                Some(Gesture::Transforming)
            }
            PointerTarget::Shape(id) => Some(Gesture::Pressed {
                id: id.clone(),
                origin: point,
            }),
            PointerTarget::Stage => None,
        };
        Ok(vec![StageEvent::MouseDown { target }])
    }

    /// Returns whether the layer needs redrawing.
    ///
    /// On error the gesture stays in progress, so the following
    /// `pointer_up` still ends it.
    pub fn pointer_move(&mut self, point: Vec2) -> Result<bool, CanvasError> {
        let redraw = match &mut self.gesture {
            None => return Ok(false),
            Some(Gesture::Pressed { id, origin }) => {
                if point == *origin {
                    false
                } else {
                    let node = self.layer.require_mut(id)?;
                    if node.draggable {
                        let grab_offset = *origin - node.position;
                        node.position = point - grab_offset;
                        let id = std::mem::take(id);
                        self.gesture = Some(Gesture::Dragging { id, grab_offset });
                        true
                    } else {
                        false
                    }
                }
            }
            Some(Gesture::Dragging { id, grab_offset }) => {
                self.layer.require_mut(id)?.position = point - *grab_offset;
                true
            }
            Some(Gesture::Transforming) => {
                self.transformer.drag_to(point, &mut self.layer)?;
                true
            }
        };

        if redraw {
            self.layer.batch_draw();
        }
        Ok(redraw)
    }

    pub fn pointer_up(&mut self, _point: Vec2) -> Vec<StageEvent> {
        let events = match self.gesture.take() {
            Some(Gesture::Pressed { id, .. }) => vec![StageEvent::Click { id }],
            Some(Gesture::Dragging { id, .. }) => match self.layer.node(&id) {
                Some(node) => vec![StageEvent::DragEnd {
                    position: node.position,
                    id,
                }],
                None => Vec::new(),
            },
            Some(Gesture::Transforming) => self
                .transformer
                .end()
                .map(|id| vec![StageEvent::TransformEnd { id }])
                .unwrap_or_default(),
            None => Vec::new(),
        };
        self.layer.batch_draw();
        events
    }
}
