use transform_canvas::canvas_state::CanvasState;
use transform_canvas::rectangle::{
    attach_transformer, drag_end_attrs, release_transformer, transform_end_attrs,
};
use transform_canvas::scene::{HandleName, PointerTarget, Stage, StageEvent, Vec2};
use transform_canvas::types::{initial_rectangles, RectAttrs, MIN_SIZE};

/// Headless stand-in for the component tree: routes stage events into the
/// view state, then re-applies state to the scene the way a render would.
struct Harness {
    stage: Stage,
    state: CanvasState,
}

impl Harness {
    fn new() -> Self {
        let mut harness = Self {
            stage: Stage::new(1024.0, 768.0),
            state: CanvasState::default(),
        };
        harness.render();
        harness
    }

    fn index_of(&self, id: &str) -> usize {
        self.state.rectangles.iter().position(|r| r.id == id).unwrap()
    }

    fn route(&mut self, events: Vec<StageEvent>) {
        for event in events {
            match event {
                StageEvent::MouseDown { target } => {
                    self.state.check_deselect(&target);
                }
                StageEvent::Click { id } => self.state.select_shape(&id),
                StageEvent::DragEnd { id, position } => {
                    let i = self.index_of(&id);
                    let attrs = drag_end_attrs(&self.state.rectangles[i], position);
                    self.state.update(i, attrs).unwrap();
                }
                StageEvent::TransformEnd { id } => {
                    let i = self.index_of(&id);
                    let node = self.stage.layer.node_mut(&id).unwrap();
                    let attrs = transform_end_attrs(&self.state.rectangles[i], node);
                    self.state.update(i, attrs).unwrap();
                }
            }
        }
        self.render();
    }

    fn render(&mut self) {
        for (i, rect) in self.state.rectangles.iter().enumerate() {
            self.stage.layer.sync_node(i, rect);
        }
        match self.state.selected_id().map(str::to_string) {
            Some(id) if !self.stage.transformer.is_attached_to(&id) => {
                attach_transformer(&mut self.stage, &id)
            }
            Some(_) => {}
            None => {
                if let Some(id) = self.stage.transformer.attached().map(str::to_string) {
                    release_transformer(&mut self.stage, &id);
                }
            }
        }
    }

    fn press(&mut self, x: f64, y: f64) {
        let events = self.stage.pointer_down(Vec2::new(x, y)).unwrap();
        self.route(events);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.stage.pointer_move(Vec2::new(x, y)).unwrap();
    }

    fn release(&mut self, x: f64, y: f64) {
        let events = self.stage.pointer_up(Vec2::new(x, y));
        self.route(events);
    }

    fn click(&mut self, x: f64, y: f64) {
        self.press(x, y);
        self.release(x, y);
    }

    fn drag(&mut self, from: (f64, f64), path: &[(f64, f64)]) {
        self.press(from.0, from.1);
        for &(x, y) in path {
            self.move_to(x, y);
        }
        let end = path.last().copied().unwrap_or(from);
        self.release(end.0, end.1);
    }

    fn rect(&self, id: &str) -> &RectAttrs {
        &self.state.rectangles[self.index_of(id)]
    }
}

#[test]
fn test_initial_render() {
    let harness = Harness::new();
    assert_eq!(harness.state.selected_id(), None);
    assert_eq!(harness.state.rectangles, initial_rectangles());
    let node = harness.stage.layer.node("rect2").unwrap();
    assert_eq!(node.client_rect().x, 150.0);
    assert_eq!(node.fill, "green");
    assert_eq!(harness.stage.transformer.attached(), None);
}

#[test]
fn test_click_selects_and_empty_click_clears() {
    let mut harness = Harness::new();
    harness.click(50.0, 50.0);
    assert_eq!(harness.state.selected_id(), Some("rect1"));
    assert_eq!(harness.stage.transformer.attached(), Some("rect1"));

    harness.click(200.0, 200.0);
    assert_eq!(harness.state.selected_id(), Some("rect2"));
    assert_eq!(harness.stage.transformer.nodes().len(), 1);

    harness.click(600.0, 500.0);
    assert_eq!(harness.state.selected_id(), None);
    assert_eq!(harness.stage.transformer.attached(), None);
}

#[test]
fn test_press_on_shape_or_anchor_keeps_selection() {
    let mut harness = Harness::new();
    harness.click(50.0, 50.0);
    assert_eq!(
        harness.stage.target_at(Vec2::new(110.0, 60.0)),
        PointerTarget::Anchor(HandleName::Right)
    );
    harness.press(110.0, 60.0);
    assert_eq!(harness.state.selected_id(), Some("rect1"));
    harness.release(110.0, 60.0);
    assert_eq!(harness.state.selected_id(), Some("rect1"));
}

#[test]
fn test_drag_moves_only_that_rectangle() {
    let mut harness = Harness::new();
    harness.drag((200.0, 200.0), &[(220.0, 210.0), (260.0, 230.0)]);

    let moved = harness.rect("rect2");
    assert_eq!((moved.x, moved.y), (210.0, 180.0));
    assert_eq!((moved.width, moved.height), (100.0, 100.0));
    assert_eq!(moved.fill, "green");
    assert_eq!(harness.rect("rect1"), &initial_rectangles()[0]);

    let ids: Vec<&str> = harness.state.rectangles.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rect1", "rect2"]);
    // a drag is not a click
    assert_eq!(harness.state.selected_id(), None);
}

#[test]
fn test_corner_resize_folds_scale_into_size() {
    let mut harness = Harness::new();
    harness.click(50.0, 50.0);
    harness.drag((110.0, 110.0), &[(160.0, 130.0)]);

    assert_eq!(
        harness.rect("rect1"),
        &RectAttrs::new("rect1", 10.0, 10.0, 150.0, 150.0, "red")
    );
    let node = harness.stage.layer.node("rect1").unwrap();
    assert_eq!(node.scale, Vec2::ONE);
    assert_eq!(node.width, 150.0);
    assert_eq!(harness.rect("rect2"), &initial_rectangles()[1]);
}

#[test]
fn test_left_resize_reports_moved_position() {
    let mut harness = Harness::new();
    harness.click(200.0, 200.0);
    harness.drag((150.0, 200.0), &[(170.0, 200.0)]);

    let rect = harness.rect("rect2");
    assert_eq!((rect.x, rect.y), (170.0, 150.0));
    assert_eq!((rect.width, rect.height), (80.0, 100.0));
}

#[test]
fn test_resize_below_minimum_is_clamped() {
    let mut harness = Harness::new();
    harness.click(50.0, 50.0);
    harness.drag((110.0, 60.0), &[(60.0, 60.0), (12.0, 60.0), (-40.0, 60.0)]);

    let rect = harness.rect("rect1");
    assert_eq!(rect.width, 50.0);
    assert!(rect.width >= MIN_SIZE);
    assert_eq!(rect.height, 100.0);
}

#[test]
fn test_selection_survives_drag_of_selected_shape() {
    let mut harness = Harness::new();
    harness.click(50.0, 50.0);
    harness.drag((50.0, 50.0), &[(70.0, 70.0)]);
    assert_eq!(harness.state.selected_id(), Some("rect1"));
    assert_eq!((harness.rect("rect1").x, harness.rect("rect1").y), (30.0, 30.0));

    let anchors = harness.stage.transformer.anchors(&harness.stage.layer);
    assert!(anchors.contains(&(HandleName::TopLeft, Vec2::new(30.0, 30.0))));
}

#[test]
fn test_failed_resize_move_still_folds_on_release() {
    let mut harness = Harness::new();
    harness.click(200.0, 200.0);
    harness.press(250.0, 200.0);
    harness.move_to(300.0, 200.0);
    harness.stage.layer.node_mut("rect2").unwrap().height = 0.0;

    assert!(harness.stage.pointer_move(Vec2::new(320.0, 200.0)).is_err());
    assert!(harness.stage.is_pointer_active());
    assert!(harness.stage.transformer.is_transforming());

    harness.release(320.0, 200.0);
    assert!(!harness.stage.is_pointer_active());
    assert!(!harness.stage.transformer.is_transforming());
    assert_eq!(harness.rect("rect2").width, 150.0);
    assert_eq!(harness.stage.layer.node("rect2").unwrap().scale, Vec2::ONE);
}

#[test]
fn test_out_of_range_update_leaves_state() {
    let mut harness = Harness::new();
    let moved = initial_rectangles()[0].with_position(40.0, 40.0);
    assert!(harness.state.update(7, moved).is_err());
    assert_eq!(harness.state.rectangles, initial_rectangles());
}
