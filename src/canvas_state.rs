use crate::error::CanvasError;
use crate::scene::PointerTarget;
use crate::types::{initial_rectangles, RectAttrs};

/// At most one selected rectangle id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    pub fn select(&mut self, id: &str) {
        self.0 = Some(id.to_string());
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// True when a press landed on the stage itself rather than on any shape
/// or transformer anchor.
pub fn clicked_on_empty(target: &PointerTarget) -> bool {
    *target == PointerTarget::Stage
}

/// New list with `new_attrs` at `index`; every other entry and the order
/// are untouched.
pub fn replace_rect(
    rects: &[RectAttrs],
    index: usize,
    new_attrs: RectAttrs,
) -> Result<Vec<RectAttrs>, CanvasError> {
    if index >= rects.len() {
        return Err(CanvasError::IndexOutOfBounds {
            index,
            len: rects.len(),
        });
    }
    let mut next = rects.to_vec();
    next[index] = new_attrs;
    Ok(next)
}

/// View state owned by the top-level component.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasState {
    pub rectangles: Vec<RectAttrs>,
    pub selection: Selection,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(initial_rectangles())
    }
}

impl CanvasState {
    pub fn new(rectangles: Vec<RectAttrs>) -> Self {
        Self {
            rectangles,
            selection: Selection::none(),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.id()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    pub fn select_shape(&mut self, id: &str) {
        log::debug!("select `{}`", id);
        self.selection.select(id);
    }

    /// Clear the selection if the press hit empty canvas. Returns whether
    /// it did.
    pub fn check_deselect(&mut self, target: &PointerTarget) -> bool {
        if !clicked_on_empty(target) {
            return false;
        }
        if self.selection.id().is_some() {
            log::debug!("deselect");
        }
        self.selection.clear();
        true
    }

    pub fn update(&mut self, index: usize, new_attrs: RectAttrs) -> Result<(), CanvasError> {
        log::debug!("update rect {}: {}", index, new_attrs.to_log_string());
        self.rectangles = replace_rect(&self.rectangles, index, new_attrs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::HandleName;

    #[test]
    fn test_initial_state() {
        let state = CanvasState::default();
        assert_eq!(state.selected_id(), None);
        assert_eq!(state.rectangles, initial_rectangles());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut state = CanvasState::default();
        state.select_shape("rect1");
        state.select_shape("rect2");
        assert_eq!(state.selected_id(), Some("rect2"));
        assert!(!state.is_selected("rect1"));
    }

    #[test]
    fn test_check_deselect_only_on_stage() {
        let mut state = CanvasState::default();
        state.select_shape("rect1");

        assert!(!state.check_deselect(&PointerTarget::Shape("rect2".into())));
        assert!(!state.check_deselect(&PointerTarget::Anchor(HandleName::Top)));
        assert_eq!(state.selected_id(), Some("rect1"));

        assert!(state.check_deselect(&PointerTarget::Stage));
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_update_preserves_others() {
        let mut state = CanvasState::default();
        let moved = state.rectangles[1].with_position(0.0, 0.0);
        state.update(1, moved.clone()).unwrap();
        assert_eq!(state.rectangles[0], initial_rectangles()[0]);
        assert_eq!(state.rectangles[1], moved);
        assert_eq!(state.rectangles.len(), 2);
    }

    #[test]
    fn test_update_out_of_bounds() {
        let mut state = CanvasState::default();
        let err = state.update(5, initial_rectangles()[0].clone());
        assert_eq!(err, Err(CanvasError::IndexOutOfBounds { index: 5, len: 2 }));
        assert_eq!(state.rectangles, initial_rectangles());
    }

    #[test]
    fn test_replace_rect_leaves_input_untouched() {
        let rects = initial_rectangles();
        let next = replace_rect(&rects, 0, rects[0].with_position(1.0, 1.0)).unwrap();
        assert_eq!(rects, initial_rectangles());
        assert_eq!(next[0].x, 1.0);
        assert_eq!(next[1], rects[1]);
    }
}
