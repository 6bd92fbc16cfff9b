use crate::error::CanvasError;
use crate::scene::Vec2;
use web_sys::{MouseEvent, SvgsvgElement};

pub fn client_to_stage_coords(event: &MouseEvent, svg_element: &SvgsvgElement) -> Vec2 {
    // Stage coordinates are relative to the svg's top-left corner
    let rect = svg_element.get_bounding_client_rect();
    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();
    Vec2::new(x, y)
}

/// Inner width and height of the browser window.
pub fn viewport_size() -> Result<(f64, f64), CanvasError> {
    let window = gloo::utils::window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| CanvasError::Viewport("inner width".to_string()))?;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| CanvasError::Viewport("inner height".to_string()))?;
    Ok((width, height))
}
