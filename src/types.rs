use serde::{Deserialize, Serialize};

/// Smallest width or height the transformer will accept, and the floor
/// applied to width when a resize completes.
pub const MIN_SIZE: f64 = 5.0;

/// Side length of a transformer anchor square.
pub const ANCHOR_SIZE: f64 = 10.0;

/// Stage size used when the viewport cannot be read.
pub const FALLBACK_STAGE_SIZE: (f64, f64) = (800.0, 600.0);

pub const TRANSFORMER_STROKE: &str = "rgb(0, 161, 255)";
pub const ANCHOR_FILL: &str = "white";

/// Attributes of one rectangle as held by the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectAttrs {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub id: String,
}

impl RectAttrs {
    pub fn new(id: &str, x: f64, y: f64, width: f64, height: f64, fill: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: fill.to_string(),
            id: id.to_string(),
        }
    }

    /// Same rectangle moved to `(x, y)`.
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }

    /// Compact JSON for log records.
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.id.clone())
    }
}

pub fn initial_rectangles() -> Vec<RectAttrs> {
    vec![
        RectAttrs::new("rect1", 10.0, 10.0, 100.0, 100.0, "red"),
        RectAttrs::new("rect2", 150.0, 150.0, 100.0, 100.0, "green"),
    ]
}
