use thiserror::Error;

/// Failures surfaced by scene and controller operations.
///
/// None of these are expected during normal interaction; they mark a
/// broken association (a dangling node id, a stale index) rather than a
/// user-facing condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("no node with id `{0}` in layer")]
    UnknownNode(String),

    #[error("index {index} out of bounds for {len} rectangles")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("node `{0}` has zero width or height and cannot be scaled")]
    DegenerateNode(String),

    #[error("transformer is not attached to any node")]
    NotAttached,

    #[error("viewport size unavailable: {0}")]
    Viewport(String),
}
