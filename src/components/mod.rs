mod rectangle;
mod stage_view;
mod transformer_view;

pub use rectangle::*;
pub use stage_view::*;
pub use transformer_view::*;
