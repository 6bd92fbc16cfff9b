mod layer;
mod node;
mod stage;
mod transformer;
mod types;

pub use layer::*;
pub use node::*;
pub use stage::*;
pub use transformer::*;
pub use types::*;
