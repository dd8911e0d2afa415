mod traits;

pub use traits::{OutputRenderer, RenderInput};
