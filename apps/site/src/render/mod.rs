// HTML rendering: escaping, per-region fragments, and injection of those
// fragments into the static page by element id.

pub mod escape;
pub mod page;
pub mod sections;

pub use page::{inject, set_root_class};
pub use sections::render;
