pub mod context;
pub mod file;

pub use context::build_context;
pub use file::{render_file, render_file_to};
