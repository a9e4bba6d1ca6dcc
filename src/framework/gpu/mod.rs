
mod buffers;
mod context;
pub mod vertices;

pub use buffers::*;
pub use context::*;
