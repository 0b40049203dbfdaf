//! Word lists and the combination cache
//!
//! Everything that touches the filesystem lives here; the solver and the
//! search only ever see in-memory word slices.

pub mod cache;
pub mod loader;

pub use cache::CombinationCache;
pub use loader::{load_from_file, words_from_slice};
