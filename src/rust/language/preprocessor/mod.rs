/// Preprocessor module - handles import-path resolution and module loading
pub mod loader;

pub use loader::{append_index_file, expand_home, resolve_module_path, unalias_path};
