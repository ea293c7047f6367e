/// Scope module - variable tables consulted during interpolation
pub mod variables;

pub use variables::Environment;
