pub mod language;
pub mod utils;
