pub mod collections;
pub mod strings;
