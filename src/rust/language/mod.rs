pub mod interpolate;
pub mod preprocessor;
pub mod scope;
pub mod syntax;
