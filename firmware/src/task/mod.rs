//! Task implementations
pub mod display;
pub mod range_measure;
