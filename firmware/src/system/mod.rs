//! Core system components shared between tasks
pub mod event;
pub mod resources;
