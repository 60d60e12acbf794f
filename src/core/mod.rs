//! Core gallery logic
//!
//! Owns widget state and applies actions to it. No imports from frontend/
//! or rendering code; frontends read the state and draw it.

pub mod actions;
pub mod app_core;
pub mod input_router;

pub use actions::GalleryAction;
pub use app_core::AppCore;
