//! TUI Frontend (ratatui-based)
//!
//! Implements the Frontend trait using ratatui for rendering and crossterm
//! for terminal management and input.

pub mod app;
pub mod gallery;
pub mod panels;

pub use app::TuiFrontend;
