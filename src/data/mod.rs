//! Data layer - Pure state without UI coupling
//!
//! NO imports from frontend/ or any rendering code.

pub mod ui_state;

pub use ui_state::*;
