//! Frontend abstraction layer
//!
//! Defines the `Frontend` trait the terminal frontend implements: event
//! polling, rendering, and cleanup. The core never imports from here.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Separates rendering and input plumbing from gallery logic
pub trait Frontend {
    /// Return all pending input events (empty if none arrived within the poll timeout)
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Draw one frame from the current gallery state
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size as `(width, height)`
    fn size(&self) -> (u16, u16);
}
