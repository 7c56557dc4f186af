//! Terminal session layer.
//!
//! Everything that touches a real terminal lives here: capability
//! detection, raw-mode session setup/teardown, and the diff-based frame
//! presenter. The rendering core never sees crossterm; it hands finished
//! framebuffers across this seam.

pub mod caps;
pub mod error;
pub mod renderer;

pub use tui_canvas_core as core;

pub use caps::Capabilities;
pub use error::TermError;
pub use renderer::TerminalRenderer;
