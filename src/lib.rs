//! tui-canvas (workspace facade crate).
//!
//! This package keeps a single `tui_canvas::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_canvas_core as core;
pub use tui_canvas_engine as engine;
pub use tui_canvas_input as input;
pub use tui_canvas_term as term;
pub use tui_canvas_types as types;
