//! Terminal error taxonomy.
//!
//! Both variants are fatal for a full-screen loop: capability failures
//! abort before the loop starts, present failures abort it mid-flight.
//! There is no degraded mode and no retry; the only obligation on either
//! path is that session teardown still runs.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    /// The terminal lacks a feature the demo cannot run without.
    #[error("terminal lacks required capability: {0}")]
    Capability(String),

    /// A drawing or buffer-flip primitive failed mid-loop.
    #[error("failed to present frame")]
    Present(#[from] io::Error),
}
