//! Non-blocking keyboard input for the render loop.
//!
//! The loop polls once per frame and never waits: a pending keypress comes
//! back immediately, an idle keyboard comes back as `None` just as fast.
//! "No key" is a normal poll outcome, not an error.

pub mod poll;

pub use poll::{poll_key, should_quit};
