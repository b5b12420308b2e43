//! Helpers for exercising generated parse tables in tests

mod terminal_stream;
mod walker;

pub use crate::terminal_stream::TerminalStream;
pub use crate::walker::{walk, Step, WalkError};
