//! sigtrace CLI library.
//!
//! Command implementations live here so they stay testable; the `sigtrace`
//! binary in `main.rs` only parses arguments and dispatches.

pub mod commands;
pub mod input;
