//! Command implementations for the sigtrace CLI.

pub mod generate;
pub mod validate;
