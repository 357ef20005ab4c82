//! Isleforge CLI library.
//!
//! Recipe loading, logging setup, terminal preview and the command
//! implementations behind the `isleforge` binary.

pub mod commands;
pub mod input;
pub mod logging;
pub mod preview;
