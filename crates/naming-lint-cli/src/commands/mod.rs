//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_selectors;
pub mod output;
