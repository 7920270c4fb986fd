//! I/O helpers for the `questions` CLI.

pub mod config;
pub mod store;
