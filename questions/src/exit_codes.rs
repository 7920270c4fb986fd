//! Stable exit codes for `questions` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to an invalid config, collection file, or argument.
pub const INVALID: i32 = 1;
/// `questions find` matched no question.
pub const NOT_FOUND: i32 = 2;
