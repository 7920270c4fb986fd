//! In-memory queries and transforms over quiz question collections.
//!
//! - **[`core`]**: Pure, deterministic logic (queries, id-targeted edits,
//!   insertion, answer derivation, CSV export). No I/O, fully testable in
//!   isolation.
//! - **[`io`]**: Collection file loading and CLI configuration, used only by
//!   the `questions` binary.
//!
//! The data model lives in [`question`].

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod question;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
