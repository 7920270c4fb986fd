//! Deterministic, pure logic over question collections.
//!
//! Core modules must be free of I/O side effects. Every function borrows its
//! input and returns a freshly built value; no input is ever modified.

pub mod answers;
pub mod csv;
pub mod edit;
pub mod insert;
pub mod invariants;
pub mod query;
pub mod types;
