//! Command handlers.
//!
//! Each handler receives the composed [`CliContext`](crate::CliContext) and
//! delegates to the preference registry. Rendering is kept in pure functions
//! so output can be tested without capturing stdout.

pub mod get;
pub mod list;
pub mod paths;
pub mod reset;
pub mod set;
pub mod version;
