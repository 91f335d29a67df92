//! Commands module - CLI command implementations.
//!
//! Each command resolves the settings itself and writes to the given
//! output, so the binary and the tests share one code path.

pub mod check;
pub mod get;
pub mod hosts;
pub mod show;
