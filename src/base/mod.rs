//! Foundation types shared by the rest of the crate.
//!
//! This module has no dependencies on other `xeger` modules.

mod position;

pub use position::{Position, Span};
