//! Browser Commands
//!
//! Thin wrappers over browser APIs, organized by concern.

mod dialog;
mod download;
mod storage;

pub use dialog::*;
pub use download::*;
pub use storage::*;
