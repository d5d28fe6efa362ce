//! Clipboard copy.
//!
//! Tries local clipboard programs first and falls back to asking the
//! terminal (OSC 52).

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};

/// Copy `text` using the platform's tools.
pub fn copy_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
