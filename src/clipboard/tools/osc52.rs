//! OSC 52 clipboard: ask the terminal emulator to set the clipboard.
//!
//! Works over SSH and inside multiplexers that forward the sequence, where
//! no local clipboard program can reach the user's clipboard.

use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Build the OSC 52 sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Writes OSC 52 sequences to a terminal.
pub struct Osc52<W: Write + Send> {
    out: Mutex<W>,
    available: bool,
}

impl Osc52<io::Stdout> {
    /// Write to stdout, available only when stdout is a terminal.
    pub fn stdout() -> Self {
        let available = io::stdout().is_terminal();
        Self::with_writer(io::stdout(), available)
    }
}

impl<W: Write + Send> Osc52<W> {
    pub fn with_writer(out: W, available: bool) -> Self {
        Self {
            out: Mutex::new(out),
            available,
        }
    }

    /// Recover the writer (for inspecting output in tests).
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> CopyTool for Osc52<W> {
    fn method(&self) -> CopyMethod {
        CopyMethod::Osc52
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| CopyToolError::Failed("terminal writer poisoned".to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| CopyToolError::Failed(e.to_string()))
    }
}
