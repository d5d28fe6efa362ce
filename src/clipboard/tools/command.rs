//! Clipboard tools backed by an external program reading stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Pipes text into a clipboard program such as `pbcopy` or `xclip`.
#[derive(Debug, Clone)]
pub struct CommandTool {
    method: CopyMethod,
    program: &'static str,
    args: &'static [&'static str],
    supported: bool,
}

impl CommandTool {
    /// macOS pasteboard.
    pub fn pbcopy() -> Self {
        Self::new(CopyMethod::Pbcopy, "pbcopy", &[], cfg!(target_os = "macos"))
    }

    /// Wayland clipboard.
    pub fn wl_copy() -> Self {
        Self::new(CopyMethod::WlCopy, "wl-copy", &[], cfg!(target_os = "linux"))
    }

    /// X11 clipboard via xclip.
    pub fn xclip() -> Self {
        Self::new(
            CopyMethod::Xclip,
            "xclip",
            &["-selection", "clipboard"],
            cfg!(target_os = "linux"),
        )
    }

    /// X11 clipboard via xsel.
    pub fn xsel() -> Self {
        Self::new(
            CopyMethod::Xsel,
            "xsel",
            &["--clipboard", "--input"],
            cfg!(target_os = "linux"),
        )
    }

    fn new(
        method: CopyMethod,
        program: &'static str,
        args: &'static [&'static str],
        supported: bool,
    ) -> Self {
        Self {
            method,
            program,
            args,
            supported,
        }
    }

    pub fn program(&self) -> &'static str {
        self.program
    }

    /// Check if the program is installed.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl CopyTool for CommandTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.supported && self.tool_exists()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(format!("{} exited with {}", self.program, status)))
        }
    }
}
