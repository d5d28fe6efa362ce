//! Copy operation results and method identifiers.

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that accepted the text
    pub tool: CopyMethod,
    /// Number of bytes copied
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        match self.tool {
            CopyMethod::Osc52 => format!(
                "Sent {} bytes to the terminal clipboard (OSC 52)",
                self.size_bytes
            ),
            tool => format!("Copied {} bytes to clipboard via {}", self.size_bytes, tool.name()),
        }
    }

    /// Whether the copy went through the terminal rather than a system tool.
    pub fn is_terminal_copy(&self) -> bool {
        self.tool == CopyMethod::Osc52
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux Wayland
    WlCopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Terminal escape sequence, handled by the terminal emulator
    Osc52,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Osc52 => "osc52",
        }
    }
}
