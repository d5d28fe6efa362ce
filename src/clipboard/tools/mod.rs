//! Platform-specific clipboard tools.

mod command;
mod osc52;

pub use command::CommandTool;
pub use osc52::{osc52_sequence, Osc52};

use super::tool::CopyTool;

/// Get the platform-appropriate tools in priority order.
///
/// The terminal clipboard comes last so a local tool is preferred when
/// one exists.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    let mut tools: Vec<Box<dyn CopyTool>> = Vec::new();

    #[cfg(target_os = "macos")]
    {
        tools.push(Box::new(CommandTool::pbcopy()));
    }

    #[cfg(target_os = "linux")]
    {
        tools.push(Box::new(CommandTool::wl_copy()));
        tools.push(Box::new(CommandTool::xclip()));
        tools.push(Box::new(CommandTool::xsel()));
    }

    tools.push(Box::new(Osc52::stdout()));
    tools
}
