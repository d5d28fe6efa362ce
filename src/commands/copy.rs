//! Copy command handler

use anyhow::Result;

use playbar::clipboard::copy_to_clipboard;
use playbar::theme::current_theme;

/// Copy `text` to the clipboard and report which tool took it.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str) -> Result<()> {
    let result = copy_to_clipboard(text)?;
    let theme = current_theme();
    eprintln!("{}", theme.success_text(&result.message()));
    Ok(())
}
