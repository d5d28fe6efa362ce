//! Strip-accents command handler

use anyhow::Result;

use playbar::text::remove_accents;

/// Print the words joined by spaces with accents removed.
pub fn handle(words: &[String]) -> Result<()> {
    println!("{}", remove_accents(&words.join(" ")));
    Ok(())
}
