//! Share command handler

use anyhow::{Context, Result};

use playbar::share::{all_links, Provider};
use playbar::theme::current_theme;
use playbar::Config;

/// Print share links for `url`.
///
/// With a provider only the bare link is printed, so it can be piped.
pub fn handle(url: &str, title: Option<&str>, provider: Option<&str>) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let title = title.unwrap_or(&config.share.default_title);

    if let Some(name) = provider {
        let provider: Provider = name.parse()?;
        println!("{}", provider.link(url, title));
        return Ok(());
    }

    let theme = current_theme();
    for (provider, link) in all_links(url, title) {
        println!(
            "{} {}",
            theme.accent_text(&format!("{:<9}", provider.name())),
            link
        );
    }
    Ok(())
}
