//! Social share link builders.

use std::fmt;
use std::str::FromStr;

use urlencoding::encode;

/// Errors from share link lookup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("Unknown share provider '{0}'. Expected one of: facebook, twitter, reddit, email")]
    UnknownProvider(String),
}

/// A service a link can be shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Facebook,
    Twitter,
    Reddit,
    Email,
}

impl Provider {
    /// All providers in display order.
    pub const ALL: [Provider; 4] = [
        Provider::Facebook,
        Provider::Twitter,
        Provider::Reddit,
        Provider::Email,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Facebook => "Facebook",
            Provider::Twitter => "Twitter",
            Provider::Reddit => "Reddit",
            Provider::Email => "Email",
        }
    }

    /// Path of the provider's icon asset.
    pub fn icon(&self) -> &'static str {
        match self {
            Provider::Facebook => "/share-icon/facebook.svg",
            Provider::Twitter => "/share-icon/twitter.svg",
            Provider::Reddit => "/share-icon/reddit.svg",
            Provider::Email => "/share-icon/email.svg",
        }
    }

    /// Build the share link for `url` with `title`.
    ///
    /// Both values are percent-encoded.
    pub fn link(&self, url: &str, title: &str) -> String {
        let url = encode(url);
        let title = encode(title);
        match self {
            Provider::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={url}&t={title}")
            }
            Provider::Twitter => format!("http://twitter.com/share?text={title}&url={url}"),
            Provider::Reddit => format!("http://www.reddit.com/submit?url={url}&title={title}"),
            Provider::Email => format!("mailto:?subject={title}&body={url}"),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShareError::UnknownProvider(s.to_string()))
    }
}

/// Share links for every provider, in display order.
pub fn all_links(url: &str, title: &str) -> Vec<(Provider, String)> {
    Provider::ALL
        .into_iter()
        .map(|p| (p, p.link(url, title)))
        .collect()
}
