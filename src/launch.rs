//! Learn launcher - builds a search-engine query URL for a skill and opens
//! it in the user's browser.
//!
//! Fire-and-forget: no response is consumed, and a failed browser launch is
//! logged rather than surfaced as an error.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search engines with a URL template for learning queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Youtube,
    Duckduckgo,
    Yandex,
}

impl SearchEngine {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Youtube => "YouTube",
            Self::Duckduckgo => "DuckDuckGo",
            Self::Yandex => "Yandex",
        }
    }

    /// Build the engine's search URL for an already-encoded query.
    fn url_for(self, encoded_query: &str) -> String {
        match self {
            Self::Google => format!("https://www.google.com/search?q={encoded_query}"),
            Self::Youtube => {
                format!("https://www.youtube.com/results?search_query={encoded_query}")
            }
            Self::Duckduckgo => format!("https://duckduckgo.com/?q={encoded_query}"),
            Self::Yandex => format!("https://yandex.ru/search/?text={encoded_query}"),
        }
    }
}

/// The learning-course search URL for a skill name.
#[must_use]
pub fn learning_url(engine: SearchEngine, skill_name: &str) -> String {
    let query = format!("{skill_name} learning course how to");
    engine.url_for(&urlencoding::encode(&query))
}

/// Try to open a URL in the user's browser. Returns whether it launched.
pub fn open_browser(url: &str) -> bool {
    match open::that(url) {
        Ok(()) => {
            debug!(url = %url, "Opened browser");
            true
        }
        Err(e) => {
            debug!(url = %url, error = %e, "Failed to open browser");
            false
        }
    }
}
