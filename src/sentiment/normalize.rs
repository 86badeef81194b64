//! Text normalization for sentiment scoring

use regex::Regex;

use crate::Result;
use crate::SolaceError;

/// Strips noise tokens (URLs, @mentions, #hashtags) and collapses
/// whitespace. Holds the compiled pattern; build once and share.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    noise: Regex,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        let noise = Regex::new(r"http\S+|www\S+|@\w+|#\w+")
            .map_err(|e| SolaceError::ConfigError(format!("invalid noise pattern: {e}")))?;
        Ok(Self { noise })
    }

    /// Normalize text in one pass: drop noise tokens, collapse whitespace
    /// runs to single spaces, trim the ends. Empty input stays empty.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.noise.replace_all(text, "");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
