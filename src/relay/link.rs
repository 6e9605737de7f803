//! Share link parsing and identifier extraction.

use super::PATH_MARKER;
use super::pipeline::RelayError;

/// A validated GoFile share link.
///
/// Constructed from user input, consumed once by the pipeline and
/// discarded; there is no persisted lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    raw: String,
    content_id: String,
}

impl ShareLink {
    /// Parses a share link, extracting the content identifier.
    ///
    /// The link must contain the `gofile.io/d/` path marker followed by a
    /// non-empty identifier. Any further path segment, query string or
    /// fragment after the identifier is ignored.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::InvalidLink` if the marker is missing or no
    /// identifier follows it.
    pub fn parse(input: &str) -> Result<Self, RelayError> {
        let input = input.trim();

        if !input.contains(PATH_MARKER) {
            return Err(RelayError::InvalidLink(input.to_owned()));
        }

        let after_marker = input
            .split_once("/d/")
            .map(|(_, rest)| rest)
            .unwrap_or_default();

        let content_id: String = after_marker
            .chars()
            .take_while(|&c| c != '/' && c != '?' && c != '#')
            .collect();

        if content_id.is_empty() {
            return Err(RelayError::InvalidLink(input.to_owned()));
        }

        Ok(Self {
            raw: input.to_owned(),
            content_id,
        })
    }

    /// The extracted content identifier.
    #[must_use]
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// The original link text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}
