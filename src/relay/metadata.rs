//! Content-info lookup against the GoFile API.

use serde::Deserialize;
use tracing::debug;

use super::pipeline::RelayError;

/// Success sentinel in the `status` field of a content-info response.
const STATUS_OK: &str = "ok";

/// Resolved metadata for a single hosted file.
///
/// Transient: derived from one remote lookup, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Server-supplied file name.
    pub name: String,

    /// Direct-download URL pointing at the raw file bytes.
    pub link: String,
}

/// Wire shape of `GET <base>/getContent?contentId=<id>`.
#[derive(Debug, Deserialize)]
pub(super) struct ContentResponse {
    pub status: String,

    #[serde(default)]
    pub data: Option<ContentData>,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentData {
    #[serde(default)]
    pub contents: Vec<ContentEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentEntry {
    pub name: String,
    pub link: String,
}

/// Resolves a content identifier to file metadata with a single GET.
///
/// # Errors
///
/// Returns `RelayError::Metadata` if the request fails, the response
/// status is not the success sentinel, or no content entry is present.
pub(super) async fn fetch(
    client: &reqwest::Client,
    api_base: &str,
    content_id: &str,
) -> Result<FileMetadata, RelayError> {
    let url = format!("{api_base}/getContent?contentId={content_id}");
    debug!(url = %url, "resolving content metadata");

    let response: ContentResponse = client
        .get(&url)
        .send()
        .await
        .map_err(|e| RelayError::Metadata(e.to_string()))?
        .json()
        .await
        .map_err(|e| RelayError::Metadata(e.to_string()))?;

    if response.status != STATUS_OK {
        let reason = response
            .message
            .unwrap_or_else(|| format!("server returned status '{}'", response.status));
        return Err(RelayError::Metadata(reason));
    }

    let entry = response
        .data
        .and_then(|data| data.contents.into_iter().next())
        .ok_or_else(|| RelayError::Metadata("no contents found in the response".to_owned()))?;

    debug!(name = %entry.name, "resolved content entry");

    Ok(FileMetadata {
        name: entry.name,
        link: entry.link,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let raw = r#"{
            "status": "ok",
            "data": {
                "contents": [
                    { "name": "report.pdf", "link": "https://cdn.example/report.pdf", "size": 1024 }
                ]
            }
        }"#;

        let response: ContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, "ok");
        let data = response.data.unwrap();
        assert_eq!(data.contents.len(), 1);
        assert_eq!(data.contents[0].name, "report.pdf");
        assert_eq!(data.contents[0].link, "https://cdn.example/report.pdf");
    }

    #[test]
    fn test_parse_error_response_without_data() {
        let raw = r#"{ "status": "error-notFound", "message": "Content not found" }"#;

        let response: ContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, "error-notFound");
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("Content not found"));
    }

    #[test]
    fn test_parse_response_with_empty_contents() {
        let raw = r#"{ "status": "ok", "data": { "contents": [] } }"#;

        let response: ContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.data.unwrap().contents.is_empty());
    }
}
