//! Video metadata and transcript retrieval
//!
//! URL parsing is pure and local; the network side lives behind the
//! [`VideoSource`] trait so orchestration code can be tested offline.

pub mod http;

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::{NotegenError, Result};

pub use http::HttpVideoSource;

/// A validated video identifier extracted from a watch URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// The raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata describing a video
#[derive(Debug, Clone, Serialize)]
pub struct VideoMetadata {
    /// Human-readable title
    pub title: String,
    /// Canonical watch URL
    pub link: String,
    /// Channel or uploader name, when the source provides one
    pub uploader: Option<String>,
    /// Duration as `HH:MM:SS`, when the source provides one
    pub duration: Option<String>,
    /// View count, when the source provides one
    pub views: Option<u64>,
}

/// Retrieval collaborator for video metadata and transcripts
pub trait VideoSource {
    /// Fetch metadata for a video
    fn metadata(&self, id: &VideoId) -> Result<VideoMetadata>;
    /// Fetch the full transcript text for a video
    fn transcript(&self, id: &VideoId) -> Result<String>;
}

/// Parse a watch URL into a [`VideoId`].
///
/// Accepts `https://www.youtube.com/watch?v=ID` (with or without the `www.`
/// host prefix) and `https://youtu.be/ID`. Everything else is rejected as a
/// usage error.
pub fn parse_video_url(raw: &str) -> Result<VideoId> {
    let parsed =
        Url::parse(raw).map_err(|e| NotegenError::invalid_url(raw, e.to_string()))?;

    if parsed.scheme() != "https" {
        return Err(NotegenError::invalid_url(raw, "expected an https URL"));
    }

    let id = match parsed.host_str() {
        Some("youtu.be") => parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .unwrap_or("")
            .to_string(),
        Some("www.youtube.com") | Some("youtube.com") => {
            if parsed.path() != "/watch" {
                return Err(NotegenError::invalid_url(raw, "expected a /watch path"));
            }
            parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
                .unwrap_or_default()
        }
        _ => {
            return Err(NotegenError::invalid_url(raw, "unrecognized video host"));
        }
    };

    if id.is_empty() {
        return Err(NotegenError::invalid_url(raw, "missing video id"));
    }

    Ok(VideoId(id))
}

/// Format a duration in seconds as `HH:MM:SS`
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watch_url() {
        let id = parse_video_url("https://www.youtube.com/watch?v=f19bfHpCths").unwrap();
        assert_eq!(id.as_str(), "f19bfHpCths");
        assert_eq!(
            id.watch_url(),
            "https://www.youtube.com/watch?v=f19bfHpCths"
        );
    }

    #[test]
    fn test_parse_short_url() {
        let id = parse_video_url("https://youtu.be/f19bfHpCths").unwrap();
        assert_eq!(id.as_str(), "f19bfHpCths");
    }

    #[test]
    fn test_parse_bare_host_url() {
        let id = parse_video_url("https://youtube.com/watch?v=abc123").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_rejects_other_hosts_and_schemes() {
        assert!(parse_video_url("https://vimeo.com/12345").is_err());
        assert!(parse_video_url("http://www.youtube.com/watch?v=abc").is_err());
        assert!(parse_video_url("not a url").is_err());
    }

    #[test]
    fn test_rejects_missing_id() {
        assert!(parse_video_url("https://www.youtube.com/watch").is_err());
        assert!(parse_video_url("https://www.youtube.com/playlist?list=x").is_err());
    }

    #[test]
    fn test_invalid_url_is_usage_error() {
        let err = parse_video_url("ftp://example.com").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::ExitCode::Usage);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(7322), "02:02:02");
    }
}
