//! HTTP-backed video source
//!
//! Metadata comes from the public oEmbed endpoint (title and uploader;
//! duration and view count are not exposed there). Transcripts come from
//! the timedtext captions endpoint in `json3` format.

use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::{NotegenError, Result};

use super::{VideoId, VideoMetadata, VideoSource};

const OEMBED_URL: &str = "https://www.youtube.com/oembed";
const TIMEDTEXT_URL: &str = "https://video.google.com/timedtext";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_CAPTION_LANG: &str = "en";

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
    #[serde(default)]
    author_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

/// Video source backed by plain HTTPS requests
pub struct HttpVideoSource {
    agent: ureq::Agent,
    caption_lang: String,
}

impl Default for HttpVideoSource {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION_LANG)
    }
}

impl HttpVideoSource {
    /// Create a source fetching captions in the given language
    pub fn new(caption_lang: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)))
            .build();

        HttpVideoSource {
            agent: config.into(),
            caption_lang: caption_lang.to_string(),
        }
    }

    fn get(&self, url: &Url) -> Result<String> {
        let mut response = self.agent.get(url.as_str()).call()?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| NotegenError::Http(e.to_string()))
    }
}

impl VideoSource for HttpVideoSource {
    fn metadata(&self, id: &VideoId) -> Result<VideoMetadata> {
        let url = Url::parse_with_params(
            OEMBED_URL,
            &[("url", id.watch_url().as_str()), ("format", "json")],
        )
        .map_err(|e| NotegenError::Other(e.to_string()))?;

        debug!(video = %id, "fetching metadata");
        let body = self.get(&url)?;
        let oembed: OEmbedResponse = serde_json::from_str(&body)?;

        Ok(VideoMetadata {
            title: oembed.title,
            link: id.watch_url(),
            uploader: oembed.author_name,
            duration: None,
            views: None,
        })
    }

    fn transcript(&self, id: &VideoId) -> Result<String> {
        let url = Url::parse_with_params(
            TIMEDTEXT_URL,
            &[
                ("lang", self.caption_lang.as_str()),
                ("v", id.as_str()),
                ("fmt", "json3"),
            ],
        )
        .map_err(|e| NotegenError::Other(e.to_string()))?;

        debug!(video = %id, lang = %self.caption_lang, "fetching captions");
        let body = self.get(&url)?;

        // An empty body means the video has no captions in this language
        if body.trim().is_empty() {
            return Err(NotegenError::not_found("captions", id));
        }

        let timedtext: TimedText = serde_json::from_str(&body)?;
        let text = join_caption_segments(&timedtext);
        if text.is_empty() {
            return Err(NotegenError::not_found("captions", id));
        }

        Ok(text)
    }
}

/// Join caption segments into a single line of text with normalized spacing
fn join_caption_segments(timedtext: &TimedText) -> String {
    let joined = timedtext
        .events
        .iter()
        .flat_map(|event| event.segs.iter())
        .map(|seg| seg.utf8.trim())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    normalize_whitespace(&joined)
}

/// Collapse runs of whitespace (including newlines) into single spaces
pub fn normalize_whitespace(text: &str) -> String {
    let ws_re = match Regex::new(r"\s+") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile whitespace regex");
            return text.to_string();
        }
    };
    ws_re.replace_all(text.trim(), " ").into_owned()
}
