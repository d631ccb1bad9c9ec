pub mod config;
pub mod error;
pub mod output;
pub mod run;
pub mod share;
pub mod summarize;
pub mod youtube;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::InvalidReference;

pub use run::{RunOptions, RunOutput, run};

const VIDEO_ID_LEN: usize = 11;
const SHORT_LINK_HOSTS: [&str; 2] = ["youtu.be", "www.youtu.be"];

static SHORTS_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/shorts/([A-Za-z0-9_-]{11})").expect("shorts pattern is valid"));

/// An 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parse(candidate: &str) -> Option<Self> {
        is_video_id(candidate).then(|| VideoId(candidate.to_string()))
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = InvalidReference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract_video_id(s)
    }
}

/// A single captioned segment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Caption transcript for a video
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: VideoId,
    pub title: String,
    pub language: String,
    pub is_generated: bool,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// All segment text as one space-separated string
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

// Scheme-less input like "youtube.com/shorts/ID" still has a usable path.
fn parse_lenient(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("https://localhost/").ok()?.join(input).ok(),
        Err(_) => None,
    }
}

/// Extract video ID from a bare ID or a watch, youtu.be or shorts URL
pub fn extract_video_id(input: &str) -> Result<VideoId, InvalidReference> {
    let input = input.trim();
    let invalid = || InvalidReference {
        input: input.to_string(),
    };

    if let Some(id) = VideoId::parse(input) {
        return Ok(id);
    }

    let url = parse_lenient(input).ok_or_else(invalid)?;

    // youtu.be/ID
    if url.host_str().is_some_and(|h| SHORT_LINK_HOSTS.contains(&h)) {
        let first = url.path().trim_matches('/').split('/').next().unwrap_or_default();
        if let Some(id) = VideoId::parse(first) {
            return Ok(id);
        }
    }

    // youtube.com/watch?v=ID
    if url.path() == "/watch" {
        let v = url
            .query_pairs()
            .find_map(|(k, v)| (k == "v").then(|| v.into_owned()))
            .unwrap_or_default();
        if let Some(id) = VideoId::parse(&v) {
            return Ok(id);
        }
    }

    // youtube.com/shorts/ID
    if let Some(caps) = SHORTS_PATH.captures(url.path()) {
        return Ok(VideoId(caps[1].to_string()));
    }

    Err(invalid())
}
