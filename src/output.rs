use serde::Serialize;

use crate::share::build_share_link;
use crate::summarize::TweetSet;

pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Serialize)]
struct SharedTweet<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    video_id: &'a str,
    language: &'a str,
    preview: String,
    tweets: Vec<SharedTweet<'a>>,
    complete: bool,
}

/// First `max_chars` characters of the transcript, marked when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{TRUNCATION_MARKER}", &text[..idx]),
        None => text.to_string(),
    }
}

/// Render numbered posts with share links, or the raw list when incomplete
pub fn render_tweets(tweets: &TweetSet) -> String {
    if !tweets.is_complete() {
        return if tweets.is_empty() {
            "(empty output)".to_string()
        } else {
            format!("{:?}", tweets.tweets())
        };
    }

    tweets
        .tweets()
        .iter()
        .enumerate()
        .map(|(i, t)| format!("Tweet {}\n{t}\n{}", i + 1, build_share_link(t)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the whole run as pretty JSON; share links only accompany a complete set
pub fn render_json(video_id: &str, language: &str, preview: String, tweets: &TweetSet) -> String {
    let complete = tweets.is_complete();
    let report = Report {
        video_id,
        language,
        preview,
        tweets: tweets
            .tweets()
            .iter()
            .map(|t| SharedTweet {
                text: t,
                share_url: complete.then(|| build_share_link(t)),
            })
            .collect(),
        complete,
    };
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
