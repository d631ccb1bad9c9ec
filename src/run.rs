use log::info;

use crate::config::ApiKey;
use crate::error::RunError;
use crate::output::{DEFAULT_PREVIEW_CHARS, preview};
use crate::summarize::{CompletionProvider, Model, TweetSet, summarize};
use crate::youtube::{DEFAULT_LANGUAGES, TranscriptProvider, fetch_transcript};
use crate::{Transcript, VideoId, extract_video_id};

/// Per-run settings after CLI and config precedence is applied
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub languages: Vec<String>,
    pub model: Model,
    pub preview_chars: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            model: Model::default(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

#[derive(Debug)]
pub struct RunOutput {
    pub video_id: VideoId,
    pub transcript: Transcript,
    pub preview: String,
    pub tweets: TweetSet,
}

/// Reference in, posts out.
///
/// The credential is validated first; `connect` only sees a valid key, and no
/// provider is called when the credential or the reference is bad.
pub async fn run<T, C, F>(
    credential: Option<String>,
    reference: &str,
    options: &RunOptions,
    transcripts: &T,
    connect: F,
) -> Result<RunOutput, RunError>
where
    T: TranscriptProvider,
    C: CompletionProvider,
    F: FnOnce(ApiKey) -> C,
{
    let api_key = ApiKey::from_value(credential)?;

    let video_id = extract_video_id(reference)?;
    info!("Resolved {} to {video_id}", reference.trim());

    let transcript = fetch_transcript(transcripts, &video_id, &options.languages).await?;
    let text = transcript.text();
    let preview = preview(&text, options.preview_chars);

    let completion = connect(api_key);
    let tweets = summarize(&completion, &text, options.model)
        .await
        .map_err(|source| RunError::Completion {
            video_id: video_id.to_string(),
            source,
        })?;
    info!("Generated {} posts for {video_id}", tweets.len());

    Ok(RunOutput {
        video_id,
        transcript,
        preview,
        tweets,
    })
}
