use std::fmt;
use std::future::Future;
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::config::ApiKey;
use crate::error::CompletionError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Number of posts requested from the model
pub const TWEET_COUNT: usize = 3;

const PROMPT_HEADER: &str = r#"Aşağıdaki YouTube transkriptinden videonun en önemli 3 konusunu çıkar.
Her konu için Türkçe tek bir tweet yaz.

Kurallar:
- Tam olarak 3 tweet döndür.
- Her tweet tek paragraf olsun.
- Konular birbirinden farklı olsun.
- Tweetlerde gereksiz emoji/hashtag kullanma.
- Fazla genel konuşma: somut, videodaki ana iddiaları/başlıkları yakala.
- Tweetleri bir haber kanalı üslubuyla oluştur.
- Çıktıyı JSON olarak döndür: {"tweets":["...","...","..."]}"#;

/// Supported completion models
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Model {
    #[default]
    #[value(name = "gpt-4.1-mini")]
    Gpt41Mini,
    #[value(name = "gpt-4.1")]
    Gpt41,
    #[value(name = "gpt-5-mini")]
    Gpt5Mini,
    #[value(name = "gpt-5")]
    Gpt5,
}

impl Model {
    pub fn api_name(&self) -> &'static str {
        match self {
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Gpt5 => "gpt-5",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Model as clap::ValueEnum>::from_str(s.trim(), true).map_err(|_| format!("unsupported model: {s}"))
    }
}

/// Up to three candidate posts, in model order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TweetSet(Vec<String>);

impl TweetSet {
    /// Exactly the requested number of posts came back
    pub fn is_complete(&self) -> bool {
        self.0.len() == TWEET_COUNT
    }

    pub fn tweets(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A text completion backend
pub trait CompletionProvider {
    fn complete(&self, model: Model, prompt: &str) -> impl Future<Output = Result<String, CompletionError>>;
}

/// OpenAI Responses API client
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, api_key: ApiKey) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

impl CompletionProvider for OpenAiClient {
    async fn complete(&self, model: Model, prompt: &str) -> Result<String, CompletionError> {
        debug!("Requesting completion via OpenAI API with model {model}");

        let body = serde_json::json!({
            "model": model.api_name(),
            "input": prompt,
        });

        let resp = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(self.api_key.expose())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, message });
        }

        let json: serde_json::Value = resp.json().await?;
        Ok(extract_output_text(&json))
    }
}

/// Build the Turkish news-style prompt around a transcript
pub fn build_prompt(transcript: &str) -> String {
    format!("{PROMPT_HEADER}\n\nTRANSKRIPT:\n{transcript}").trim().to_string()
}

/// Generate up to three posts for a transcript
pub async fn summarize<P: CompletionProvider>(
    provider: &P,
    transcript: &str,
    model: Model,
) -> Result<TweetSet, CompletionError> {
    let prompt = build_prompt(transcript);
    debug!("Prompt length: {} chars", prompt.chars().count());

    let raw = provider.complete(model, &prompt).await?;
    let tweets = parse_tweets(&raw);
    if !tweets.is_complete() {
        warn!("Model returned {} usable posts, expected {TWEET_COUNT}", tweets.len());
    }
    Ok(tweets)
}

/// Parse a `{"tweets": [...]}` payload; anything malformed yields an empty set
pub fn parse_tweets(raw: &str) -> TweetSet {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(raw.trim()) else {
        debug!("Model output is not JSON");
        return TweetSet::default();
    };

    let Some(items) = value.get("tweets").and_then(|t| t.as_array()) else {
        debug!("Model output has no tweets array");
        return TweetSet::default();
    };

    TweetSet(
        items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .take(TWEET_COUNT)
            .map(str::to_string)
            .collect(),
    )
}

fn extract_output_text(json: &serde_json::Value) -> String {
    if let Some(text) = json.get("output_text").and_then(|t| t.as_str()) {
        return text.to_string();
    }

    json.get("output")
        .and_then(|o| o.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("content")?.as_array())
                .flatten()
                .filter_map(|block| {
                    if block.get("type")?.as_str()? == "output_text" {
                        block.get("text")?.as_str()
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}
