use thiserror::Error;

/// The input could not be resolved to a video ID
#[derive(Debug, Error)]
#[error(
    "could not extract video ID from: {input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/shorts/ID\n  <11-character video ID>"
)]
pub struct InvalidReference {
    pub input: String,
}

/// The environment or config file is not usable
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{0} environment variable not set (required for tweet generation)")]
    MissingCredential(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Why a transcript could not be retrieved
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("YouTube is asking for cookie consent; cannot fetch the watch page")]
    ConsentRequired,
    #[error("could not extract InnerTube API key from watch page")]
    MissingApiKey,
    #[error("the video is no longer available")]
    VideoUnavailable,
    #[error("the video is age restricted")]
    AgeRestricted,
    #[error("YouTube is blocking requests from this IP")]
    RequestBlocked,
    #[error("the video is unplayable: {reason}")]
    VideoUnplayable { reason: String },
    #[error("subtitles are disabled for this video")]
    TranscriptsDisabled,
    #[error("no transcript found for any of [{requested}] (available: [{available}])")]
    NoTranscriptFound { requested: String, available: String },
    #[error("error parsing caption XML: {0}")]
    Xml(String),
}

/// Terminal transcript failure for a video
#[derive(Debug, Error)]
#[error("could not retrieve transcript for {video_id}: {source}")]
pub struct TranscriptUnavailable {
    pub video_id: String,
    #[source]
    pub source: TranscriptError,
}

/// The completion service could not be reached or rejected the request
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("OpenAI API returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Terminal failure of a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidReference(#[from] InvalidReference),
    #[error(transparent)]
    TranscriptUnavailable(#[from] TranscriptUnavailable),
    #[error("tweet generation failed for {video_id}: {source}")]
    Completion {
        video_id: String,
        #[source]
        source: CompletionError,
    },
}
