use clap::Parser;

use ytweet::summarize::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytweet",
    about = "Turn a YouTube video into three shareable posts",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL or video ID (reads the first line of stdin if omitted)
    pub url: Option<String>,

    /// LLM model used to write the posts [default: gpt-4.1-mini]
    #[arg(short, long, value_enum)]
    pub model: Option<Model>,

    /// Preferred caption language, in priority order (repeatable) [default: tr, tr-TR, en]
    #[arg(short, long = "lang")]
    pub langs: Vec<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Don't print the transcript preview
    #[arg(long)]
    pub no_preview: bool,

    /// Show video, caption track and model metadata
    #[arg(short, long)]
    pub verbose: bool,
}
