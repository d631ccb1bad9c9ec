use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::{info, warn};

mod cli;

use cli::{Cli, OutputFormat};
use ytweet::RunOptions;
use ytweet::config::{API_KEY_VAR, BASE_URL_VAR, Config};
use ytweet::summarize::{Model, OpenAiClient};
use ytweet::youtube::YouTubeCaptions;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytweet.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytweet")
        .join("logs")
}

fn build_after_help() -> String {
    let log_path = log_dir().join("ytweet.log");
    let config_path = ytweet::config::config_path();

    format!(
        "\nENVIRONMENT:\n  OPENAI_API_KEY    required\n  OPENAI_BASE_URL   optional API base override\n\nConfig is read from: {}\nLogs are written to: {}",
        config_path.display(),
        log_path.display()
    )
}

fn read_reference(cli: &Cli) -> Result<String> {
    if let Some(ref url) = cli.url {
        return Ok(url.clone());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }

    bail!("no URL or video ID provided\n\nUsage: ytweet <URL>\n       echo <URL> | ytweet");
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring config: {e}");
        Config::default()
    });

    // Apply config defaults (CLI flags take priority)
    let model = match (cli.model, config.default_model.as_deref()) {
        (Some(m), _) => m,
        (None, Some(name)) => name.parse::<Model>().unwrap_or_else(|e| {
            warn!("{e}; falling back to {}", Model::default());
            Model::default()
        }),
        (None, None) => Model::default(),
    };
    let mut options = RunOptions {
        model,
        ..RunOptions::default()
    };
    if !cli.langs.is_empty() {
        options.languages = cli.langs.clone();
    } else if let Some(langs) = config.languages.clone().filter(|l| !l.is_empty()) {
        options.languages = langs;
    }
    if let Some(chars) = config.preview_chars {
        options.preview_chars = chars;
    }

    // Credential is captured once per run and validated before any network call
    let credential = std::env::var(API_KEY_VAR).ok();
    let reference = read_reference(&cli)?;

    let client = reqwest::Client::new();
    let captions = YouTubeCaptions::new(client.clone());
    let base_url = std::env::var(BASE_URL_VAR).ok();

    let out = ytweet::run(credential, &reference, &options, &captions, |api_key| {
        let completion = OpenAiClient::new(client, api_key);
        match base_url {
            Some(url) => completion.with_base_url(url),
            None => completion,
        }
    })
    .await?;

    if cli.verbose {
        let t = &out.transcript;
        eprintln!(
            "Video: {} ({})\nLanguage: {}{}\nSegments: {}\nModel: {}",
            t.title,
            t.video_id,
            t.language,
            if t.is_generated { " (auto-generated)" } else { "" },
            t.segments.len(),
            options.model,
        );
    }

    if !out.tweets.is_complete() {
        eprintln!("warning: the model did not return the expected JSON or some posts are missing; try again");
    }

    match cli.format {
        OutputFormat::Text => {
            if !cli.no_preview {
                println!("--- Transcript (preview) ---\n{}\n", out.preview);
            }
            println!("--- Tweets ---\n{}", ytweet::output::render_tweets(&out.tweets));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                ytweet::output::render_json(out.video_id.as_str(), &out.transcript.language, out.preview, &out.tweets)
            );
        }
    }

    Ok(())
}
