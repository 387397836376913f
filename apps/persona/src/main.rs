mod activity;
mod config;
mod errors;
mod identity;
mod llm_client;
mod output;
mod persona;
mod pipeline;
mod reddit_client;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::activity::fetcher::MAX_ITEMS;
use crate::config::Config;
use crate::errors::{AppError, EXIT_NO_CONTENT};
use crate::identity::extract_username;
use crate::llm_client::LlmClient;
use crate::output::DEFAULT_OUTPUT_DIR;
use crate::pipeline::{run_persona_pipeline, PipelineSettings, RunOutcome};
use crate::reddit_client::RedditClient;

/// Builds a UX-style persona document from a Reddit user's recent activity.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Profile URL, e.g. https://www.reddit.com/user/kojied/
    profile_url: String,

    /// Directory the persona file is written to
    #[arg(long, env = "PERSONA_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Maximum posts and maximum comments to fetch
    #[arg(
        long,
        env = "PERSONA_MAX_ITEMS",
        default_value_t = MAX_ITEMS,
        value_parser = clap::value_parser!(u8).range(1..=100).map(usize::from)
    )]
    max_items: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return AppError::Usage("expected exactly one profile URL".to_string()).report();
        }
    };

    match run(args).await {
        Ok(RunOutcome::Written(_)) => ExitCode::SUCCESS,
        Ok(RunOutcome::NoContent) => {
            println!("[-] No content found.");
            ExitCode::from(EXIT_NO_CONTENT)
        }
        Err(e) => e.report(),
    }
}

async fn run(args: Args) -> Result<RunOutcome, AppError> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging on stderr; stdout carries progress lines
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting persona v{}", env!("CARGO_PKG_VERSION"));

    let username = extract_username(&args.profile_url)
        .ok_or_else(|| AppError::InvalidProfileUrl(args.profile_url.clone()))?;

    let reddit = RedditClient::new(config.reddit.clone());
    let llm = LlmClient::new(config.groq_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let settings = PipelineSettings {
        max_items: args.max_items,
        max_prompt_tokens: config.max_prompt_tokens,
        output_dir: args.output_dir,
    };

    run_persona_pipeline(&reddit, &llm, &settings, &username, || {
        chrono::Local::now().naive_local()
    })
    .await
}
