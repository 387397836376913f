//! Persona pipeline — orchestrates one run for one user.
//!
//! Flow: fetch_user_activity → (stop if empty) → build_prompt →
//!       CompletionService::complete → save_persona.
//!
//! Fetch failures are contained by the fetcher. Everything after the fetch
//! (prompt budget, completion call, file write) is fatal and propagates.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::activity::fetcher::{fetch_user_activity, ActivitySource, CategoryFetch, FetchStatus};
use crate::activity::ActivityKind;
use crate::errors::AppError;
use crate::llm_client::CompletionService;
use crate::output::save_persona;
use crate::persona::builder::build_prompt;
use crate::persona::prompts::PERSONA_SYSTEM;

/// Per-run knobs, resolved from the CLI and environment by `main`.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub max_items: usize,
    pub max_prompt_tokens: usize,
    pub output_dir: PathBuf,
}

/// Terminal state of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written(PathBuf),
    /// Neither posts nor comments were found; nothing was generated or written.
    NoContent,
}

/// Runs the full pipeline for `username`.
///
/// `now` is read once, right before the output file is written.
pub async fn run_persona_pipeline<F>(
    source: &dyn ActivitySource,
    llm: &dyn CompletionService,
    settings: &PipelineSettings,
    username: &str,
    now: F,
) -> Result<RunOutcome, AppError>
where
    F: FnOnce() -> NaiveDateTime,
{
    println!("[🔍] Fetching data for u/{username}...");
    let activity = fetch_user_activity(source, username, settings.max_items).await;
    log_fetch_status(ActivityKind::Post, &activity.posts);
    log_fetch_status(ActivityKind::Comment, &activity.comments);

    if activity.is_empty() {
        info!("No activity found for u/{username}; skipping generation");
        return Ok(RunOutcome::NoContent);
    }

    let prompt = build_prompt(
        username,
        &activity.posts.blocks(),
        &activity.comments.blocks(),
        settings.max_prompt_tokens,
    )?;

    println!("[🤖] Generating persona via Groq...");
    info!(
        "Requesting persona for u/{username} (~{} prompt tokens)",
        prompt.estimated_tokens
    );
    let persona = llm.complete(PERSONA_SYSTEM, &prompt.text).await?;

    let path = save_persona(&settings.output_dir, username, &persona, now())?;
    println!("[✅] Persona saved: {}", path.display());
    Ok(RunOutcome::Written(path))
}

fn log_fetch_status(kind: ActivityKind, fetch: &CategoryFetch) {
    match &fetch.status {
        FetchStatus::Complete => {}
        FetchStatus::Partial(e) => warn!(
            "Continuing with {} {} collected before the upstream error: {e}",
            fetch.items.len(),
            kind.label()
        ),
        FetchStatus::Failed(e) => warn!("Continuing without {}: {e}", kind.label()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
