//! Output writer — persists the persona document under the output directory.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

/// Default directory for persona files, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "sample_output";

/// `<dir>/user_persona_<username>_<YYYYMMDD_HHMM>.txt`
///
/// Minute precision: a second run for the same user within the same minute
/// overwrites the first.
pub fn persona_path(output_dir: &Path, username: &str, timestamp: NaiveDateTime) -> PathBuf {
    output_dir.join(format!(
        "user_persona_{username}_{}.txt",
        timestamp.format("%Y%m%d_%H%M")
    ))
}

/// Writes `content` verbatim, creating the directory if needed.
pub fn save_persona(
    output_dir: &Path,
    username: &str,
    content: &str,
    timestamp: NaiveDateTime,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = persona_path(output_dir, username, timestamp);
    std::fs::write(&path, content)?;
    info!("Persona written to {}", path.display());
    Ok(path)
}
