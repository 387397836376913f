use std::process::ExitCode;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Exit code for a run that found no activity to build a persona from.
pub const EXIT_NO_CONTENT: u8 = 2;

/// Application-level error type.
/// `main` maps every variant to a stable kind code and a process exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Could not extract a username from profile URL '{0}'")]
    InvalidProfileUrl(String),

    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Prompt too large: ~{estimated_tokens} tokens exceeds the limit of {limit}")]
    PromptTooLarge { estimated_tokens: usize, limit: usize },

    #[error("Failed to write persona output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Stable, machine-readable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Usage(_) => "USAGE_ERROR",
            AppError::InvalidProfileUrl(_) => "INVALID_PROFILE_URL",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::PromptTooLarge { .. } => "PROMPT_TOO_LARGE",
            AppError::Output(_) => "OUTPUT_ERROR",
        }
    }

    /// 1 for anything the caller can fix on the command line or in the
    /// environment, 3 for failures once the run has reached the model or disk.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) | AppError::InvalidProfileUrl(_) | AppError::Config(_) => 1,
            AppError::Llm(_) | AppError::PromptTooLarge { .. } | AppError::Output(_) => 3,
        }
    }

    /// Logs the error and converts it into the process exit code.
    pub fn report(&self) -> ExitCode {
        match self {
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::Output(e) => tracing::error!("Output error: {e}"),
            AppError::Config(e) => tracing::error!("Configuration error: {e:?}"),
            _ => {}
        }
        eprintln!("error[{}]: {}", self.kind(), self);
        ExitCode::from(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_with_one() {
        assert_eq!(AppError::Usage("missing url".into()).exit_code(), 1);
        assert_eq!(
            AppError::InvalidProfileUrl("https://www.reddit.com".into()).exit_code(),
            1
        );
        assert_eq!(
            AppError::Config(anyhow::anyhow!("GROQ_API_KEY unset")).exit_code(),
            1
        );
    }

    #[test]
    fn test_upstream_failures_exit_with_three() {
        let llm = AppError::Llm(LlmError::EmptyContent);
        assert_eq!(llm.exit_code(), 3);
        assert_eq!(llm.kind(), "LLM_ERROR");

        let too_large = AppError::PromptTooLarge {
            estimated_tokens: 9000,
            limit: 6144,
        };
        assert_eq!(too_large.exit_code(), 3);
        assert_eq!(too_large.kind(), "PROMPT_TOO_LARGE");
        assert!(too_large.to_string().contains("9000"));
    }

    #[test]
    fn test_no_content_code_is_distinct() {
        assert_ne!(EXIT_NO_CONTENT, 0);
        assert_ne!(EXIT_NO_CONTENT, 1);
        assert_ne!(EXIT_NO_CONTENT, 3);
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.kind(), "OUTPUT_ERROR");
        assert_eq!(err.exit_code(), 3);
    }
}
