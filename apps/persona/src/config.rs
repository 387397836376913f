use anyhow::{Context, Result};

/// Default prompt budget. Leaves room for the completion inside the
/// 8192-token context window of the generation model.
pub const DEFAULT_MAX_PROMPT_TOKENS: usize = 6144;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub reddit: RedditCredentials,
    pub groq_api_key: String,
    pub max_prompt_tokens: usize,
    pub rust_log: String,
}

/// Credentials for Reddit's application-only OAuth flow.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            reddit: RedditCredentials {
                client_id: require_env("REDDIT_CLIENT_ID")?,
                client_secret: require_env("REDDIT_CLIENT_SECRET")?,
                user_agent: require_env("REDDIT_USER_AGENT")?,
            },
            groq_api_key: require_env("GROQ_API_KEY")?,
            max_prompt_tokens: match std::env::var("PERSONA_MAX_PROMPT_TOKENS") {
                Ok(raw) => parse_token_limit(&raw)?,
                Err(_) => DEFAULT_MAX_PROMPT_TOKENS,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_token_limit(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .context("PERSONA_MAX_PROMPT_TOKENS must be a positive integer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_limit_accepts_integer() {
        assert_eq!(parse_token_limit(" 4096 ").unwrap(), 4096);
    }

    #[test]
    fn test_parse_token_limit_rejects_garbage() {
        let err = parse_token_limit("lots").unwrap_err();
        assert!(err.to_string().contains("PERSONA_MAX_PROMPT_TOKENS"));
    }

    #[test]
    fn test_require_env_names_missing_variable() {
        let err = require_env("PERSONA_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(err
            .to_string()
            .contains("'PERSONA_TEST_SURELY_UNSET_VARIABLE'"));
    }
}
