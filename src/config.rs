use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

/// Runtime configuration, read once from the environment at startup.
///
/// Environment variables:
/// - `GEMINI_API_KEY`: generation API key (no default; chat returns 500 without it)
/// - `GITHUB_TOKEN`: optional GitHub token for higher rate limits
/// - `GITHUB_USERNAME`: profile to describe (default: hridyeshh)
/// - `GITHUB_API_URL`, `GEMINI_API_URL`, `GEMINI_MODEL`: upstream endpoints
/// - `MAX_QUERY_LENGTH` (500), `HISTORY_LIMIT` (6), `CACHE_TTL_SECS` (300)
/// - `MAX_TOKENS` (300), `TEMPERATURE` (0.7), `TOP_P` (0.9), `TOP_K` (40)
/// - `HOST` (127.0.0.1), `PORT` (8000), `STATIC_DIR` (./static)
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub github_username: String,
    pub max_query_length: usize,
    pub history_limit: usize,
    pub cache_ttl: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_api_url: "https://generativelanguage.googleapis.com".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            github_token: None,
            github_api_url: "https://api.github.com".to_string(),
            github_username: "hridyeshh".to_string(),
            max_query_length: 500,
            history_limit: 6,
            cache_ttl: Duration::from_secs(300),
            max_tokens: 300,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            gemini_api_key: secret("GEMINI_API_KEY"),
            gemini_api_url: env::var("GEMINI_API_URL").unwrap_or(defaults.gemini_api_url),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            github_token: secret("GITHUB_TOKEN"),
            github_api_url: env::var("GITHUB_API_URL").unwrap_or(defaults.github_api_url),
            github_username: env::var("GITHUB_USERNAME").unwrap_or(defaults.github_username),
            max_query_length: parsed("MAX_QUERY_LENGTH", defaults.max_query_length),
            history_limit: parsed("HISTORY_LIMIT", defaults.history_limit),
            cache_ttl: Duration::from_secs(parsed("CACHE_TTL_SECS", defaults.cache_ttl.as_secs())),
            max_tokens: parsed("MAX_TOKENS", defaults.max_tokens),
            temperature: parsed("TEMPERATURE", defaults.temperature),
            top_p: parsed("TOP_P", defaults.top_p),
            top_k: parsed("TOP_K", defaults.top_k),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed("PORT", defaults.port),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        };

        if config.gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; chat requests will fail with 500");
        }
        info!(
            "Using model {} (max_tokens: {}, history_limit: {}, cache_ttl: {}s)",
            config.gemini_model,
            config.max_tokens,
            config.history_limit,
            config.cache_ttl.as_secs()
        );

        config
    }
}

fn secret(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_query_length, 500);
        assert_eq!(config.history_limit, 6);
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn unparsable_values_fall_back_to_default() {
        env::set_var("PORTFOLIO_CHAT_TEST_NUMBER", "not-a-number");
        assert_eq!(parsed("PORTFOLIO_CHAT_TEST_NUMBER", 42usize), 42);
        env::set_var("PORTFOLIO_CHAT_TEST_NUMBER", "17");
        assert_eq!(parsed("PORTFOLIO_CHAT_TEST_NUMBER", 42usize), 17);
        env::remove_var("PORTFOLIO_CHAT_TEST_NUMBER");
    }

    #[test]
    fn blank_secrets_are_treated_as_missing() {
        env::set_var("PORTFOLIO_CHAT_TEST_SECRET", "   ");
        assert!(secret("PORTFOLIO_CHAT_TEST_SECRET").is_none());
        env::remove_var("PORTFOLIO_CHAT_TEST_SECRET");
    }
}
