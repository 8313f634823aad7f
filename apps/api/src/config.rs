use anyhow::{bail, Context, Result};

use crate::scraper::CacheWritePolicy;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory the frontend uploads resumes into; the most recently
    /// modified file in it is the active resume.
    pub upload_dir: String,
    /// JSON file holding the last successful vacancy snapshot.
    pub cache_file: String,
    pub cache_write_policy: CacheWritePolicy,
    /// Per-request timeout for job board fetches, in seconds.
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploaded_files".to_string()),
            cache_file: std::env::var("CACHE_FILE")
                .unwrap_or_else(|_| "data/vacancy_cache/vacancies.json".to_string()),
            cache_write_policy: parse_cache_write_policy(
                &std::env::var("CACHE_WRITE_POLICY").unwrap_or_else(|_| "always".to_string()),
            )?,
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("FETCH_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

fn parse_cache_write_policy(value: &str) -> Result<CacheWritePolicy> {
    match value {
        "always" => Ok(CacheWritePolicy::Always),
        "non-empty" => Ok(CacheWritePolicy::NonEmptyOnly),
        other => bail!("CACHE_WRITE_POLICY must be 'always' or 'non-empty', got '{other}'"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_write_policy_parses_known_values() {
        assert_eq!(
            parse_cache_write_policy("always").unwrap(),
            CacheWritePolicy::Always
        );
        assert_eq!(
            parse_cache_write_policy("non-empty").unwrap(),
            CacheWritePolicy::NonEmptyOnly
        );
    }

    #[test]
    fn test_cache_write_policy_rejects_unknown_values() {
        assert!(parse_cache_write_policy("sometimes").is_err());
    }
}
