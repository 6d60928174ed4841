use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial latency of a generate call.
    pub generation_delay: Duration,
    /// Longest raw text accepted by the generate endpoint, in characters.
    pub max_input_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generation_delay: Duration::from_millis(parse_env("GENERATION_DELAY_MS", 2000)?),
            max_input_chars: parse_env("MAX_INPUT_CHARS", 20_000)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            generation_delay: Duration::from_millis(2000),
            max_input_chars: 20_000,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u64 = parse_env("RESUMER_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("RESUMER_TEST_DELAY_MS", " 150 ");
        let value: u64 = parse_env("RESUMER_TEST_DELAY_MS", 0).unwrap();
        assert_eq!(value, 150);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUMER_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("RESUMER_TEST_BAD_PORT", 8080);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("RESUMER_TEST_BAD_PORT"));
    }
}
