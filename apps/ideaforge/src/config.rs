use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};

/// Root of every file the tool reads or writes, relative to the working directory.
pub const OUTPUT_DIR: &str = "output_plan";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
pub const DEFAULT_MAX_TOKENS: u32 = 900;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(2);

/// How landing pages are produced at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingMode {
    /// One page built from the first catalog response.
    Single,
    /// One page per idea parsed from the first response, plus a master index.
    PerIdea,
}

impl FromStr for LandingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(LandingMode::Single),
            "per_idea" | "per-idea" => Ok(LandingMode::PerIdea),
            other => bail!("LANDING_MODE must be 'single' or 'per_idea', got '{other}'"),
        }
    }
}

/// Retry budget for a single generation call.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Delay slept after failed attempt `attempt` (1-based): `base * 2^(attempt-1)`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay * (1u32 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

/// Run configuration. Built once in `main` and passed into the orchestrator.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub prompts_path: PathBuf,
    pub responses_dir: PathBuf,
    pub summary_path: PathBuf,
    pub landing_page_path: PathBuf,
    pub ideas_dir: PathBuf,
    pub index_page_path: PathBuf,
    /// `None` forces mock generation for every entry.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub retry: RetryPolicy,
    pub landing_mode: LandingMode,
    pub rust_log: String,
}

impl Config {
    /// Builds a config with every path rooted at `output_dir` and no credential.
    pub fn for_output_dir(output_dir: impl AsRef<Path>) -> Self {
        let output_dir = output_dir.as_ref().to_path_buf();
        Config {
            prompts_path: output_dir.join("prompts.json"),
            responses_dir: output_dir.join("responses"),
            summary_path: output_dir.join("responses_summary.md"),
            landing_page_path: output_dir.join("landing_page_top_idea.html"),
            ideas_dir: output_dir.join("ideas"),
            index_page_path: output_dir.join("landing_page_index.html"),
            output_dir,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            retry: RetryPolicy::default(),
            landing_mode: LandingMode::Single,
            rust_log: "info".to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::for_output_dir(OUTPUT_DIR);
        config.api_key = credential(lookup("ANTHROPIC_API_KEY"));
        config.model = lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        config.landing_mode = match lookup("LANDING_MODE") {
            Some(mode) => mode.parse()?,
            None => LandingMode::Single,
        };
        config.rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());
        Ok(config)
    }
}

/// An empty or whitespace-only key counts as unset.
fn credential(raw: Option<String>) -> Option<String> {
    raw.filter(|k| !k.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted_at_output_dir() {
        let config = Config::for_output_dir("/tmp/run");
        assert_eq!(config.prompts_path, PathBuf::from("/tmp/run/prompts.json"));
        assert_eq!(config.responses_dir, PathBuf::from("/tmp/run/responses"));
        assert_eq!(
            config.summary_path,
            PathBuf::from("/tmp/run/responses_summary.md")
        );
        assert_eq!(
            config.index_page_path,
            PathBuf::from("/tmp/run/landing_page_index.html")
        );
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(2));
        assert_eq!(policy.delay_after(2), Duration::from_secs(4));
        assert_eq!(policy.delay_after(3), Duration::from_secs(8));
    }

    #[test]
    fn test_landing_mode_parsing() {
        assert_eq!("single".parse::<LandingMode>().unwrap(), LandingMode::Single);
        assert_eq!(
            "PER_IDEA".parse::<LandingMode>().unwrap(),
            LandingMode::PerIdea
        );
        assert!("grid".parse::<LandingMode>().is_err());
    }

    #[test]
    fn test_blank_credential_counts_as_unset() {
        assert_eq!(credential(None), None);
        assert_eq!(credential(Some(String::new())), None);
        assert_eq!(credential(Some("   ".to_string())), None);
        assert_eq!(credential(Some("sk-x".to_string())), Some("sk-x".to_string()));
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_lookup_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.landing_mode, LandingMode::Single);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.output_dir, PathBuf::from(OUTPUT_DIR));
    }

    #[test]
    fn test_lookup_reads_every_variable() {
        let vars = [
            ("ANTHROPIC_API_KEY", "sk-x"),
            ("LLM_MODEL", "claude-haiku-4-5"),
            ("LANDING_MODE", "per_idea"),
            ("RUST_LOG", "debug"),
        ];
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-x"));
        assert_eq!(config.model, "claude-haiku-4-5");
        assert_eq!(config.landing_mode, LandingMode::PerIdea);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_lookup_treats_blank_key_as_mock_and_rejects_bad_mode() {
        let blank = [("ANTHROPIC_API_KEY", "   ")];
        assert!(Config::from_lookup(lookup_from(&blank)).unwrap().api_key.is_none());

        let bad_mode = [("LANDING_MODE", "grid")];
        assert!(Config::from_lookup(lookup_from(&bad_mode)).is_err());
    }
}
