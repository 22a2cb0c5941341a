//! Store and logging configuration.
//!
//! # Responsibility
//! - Hold tunables for derived-field limits and id assignment.
//! - Resolve logging settings from environment-style key lookups.

use crate::logging::default_log_level;
use crate::model::derive::{DEFAULT_EXCERPT_MAX_CHARS, DEFAULT_TITLE_MAX_CHARS};
use std::path::PathBuf;

/// Environment key for the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "MEMNOTE_LOG_LEVEL";
/// Environment key for the absolute log directory.
pub const LOG_DIR_ENV: &str = "MEMNOTE_LOG_DIR";

/// How the store assigns note ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Creation time in epoch milliseconds, bumped past the previous id when
    /// two notes land in the same millisecond.
    #[default]
    MonotonicTimestamp,
    /// Plain counter starting at 1.
    Sequential,
}

/// Tunables for a `NotesStore` instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Max first-line characters kept in derived titles.
    pub title_max_chars: usize,
    /// Max characters kept in derived excerpts.
    pub excerpt_max_chars: usize,
    pub id_strategy: IdStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            excerpt_max_chars: DEFAULT_EXCERPT_MAX_CHARS,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_title_max_chars(mut self, max_chars: usize) -> Self {
        self.title_max_chars = max_chars;
        self
    }

    pub fn with_excerpt_max_chars(mut self, max_chars: usize) -> Self {
        self.excerpt_max_chars = max_chars;
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}

/// File logging settings consumed by `logging::init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Resolves settings from the process environment.
    ///
    /// Returns `None` when no log directory is configured, meaning logging
    /// stays disabled.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings from an arbitrary key lookup.
    ///
    /// A blank level falls back to `default_log_level()`.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_dir = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty())?;
        let level = lookup(LOG_LEVEL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        Some(Self::new(level, log_dir.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::{IdStrategy, LoggingConfig, StoreConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn store_config_defaults_match_derivation_limits() {
        let config = StoreConfig::default();
        assert_eq!(config.title_max_chars, 50);
        assert_eq!(config.excerpt_max_chars, 100);
        assert_eq!(config.id_strategy, IdStrategy::MonotonicTimestamp);
    }

    #[test]
    fn logging_config_requires_log_dir() {
        let empty: HashMap<&str, String> = HashMap::new();
        assert_eq!(
            LoggingConfig::from_lookup(|key| empty.get(key).cloned()),
            None
        );

        let blank = HashMap::from([(LOG_DIR_ENV, "   ".to_string())]);
        assert_eq!(
            LoggingConfig::from_lookup(|key| blank.get(key).cloned()),
            None
        );
    }

    #[test]
    fn logging_config_falls_back_to_build_default_level() {
        let vars = HashMap::from([(LOG_DIR_ENV, "/tmp/memnote-logs".to_string())]);
        let config = LoggingConfig::from_lookup(|key| vars.get(key).cloned())
            .expect("log dir is configured");
        assert_eq!(config.level, default_log_level());
        assert_eq!(config.log_dir, PathBuf::from("/tmp/memnote-logs"));
    }

    #[test]
    fn logging_config_reads_explicit_level() {
        let vars = HashMap::from([
            (LOG_DIR_ENV, "/tmp/memnote-logs".to_string()),
            (LOG_LEVEL_ENV, "warn".to_string()),
        ]);
        let config = LoggingConfig::from_lookup(|key| vars.get(key).cloned())
            .expect("log dir is configured");
        assert_eq!(config.level, "warn");
    }
}
