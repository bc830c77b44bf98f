//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "cryptotrade=info,warn";
const LOG_FILE_NAME: &str = "cryptotrade.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the rotated log files
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub log_file: String,
    /// Filter used when `RUST_LOG` does not parse
    pub log_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file: LOG_FILE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_dir: lookup("CRYPTOTRADE_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file: defaults.log_file,
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_level, "cryptotrade=info,warn");
        assert_eq!(config.log_path(), PathBuf::from("logs/cryptotrade.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_env_overrides() {
        let env = HashMap::from([
            ("CRYPTOTRADE_LOG_DIR", "/tmp/ct"),
            ("RUST_LOG", "cryptotrade=debug"),
        ]);
        let config = LogConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/ct/cryptotrade.log"));
        assert!(config.is_debug_enabled());
    }
}
