//! Configuration data model.
//!
//! Everything derives `Serialize`/`Deserialize` for TOML persistence, and
//! every field has a default so a missing or partial file still works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_journal_dir")]
    pub dir: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            dir: default_journal_dir(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_journal_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("coinpurse")
        .join("journal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.journal.enabled);
        assert!(config.journal.dir.ends_with("coinpurse/journal"));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[journal]\nenabled = false\n").unwrap();
        assert!(!config.journal.enabled);
        assert!(config.journal.dir.ends_with("coinpurse/journal"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig {
            journal: JournalConfig {
                enabled: false,
                dir: PathBuf::from("/tmp/journal"),
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.journal.enabled, config.journal.enabled);
        assert_eq!(back.journal.dir, config.journal.dir);
    }
}
