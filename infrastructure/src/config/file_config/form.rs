//! Interactive form configuration from TOML (`[form]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw interactive form configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

impl FileFormConfig {
    /// History file path with a leading `~/` expanded to the home directory
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path_unset() {
        assert!(FileFormConfig::default().history_path().is_none());
    }

    #[test]
    fn test_history_path_plain() {
        let config = FileFormConfig {
            history_file: Some("form_history.txt".to_string()),
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("form_history.txt")));
    }

    #[test]
    fn test_history_path_expands_home() {
        let config = FileFormConfig {
            history_file: Some("~/.risk_history".to_string()),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), Some(home.join(".risk_history")));
        }
    }
}
