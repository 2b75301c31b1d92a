//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod output;
mod prompt;
mod storage;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use prompt::FilePromptConfig;
pub use storage::FileStorageConfig;

use cupid_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text service settings
    pub generation: FileGenerationConfig,
    /// Prompt language
    pub prompt: FilePromptConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Credential storage location
    pub storage: FileStorageConfig,
    /// Log file location
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.generation.parse_model().1);
        issues.extend(self.generation.validate_base_url());
        issues.extend(self.generation.validate_api_key_env());
        issues.extend(self.prompt.parse_language().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupid_domain::{Language, Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[generation]
model = "gemini-2.5-pro"
base_url = "http://localhost:9000"
api_key_env = "MY_KEY"

[prompt]
language = "en"

[output]
format = "json"
color = false

[storage]
path = "/tmp/cupid/storage.json"

[logging]
file = "/tmp/cupid/cupid.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.parse_model().0, Some(Model::Gemini25Pro));
        assert_eq!(config.generation.base_url, "http://localhost:9000");
        assert_eq!(config.generation.api_key_env, "MY_KEY");
        assert_eq!(config.prompt.parse_language().0, Language::English);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(
            config.storage.path.as_deref(),
            Some("/tmp/cupid/storage.json")
        );
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/cupid/cupid.log"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[prompt]
language = "id"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.parse_model().0, Some(Model::Gemini25Flash));
        assert!(config.output.color);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[generation]
model = ""
base_url = "ftp://example.com"
api_key_env = ""

[prompt]
language = "klingon"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
    }
}
