//! Text service configuration from TOML (`[generation]` section)

use crate::gemini::DEFAULT_BASE_URL;
use cupid_domain::{ConfigIssue, ConfigIssueCode, Model, Severity};
use serde::{Deserialize, Serialize};

/// Raw text service configuration
///
/// # Example
///
/// ```toml
/// [generation]
/// model = "gemini-2.5-flash"
/// base_url = "https://generativelanguage.googleapis.com"
/// api_key_env = "GEMINI_API_KEY"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model identifier sent to the service
    pub model: String,
    /// Base URL of the Gemini API (override for proxies or tests)
    pub base_url: String,
    /// Environment variable consulted for the API key
    pub api_key_env: String,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default().as_str().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

impl FileGenerationConfig {
    /// Parse the model, collecting an issue for an empty name.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match self.model.parse::<Model>() {
            Ok(model) => (Some(model), Vec::new()),
            Err(_) => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyField {
                        field: "generation.model".to_string(),
                    },
                    message: "generation.model: model name cannot be empty".to_string(),
                }],
            ),
        }
    }

    pub fn validate_base_url(&self) -> Option<ConfigIssue> {
        let url = self.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            return None;
        }
        Some(ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::InvalidUrl {
                field: "generation.base_url".to_string(),
                value: self.base_url.clone(),
            },
            message: format!(
                "generation.base_url: '{}' must start with http:// or https://",
                self.base_url
            ),
        })
    }

    pub fn validate_api_key_env(&self) -> Option<ConfigIssue> {
        if !self.api_key_env.trim().is_empty() {
            return None;
        }
        Some(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::EmptyField {
                field: "generation.api_key_env".to_string(),
            },
            message: "generation.api_key_env is empty; the API key will not be read from the environment"
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileGenerationConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert!(config.validate_base_url().is_none());
    }

    #[test]
    fn test_custom_model_is_accepted() {
        let config = FileGenerationConfig {
            model: "gemini-3-pro-preview".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Some(Model::Custom("gemini-3-pro-preview".to_string())));
        assert!(issues.is_empty());
    }
}
