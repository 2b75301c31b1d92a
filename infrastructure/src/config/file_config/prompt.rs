//! Prompt configuration from TOML (`[prompt]` section)

use cupid_domain::{ConfigIssue, ConfigIssueCode, Language, Severity};
use serde::{Deserialize, Serialize};

/// Raw prompt configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Language for prompts and fallback texts: "id" or "en"
    pub language: String,
}

impl Default for FilePromptConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
        }
    }
}

impl FilePromptConfig {
    /// Parse the language, falling back to the default with a warning.
    pub fn parse_language(&self) -> (Language, Vec<ConfigIssue>) {
        match self.language.parse::<Language>() {
            Ok(lang) => (lang, Vec::new()),
            Err(_) => (
                Language::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "prompt.language".to_string(),
                        value: self.language.clone(),
                        valid_values: Language::all()
                            .iter()
                            .map(|l| l.code().to_string())
                            .collect(),
                    },
                    message: format!(
                        "prompt.language: unknown value '{}', falling back to '{}'",
                        self.language,
                        Language::default()
                    ),
                }],
            ),
        }
    }
}
