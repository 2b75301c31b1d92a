//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Score gauge and message for the terminal
    Text,
    /// Machine-readable JSON
    Json,
}

impl From<OutputFormat> for cupid_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => cupid_domain::OutputFormat::Text,
            OutputFormat::Json => cupid_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for cupid
#[derive(Parser, Debug)]
#[command(name = "cupid")]
#[command(author, version, about = "Love calculator - a compatibility score and a message from Gemini")]
#[command(long_about = r#"
Cupid scores how well two names match and asks Google Gemini for a short
message about the result. It can also write a love story for the couple.

Run without names to open the interactive form. Pass two names to get a
single reading on stdout.

The API key is taken from --api-key (and stored), then from the
environment variable named by generation.api_key_env (GEMINI_API_KEY by
default), then from the local store.

Configuration files are loaded from (in priority order):
1. CUPID_* environment variables
2. --config <path>     Explicit config file
3. ./cupid.toml        Project-level config
4. ~/.config/cupid/config.toml   Global config

Example:
  cupid
  cupid Romeo Juliet
  cupid Ani Budi --story -o json
  cupid Romeo Juliet --score-only
"#)]
pub struct Cli {
    /// First name (opens the interactive form when omitted)
    #[arg(requires = "name2")]
    pub name1: Option<String>,

    /// Second name
    pub name2: Option<String>,

    /// Also generate a love story
    #[arg(long, requires = "name1", conflicts_with = "score_only")]
    pub story: bool,

    /// Only compute the score, without contacting the service
    #[arg(long, requires = "name1")]
    pub score_only: bool,

    /// Output format for one-shot readings
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Gemini API key (saved for later runs unless --ephemeral)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Remove the stored API key and exit
    #[arg(long)]
    pub forget_key: bool,

    /// Keep the API key in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Language of prompts and UI (id, en)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Gemini model identifier
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Both names were given on the command line
    pub fn names(&self) -> Option<(&str, &str)> {
        match (&self.name1, &self.name2) {
            (Some(a), Some(b)) => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_names_means_interactive() {
        let cli = Cli::try_parse_from(["cupid"]).unwrap();
        assert!(cli.names().is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_one_shot_with_flags() {
        let cli =
            Cli::try_parse_from(["cupid", "Ani", "Budi", "--story", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.names(), Some(("Ani", "Budi")));
        assert!(cli.story);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_single_name_is_rejected() {
        assert!(Cli::try_parse_from(["cupid", "Ani"]).is_err());
    }

    #[test]
    fn test_story_needs_names() {
        assert!(Cli::try_parse_from(["cupid", "--story"]).is_err());
    }

    #[test]
    fn test_story_conflicts_with_score_only() {
        assert!(Cli::try_parse_from(["cupid", "A", "B", "--story", "--score-only"]).is_err());
    }
}
