//! Console output for readings

use crate::view::UiText;
use colored::{ColoredString, Colorize};
use cupid_domain::{CompatibilityResult, CompatibilityScore, CouplePair, Reading, ScoreTier, Story};

const GAUGE_WIDTH: usize = 20;

/// Formats readings for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Heading shown when the form opens
    pub fn banner(text: &UiText) -> String {
        let line = "=".repeat(44);
        format!(
            "{}\n{:^44}\n{:^44}\n{}",
            line.magenta(),
            format!("❤ {} ❤", text.title).bold(),
            text.tagline.dimmed(),
            line.magenta()
        )
    }

    /// Score gauge plus the generated message
    pub fn format_result(pair: &CouplePair, result: &CompatibilityResult, text: &UiText) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", text.score_heading.bold()));
        output.push_str(&format!("{}\n", pair.to_string().dimmed()));
        output.push_str(&format!(
            "{} {}\n\n",
            Self::gauge(result.score),
            Self::tinted(result.score, &result.score.to_string()).bold()
        ));
        output.push_str(&format!("\"{}\"\n", result.message.italic()));

        output
    }

    /// Score line without a message, for `--score-only`
    pub fn format_score(pair: &CouplePair, score: CompatibilityScore) -> String {
        format!(
            "{} {} {}",
            pair,
            Self::gauge(score),
            Self::tinted(score, &score.to_string()).bold()
        )
    }

    pub fn format_score_json(pair: &CouplePair, score: CompatibilityScore) -> String {
        let value = serde_json::json!({ "pair": pair, "score": score });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_story(story: &Story, text: &UiText) -> String {
        format!(
            "\n{}\n{}\n\n{}\n",
            text.story_heading.bold(),
            "-".repeat(text.story_heading.chars().count()),
            story
        )
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "!".red().bold(), message.red())
    }

    pub fn footer(text: &UiText) -> String {
        format!("\n{}\n", text.footer.dimmed())
    }

    pub fn format_json(reading: &Reading) -> String {
        serde_json::to_string_pretty(reading).unwrap_or_else(|_| "{}".to_string())
    }

    /// Fixed-width bar filled in proportion to the score
    pub fn gauge(score: CompatibilityScore) -> String {
        let filled = Self::filled_cells(score);
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(GAUGE_WIDTH - filled)
        );
        format!("[{}]", Self::tinted(score, &bar))
    }

    fn filled_cells(score: CompatibilityScore) -> usize {
        (usize::from(score.value()) * GAUGE_WIDTH).div_ceil(100)
    }

    fn tinted(score: CompatibilityScore, text: &str) -> ColoredString {
        match score.tier() {
            ScoreTier::Warm => text.truecolor(250, 204, 21),
            ScoreTier::Hot => text.truecolor(251, 146, 60),
            ScoreTier::Blazing => text.truecolor(244, 63, 94),
        }
    }
}
