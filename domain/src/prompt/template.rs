//! Prompt templates for the two generation requests

use super::language::Language;
use crate::core::score::CompatibilityScore;

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the short message shown next to the score
    pub fn love_message(
        language: Language,
        name1: &str,
        name2: &str,
        score: CompatibilityScore,
    ) -> String {
        let percentage = score.value();
        match language {
            Language::Indonesian => format!(
                "Kamu adalah seorang ahli ramal cinta yang jenaka dan puitis. Berdasarkan nama '{name1}' dan '{name2}' yang memiliki skor kecocokan {percentage}%, tuliskan sebuah pesan cinta yang singkat (maksimal 2 kalimat), unik, dan menyenangkan untuk mereka. Gunakan bahasa yang santai dan romantis."
            ),
            Language::English => format!(
                "You are a witty and poetic love fortune-teller. Based on the names '{name1}' and '{name2}', who have a compatibility score of {percentage}%, write a short (at most 2 sentences), unique and delightful love message for them. Keep the tone relaxed and romantic."
            ),
        }
    }

    /// Prompt for the longer story of how the couple met
    pub fn love_story(language: Language, name1: &str, name2: &str) -> String {
        match language {
            Language::Indonesian => format!(
                "Kamu adalah seorang pencerita yang kreatif dan romantis. Tuliskan sebuah cerita pendek yang imajinatif (sekitar 3-4 paragraf) tentang bagaimana dua orang bernama '{name1}' dan '{name2}' pertama kali bertemu dan akhirnya jatuh cinta. Buatlah cerita yang unik, mengharukan, dan sedikit jenaka."
            ),
            Language::English => format!(
                "You are a creative and romantic storyteller. Write an imaginative short story (about 3-4 paragraphs) about how two people named '{name1}' and '{name2}' first met and eventually fell in love. Make it unique, touching and a little funny."
            ),
        }
    }
}
