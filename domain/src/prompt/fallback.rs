//! Canned texts shown when the text service fails

use super::RequestKind;
use super::language::Language;

/// Why a fallback is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The service rejected the credential
    InvalidCredential,
    /// Anything else: network, server error, malformed reply
    Unavailable,
}

/// Fallback text lookup
pub struct Fallback;

impl Fallback {
    pub fn text(language: Language, kind: RequestKind, reason: FallbackReason) -> &'static str {
        use FallbackReason::*;
        use RequestKind::*;

        match (language, kind, reason) {
            (Language::Indonesian, Message, InvalidCredential) => {
                "Kunci API Gemini-mu sepertinya tidak valid. Periksa kembali ya!"
            }
            (Language::Indonesian, Message, Unavailable) => {
                "Cinta kalian begitu besar, bahkan AI pun tak sanggup menggambarkannya! Coba lagi nanti ya."
            }
            (Language::Indonesian, Story, InvalidCredential) => {
                "Kisah cinta kalian tak bisa ditulis karena kunci API-nya salah. Yuk, coba perbaiki dulu."
            }
            (Language::Indonesian, Story, Unavailable) => {
                "Sepertinya tinta takdir sedang habis untuk menuliskan kisah cinta kalian. Sungguh sebuah romansa yang luar biasa! Coba lagi sesaat lagi."
            }
            (Language::English, Message, InvalidCredential) => {
                "Your Gemini API key doesn't seem to be valid. Please double-check it!"
            }
            (Language::English, Message, Unavailable) => {
                "Your love is so big that even the AI can't put it into words! Try again later."
            }
            (Language::English, Story, InvalidCredential) => {
                "Your love story can't be written because the API key is wrong. Let's fix that first."
            }
            (Language::English, Story, Unavailable) => {
                "The ink of destiny seems to have run dry for your love story. What a romance! Try again in a moment."
            }
        }
    }
}
