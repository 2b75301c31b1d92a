//! UI copy in each supported language

use cupid_domain::Language;

/// Every fixed string the terminal form shows
#[derive(Debug)]
pub struct UiText {
    pub title: &'static str,
    pub tagline: &'static str,
    pub first_name: &'static str,
    pub second_name: &'static str,
    pub calculating: &'static str,
    pub score_heading: &'static str,
    pub story_button: &'static str,
    pub writing_story: &'static str,
    pub story_heading: &'static str,
    pub again: &'static str,
    pub key_heading: &'static str,
    pub key_intro: &'static str,
    pub key_prompt: &'static str,
    pub key_note: &'static str,
    pub key_saved_locally_failed: &'static str,
    pub missing_names: &'static str,
    pub key_missing: &'static str,
    pub key_empty: &'static str,
    pub calculate_failed: &'static str,
    pub story_failed: &'static str,
    pub footer: &'static str,
}

const INDONESIAN: UiText = UiText {
    title: "Kalkulator Cinta",
    tagline: "Cari tahu seberapa cocok kamu dan dia!",
    first_name: "Nama Kamu",
    second_name: "Nama Pasangan",
    calculating: "Meramal...",
    score_heading: "Tingkat Kecocokan Kalian",
    story_button: "Buatkan Cerita Cinta Kami?",
    writing_story: "Menulis kisah cinta...",
    story_heading: "Kisah Cinta Kalian",
    again: "Hitung lagi?",
    key_heading: "Kunci API Gemini",
    key_intro: "Untuk menggunakan kalkulator cinta ini, kamu perlu memasukkan Kunci API Google AI Studio.",
    key_prompt: "Masukkan Kunci API di sini",
    key_note: "Kunci API-mu disimpan di perangkat ini saja. Dapatkan Kunci API gratis: https://aistudio.google.com/app/apikey",
    key_saved_locally_failed: "Kunci API dipakai untuk sesi ini, tapi gagal disimpan.",
    missing_names: "Mohon masukkan kedua nama.",
    key_missing: "Kunci API belum diatur. Mohon masukkan kunci.",
    key_empty: "Kunci API tidak boleh kosong.",
    calculate_failed: "Oops! Ada sedikit masalah dengan ramalan cinta. Coba lagi nanti ya.",
    story_failed: "Maaf, kisah cinta kalian terlalu epic untuk ditulis saat ini. Coba sesaat lagi.",
    footer: "Dibuat dengan ❤ oleh VANDOM",
};

const ENGLISH: UiText = UiText {
    title: "Love Calculator",
    tagline: "Find out how well you two match!",
    first_name: "Your name",
    second_name: "Your partner's name",
    calculating: "Reading the stars...",
    score_heading: "Your Compatibility",
    story_button: "Write our love story?",
    writing_story: "Writing your love story...",
    story_heading: "Your Love Story",
    again: "Calculate again?",
    key_heading: "Gemini API Key",
    key_intro: "To use this love calculator you need a Google AI Studio API key.",
    key_prompt: "Enter your API key",
    key_note: "Your API key is only stored on this device. Get a free key: https://aistudio.google.com/app/apikey",
    key_saved_locally_failed: "The API key is used for this session but could not be saved.",
    missing_names: "Please enter both names.",
    key_missing: "No API key set yet. Please enter one.",
    key_empty: "The API key must not be empty.",
    calculate_failed: "Oops! Something went wrong with the love reading. Please try again later.",
    story_failed: "Sorry, your love story is too epic to write right now. Try again in a moment.",
    footer: "Made with ❤ by VANDOM",
};

impl UiText {
    pub fn for_language(language: Language) -> &'static UiText {
        match language {
            Language::Indonesian => &INDONESIAN,
            Language::English => &ENGLISH,
        }
    }
}
