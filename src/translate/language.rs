//! Language codes: normalization and the catalog of supported languages.
//!
//! Callers may hand us locale-style codes such as `"hi-IN"` or `"en-US"`
//! (what browser speech APIs report).  The remote providers only understand
//! bare ISO-639-1 codes, so [`normalize_code`] strips the regional subtag.

/// Source-language sentinel meaning "let the provider detect it".
pub const AUTO: &str = "auto";

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// One entry of the language catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Bare ISO-639-1 code (e.g. `"hi"`).
    pub code: &'static str,
    /// Display name, English first then the native name.
    pub name: &'static str,
}

impl Language {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

// ---------------------------------------------------------------------------
// Static catalog
// ---------------------------------------------------------------------------

pub static SUPPORTED_LANGUAGES: &[Language] = &[
    Language::new("hi", "Hindi - हिंदी"),
    Language::new("en", "English"),
    Language::new("es", "Spanish - Español"),
    Language::new("fr", "French - Français"),
    Language::new("de", "German - Deutsch"),
    Language::new("it", "Italian - Italiano"),
    Language::new("pt", "Portuguese - Português"),
    Language::new("ru", "Russian - Русский"),
    Language::new("ja", "Japanese - 日本語"),
    Language::new("ko", "Korean - 한국어"),
    Language::new("zh", "Chinese - 中文"),
    Language::new("ar", "Arabic - العربية"),
    Language::new("bn", "Bengali - বাংলা"),
    Language::new("ta", "Tamil - தமிழ்"),
    Language::new("te", "Telugu - తెలుగు"),
    Language::new("mr", "Marathi - मराठी"),
    Language::new("gu", "Gujarati - ગુજરાતી"),
    Language::new("ur", "Urdu - اردو"),
    Language::new("pa", "Punjabi - ਪੰਜਾਬੀ"),
    Language::new("kn", "Kannada - ಕನ್ನಡ"),
    Language::new("ml", "Malayalam - മലയാളം"),
    Language::new("or", "Odia - ଓଡିଆ"),
    Language::new("as", "Assamese - অসমীয়া"),
    Language::new("ne", "Nepali - नेपाली"),
    Language::new("si", "Sinhala - සිංහල"),
    Language::new("th", "Thai - ไทย"),
    Language::new("vi", "Vietnamese - Tiếng Việt"),
    Language::new("id", "Indonesian - Bahasa Indonesia"),
    Language::new("ms", "Malay - Bahasa Melayu"),
    Language::new("tr", "Turkish - Türkçe"),
    Language::new("pl", "Polish - Polski"),
    Language::new("nl", "Dutch - Nederlands"),
    Language::new("sv", "Swedish - Svenska"),
    Language::new("da", "Danish - Dansk"),
    Language::new("no", "Norwegian - Norsk"),
    Language::new("fi", "Finnish - Suomi"),
    Language::new("el", "Greek - Ελληνικά"),
    Language::new("he", "Hebrew - עברית"),
    Language::new("fa", "Persian - فارسی"),
    Language::new("sw", "Swahili - Kiswahili"),
    Language::new("af", "Afrikaans"),
    Language::new("zu", "Zulu - isiZulu"),
    Language::new("xh", "Xhosa - isiXhosa"),
    Language::new("hu", "Hungarian - Magyar"),
    Language::new("cs", "Czech - Čeština"),
    Language::new("sk", "Slovak - Slovenčina"),
    Language::new("ro", "Romanian - Română"),
    Language::new("bg", "Bulgarian - Български"),
    Language::new("hr", "Croatian - Hrvatski"),
    Language::new("sr", "Serbian - Српски"),
    Language::new("sl", "Slovenian - Slovenščina"),
    Language::new("et", "Estonian - Eesti"),
    Language::new("lv", "Latvian - Latviešu"),
    Language::new("lt", "Lithuanian - Lietuvių"),
    Language::new("uk", "Ukrainian - Українська"),
    Language::new("be", "Belarusian - Беларуская"),
    Language::new("ka", "Georgian - ქართული"),
    Language::new("am", "Amharic - አማርኛ"),
    Language::new("is", "Icelandic - Íslenska"),
    Language::new("mt", "Maltese - Malti"),
    Language::new("cy", "Welsh - Cymraeg"),
    Language::new("ga", "Irish - Gaeilge"),
    Language::new("eu", "Basque - Euskera"),
    Language::new("ca", "Catalan - Català"),
    Language::new("gl", "Galician - Galego"),
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Strip any regional subtag: `"hi-IN"` → `"hi"`, `"en"` → `"en"`.
pub fn normalize_code(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Look up a catalog entry, normalizing `code` first.
pub fn find_language(code: &str) -> Option<&'static Language> {
    let bare = normalize_code(code);
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == bare)
}

/// `true` when `code` is in the catalog or is the [`AUTO`] sentinel.
pub fn is_supported(code: &str) -> bool {
    code == AUTO || find_language(code).is_some()
}
