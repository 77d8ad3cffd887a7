//! Static phrase dictionary consulted before any remote provider.
//!
//! The dictionary maps a language-pair key (`"en-hi"`) to a table of
//! normalized source phrases and their target-language equivalents.  It is
//! built once at startup from the built-in phrases plus an optional user file,
//! and never mutated afterwards.
//!
//! User phrases are JSON in the same shape as the built-in tables:
//!
//! ```json
//! { "en-hi": { "see you soon": "जल्द मिलते हैं" } }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::translate::error::TranslateError;

// ---------------------------------------------------------------------------
// Built-in phrases
// ---------------------------------------------------------------------------

type PhraseTable = &'static [(&'static str, &'static str)];

static BUILTIN_PHRASES: &[(&str, PhraseTable)] = &[
    (
        "en-hi",
        &[
            ("hello", "नमस्ते"),
            ("hi", "हाय"),
            ("hii", "हाय"),
            ("how are you", "आप कैसे हैं"),
            ("how are you?", "आप कैसे हैं?"),
            ("good morning", "सुप्रभात"),
            ("good night", "शुभ रात्रि"),
            ("thank you", "धन्यवाद"),
            ("please", "कृपया"),
            ("yes", "हाँ"),
            ("no", "नहीं"),
            ("sorry", "माफ करें"),
            ("excuse me", "माफ करें"),
            ("i love you", "मैं आपसे प्यार करता हूँ"),
            ("what is your name", "आपका नाम क्या है"),
            ("my name is", "मेरा नाम है"),
            ("where are you from", "आप कहाँ से हैं"),
            ("nice to meet you", "आपसे मिलकर खुशी हुई"),
        ],
    ),
    (
        "hi-en",
        &[
            ("नमस्ते", "hello"),
            ("हाय", "hi"),
            ("आप कैसे हैं", "how are you"),
            ("आप कैसे हैं?", "how are you?"),
            ("सुप्रभात", "good morning"),
            ("शुभ रात्रि", "good night"),
            ("धन्यवाद", "thank you"),
            ("कृपया", "please"),
            ("हाँ", "yes"),
            ("नहीं", "no"),
            ("माफ करें", "sorry"),
            ("मैं आपसे प्यार करता हूँ", "i love you"),
            ("आपका नाम क्या है", "what is your name"),
            ("मेरा नाम है", "my name is"),
            ("आप कहाँ से हैं", "where are you from"),
            ("आपसे मिलकर खुशी हुई", "nice to meet you"),
        ],
    ),
];

/// Trim and lower-case a phrase for lookup.
pub fn normalize_phrase(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Build the pair key used to select one direction of the dictionary.
pub fn pair_key(from: &str, to: &str) -> String {
    format!("{from}-{to}")
}

// ---------------------------------------------------------------------------
// PhraseDictionary
// ---------------------------------------------------------------------------

/// Immutable phrase lookup table keyed by language pair.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    pairs: HashMap<String, HashMap<String, String>>,
}

impl PhraseDictionary {
    /// Dictionary with no entries at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Dictionary holding only the built-in phrases.
    pub fn builtin() -> Self {
        let mut dict = Self::empty();
        for (pair, table) in BUILTIN_PHRASES {
            let entries = dict.pairs.entry((*pair).to_string()).or_default();
            for (source, target) in table.iter() {
                entries.insert(normalize_phrase(source), (*target).to_string());
            }
        }
        dict
    }

    /// Built-in phrases merged with the user file at `path`.
    ///
    /// A missing file is not an error; the built-in dictionary is returned
    /// unchanged.  User entries override built-in ones for the same phrase.
    /// Entries with a blank translation are skipped.
    pub fn with_user_file(path: &Path) -> Result<Self, TranslateError> {
        let mut dict = Self::builtin();
        if !path.exists() {
            return Ok(dict);
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| TranslateError::Dictionary(format!("{}: {e}", path.display())))?;
        let user: HashMap<String, HashMap<String, String>> = serde_json::from_str(&data)
            .map_err(|e| TranslateError::Dictionary(format!("{}: {e}", path.display())))?;

        let mut added = 0usize;
        for (pair, table) in user {
            let entries = dict.pairs.entry(pair).or_default();
            for (source, target) in table {
                if target.trim().is_empty() {
                    log::debug!("skipping blank user phrase for {source:?}");
                    continue;
                }
                entries.insert(normalize_phrase(&source), target);
                added += 1;
            }
        }
        log::debug!("loaded {added} user phrases from {}", path.display());
        Ok(dict)
    }

    /// Exact-match lookup of `text` (normalized) for the `from`→`to` pair.
    pub fn lookup(&self, text: &str, from: &str, to: &str) -> Option<&str> {
        self.pairs
            .get(&pair_key(from, to))?
            .get(&normalize_phrase(text))
            .map(String::as_str)
    }

    /// Total number of phrases across all pairs.
    pub fn len(&self) -> usize {
        self.pairs.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
