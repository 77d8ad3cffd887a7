//! Content-quality filters for MyMemory output.
//!
//! MyMemory is a crowd-sourced translation memory and occasionally returns
//! matches that are plainly wrong.  Two known failure shapes are rejected
//! here; anything else is passed through.

// ---------------------------------------------------------------------------
// Known bad outputs
// ---------------------------------------------------------------------------

/// Phrase whose translations are checked for religious-reference tokens.
const WELL_BEING_PHRASE: &str = "how are you";

/// Tokens (Latin and Devanagari) observed in bad matches for
/// [`WELL_BEING_PHRASE`].  This list is a literal special case, not a
/// general content policy.
const RELIGIOUS_TOKENS: &[&str] = &["allah", "अल्लाह"];

/// Why a translation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A greeting came back with a religious reference.
    WellBeingMistranslation,
    /// The output is the input, unchanged, for a cross-language pair.
    Untranslated,
}

/// Check `translated` against the known failure shapes.
///
/// `from` and `to` are the normalized codes the provider was called with.
/// Returns `None` when the translation is acceptable.
pub fn check(source: &str, translated: &str, from: &str, to: &str) -> Option<Rejection> {
    let source_lower = source.to_lowercase();
    let translated_lower = translated.to_lowercase();

    if source_lower.contains(WELL_BEING_PHRASE)
        && RELIGIOUS_TOKENS
            .iter()
            .any(|token| translated_lower.contains(token))
    {
        return Some(Rejection::WellBeingMistranslation);
    }

    if translated == source && from != to {
        return Some(Rejection::Untranslated);
    }

    None
}
