// File: src/model/annotate.rs
use crate::locale::LocaleProfile;

/// Appends glyphs for any recognized vocabulary to a menu description line.
///
/// Literal colons are stripped first since the colon is the glyph-key
/// delimiter. A lower-cased, lemmatized copy of each whitespace token is then
/// wrapped as `:base:` and resolved through the locale's glyph table; tokens
/// with no entry resolve to nothing. The returned line keeps the original
/// case and inflections, followed by the resolved glyphs in token order.
///
/// This is lossy and heuristic on purpose: whether an inflected word matches
/// depends entirely on the lemma rules and the shipped dictionary.
pub fn annotate(line: &str, locale: &LocaleProfile) -> String {
    let stripped = line.replace(':', "");
    let mut glyphs = String::new();
    for token in stripped.to_lowercase().split_whitespace() {
        // Edge punctuation ("pizza," / "(milk)") is not part of the word.
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }
        let key = format!(":{}:", locale.lemmatize(word));
        if let Some(glyph) = locale.glyph(&key) {
            glyphs.push_str(glyph);
        }
    }
    let mut annotated = stripped;
    annotated.push_str(&glyphs);
    annotated
}
