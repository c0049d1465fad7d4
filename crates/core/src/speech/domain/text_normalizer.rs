/// Punctuation removed before comparison. Anything else (digits, accents,
/// other symbols) survives and must match literally.
pub const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '-'];

/// Canonical comparable form of a sentence: lowercase, punctuation-stripped,
/// whitespace runs collapsed to a single space, trimmed.
///
/// Total and idempotent. Targets, transcripts and alternatives all go
/// through this before any token is compared.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized tokens of `text`. Empty or punctuation-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
