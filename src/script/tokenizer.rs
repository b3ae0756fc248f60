//! Splits script assembly into words

/// Characters separating words
const SEPARATORS: &[char] = &[' ', '\t', '\n'];

/// Returns the words of `script` in order
///
/// Runs of separators count as one and never produce empty words;
/// a script of only whitespace has no words at all
pub fn tokenize(script: &str) -> impl Iterator<Item = &str> {
    script
        .split(SEPARATORS)
        .filter(|word| !word.is_empty())
}
