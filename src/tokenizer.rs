//! Character-level tokenization for the pair-merge experiment.

/// Semantic string unit of the merge loop; starts as a single character and
/// grows by concatenation as pairs merge.
pub type Token = String;

/// Characters removed outright during tokenization.
const DROPPED: [char; 3] = [' ', ',', '.'];

/// Produces one single-character token per input character, dropping space,
/// comma, and period.
///
/// Every other character — other punctuation included — is kept as its own
/// token.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    text.chars()
        .filter(|ch| !DROPPED.contains(ch))
        .map(Token::from)
        .collect()
}
