//! Text tokenization for the wordpack codec

/// True for characters that always form a one-character token: CJK unified
/// ideographs, Hiragana, Katakana, and Hangul syllables. No dictionary-based
/// segmentation is attempted for these scripts.
fn is_single_char_token(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'   // CJK unified ideographs
        | '\u{3040}'..='\u{309F}' // Hiragana
        | '\u{30A0}'..='\u{30FF}' // Katakana
        | '\u{AC00}'..='\u{D7AF}' // Hangul syllables
    )
}

/// True for characters that extend a word-class run.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Split text into an ordered sequence of lowercase tokens.
///
/// A single left-to-right scan emits:
/// - one token per maximal run of word-class characters (alphanumerics and
///   apostrophes), covering space-delimited scripts such as Latin and
///   Cyrillic;
/// - one token per CJK ideograph, kana, or Hangul syllable character, which
///   takes precedence over the word class.
///
/// All other characters (whitespace, punctuation, symbols) are discarded,
/// so original spacing cannot be recovered from the token sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for c in text.chars() {
        if is_single_char_token(c) {
            if !run.is_empty() {
                tokens.push(std::mem::take(&mut run));
            }
            tokens.push(c.to_string());
        } else if is_word_char(c) {
            run.extend(c.to_lowercase());
        } else if !run.is_empty() {
            tokens.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        tokens.push(run);
    }

    tokens
}
