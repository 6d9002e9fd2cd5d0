//! Separator-preserving tokenization.
//!
//! Every pass of the filter re-tokenizes under one policy and concatenates
//! the (possibly masked) tokens back together, so separators must survive
//! as tokens of their own: concatenating the output of [`tokenize`] always
//! reproduces the input exactly.

/// Token-splitting policy for one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Split on runs of whitespace only.
    Whitespace,
    /// Split on runs of whitespace or punctuation/symbol characters.
    WhitespacePunct,
    /// As [`WhitespacePunct`](SplitPolicy::WhitespacePunct), and each
    /// capitalized word (an uppercase letter followed by lowercase letters)
    /// is its own token, so "HelloWorld" splits into "Hello" and "World".
    WhitespacePunctCaps,
}

/// Punctuation and symbols that end a word under the punctuation-aware
/// policies. `\u{2116}` is the numero sign found on Cyrillic keyboards.
const PUNCT: &[char] = &[
    '.', ',', '/', '<', '>', '?', ':', ';', '\'', '"', '\\', '|', '{', '}', '[', ']', '!', '@',
    '#', '$', '%', '^', '&', '*', '-', '+', '=', '`', '~', '\u{2116}',
];

fn is_separator(c: char, policy: SplitPolicy) -> bool {
    if c.is_whitespace() {
        return true;
    }
    match policy {
        SplitPolicy::Whitespace => false,
        SplitPolicy::WhitespacePunct | SplitPolicy::WhitespacePunctCaps => PUNCT.contains(&c),
    }
}

// Capitalized-word boundaries use the Latin and Cyrillic letter ranges only;
// digits and other scripts neither start nor extend a capitalized token.
fn is_upper_letter(c: char) -> bool {
    matches!(c, 'A'..='Z' | '\u{410}'..='\u{42f}' | '\u{401}')
}

fn is_lower_letter(c: char) -> bool {
    matches!(c, 'a'..='z' | '\u{430}'..='\u{44f}' | '\u{451}')
}

/// Split `text` into an ordered sequence of non-empty tokens under `policy`.
pub fn tokenize(text: &str, policy: SplitPolicy) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0usize; // byte offset where the current token began
    let mut in_separator = false;
    let mut caps_token = false; // current token is uppercase-led

    for (i, c) in text.char_indices() {
        let sep = is_separator(c, policy);
        let boundary = if i == 0 {
            false
        } else if sep != in_separator {
            true
        } else if !sep && policy == SplitPolicy::WhitespacePunctCaps {
            // Inside a word run: an uppercase letter starts a new token,
            // and an uppercase-led token ends at the first character that
            // is not a lowercase letter.
            is_upper_letter(c) || (caps_token && !is_lower_letter(c))
        } else {
            false
        };

        if boundary {
            tokens.push(&text[start..i]);
            start = i;
        }
        if boundary || i == 0 {
            caps_token = !sep && is_upper_letter(c);
        }
        in_separator = sep;
    }

    if !text.is_empty() {
        tokens.push(&text[start..]);
    }
    tokens
}
