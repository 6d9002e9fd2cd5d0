//! Compilation of profane-word patterns into token matchers.

use regex::Regex;

use crate::{
    confusables::ConfusableTable,
    errors::{Error, Result},
};

/// Marker at either end of a word meaning "open boundary on this side":
/// `*bad` matches any token ending in the word, `bad*` any token starting
/// with it. Anywhere else `*` is an ordinary literal character.
pub(crate) const WILDCARD: char = '*';

/// A single word-list entry compiled against a confusable table.
///
/// The regex is tested against normalized tokens (lowercased, repeats
/// collapsed). Each literal character becomes an alternation between itself
/// and its registered confusables; the expression is anchored on whichever
/// sides do not carry the wildcard marker.
#[derive(Clone, Debug)]
pub(crate) struct CompiledPattern {
    pub word: String,
    regex: Regex,
}

impl CompiledPattern {
    pub fn compile(word: &str, table: &ConfusableTable) -> Result<Self> {
        let lowered = word.to_lowercase();
        let chars: Vec<char> = lowered.chars().collect();

        let mut body = &chars[..];
        let open_start = body.first() == Some(&WILDCARD);
        if open_start {
            body = &body[1..];
        }
        let open_end = body.last() == Some(&WILDCARD);
        if open_end {
            body = &body[..body.len() - 1];
        }

        let mut expr = String::new();
        if !open_start {
            expr.push('^');
        }
        for &c in body {
            push_group(&mut expr, c, table);
        }
        if !open_end {
            expr.push('$');
        }

        let regex = Regex::new(&expr).map_err(|source| Error::Pattern {
            pattern: word.to_string(),
            source,
        })?;

        Ok(Self {
            word: word.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, normalized_token: &str) -> bool {
        self.regex.is_match(normalized_token)
    }
}

/// Append `(?:c|sub1|sub2|…)` for one pattern character, or just the escaped
/// literal when it has no substitutes.
fn push_group(expr: &mut String, c: char, table: &ConfusableTable) {
    let subs = table.substitutes(c);
    let literal = regex::escape(&c.to_string());
    if subs.is_empty() {
        expr.push_str(&literal);
        return;
    }

    expr.push_str("(?:");
    expr.push_str(&literal);
    for sub in subs {
        expr.push('|');
        expr.push_str(&regex::escape(sub));
    }
    expr.push(')');
}
