//! The matcher/masker: three tokenization passes over the text, masking any
//! token whose normalized form matches a compiled pattern.

use serde::Serialize;

use crate::{
    config::EngineConfig,
    errors::{Error, Result},
    normalize::normalize_token,
    pattern::CompiledPattern,
    tokenize::{tokenize, SplitPolicy},
};

/// Outcome of an [`Engine::filter`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    /// Input text with every matched token replaced by a same-length mask.
    pub filtered_text: String,
    /// Whether any pass matched any token.
    pub has_profanity: bool,
}

// Pass order is deliberate: the punctuation-aware pass catches ordinary
// delimited profanity, the capitalized-aware pass breaks camel-case joins
// apart, and the final whitespace-only pass sees symbol-substituted words
// ("b@d") whole, since the punctuation-aware passes split those at the symbol.
const PASSES: [SplitPolicy; 3] = [
    SplitPolicy::WhitespacePunct,
    SplitPolicy::WhitespacePunctCaps,
    SplitPolicy::Whitespace,
];

/// Profanity matching engine.
///
/// Immutable after construction: [`filter`](Engine::filter) takes `&self`
/// and keeps no state between calls, so one instance can be shared across
/// threads freely.
#[derive(Clone, Debug)]
pub struct Engine {
    patterns: Vec<CompiledPattern>,
    mask_char: char,
}

impl Engine {
    /// Build an engine over `words` with the default configuration.
    ///
    /// Entries are compiled in order (the first matching pattern wins) and
    /// may carry the `*` wildcard marker at either end to open that
    /// boundary. An empty list is valid and never flags anything.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, EngineConfig::default())
    }

    /// Build an engine with an explicit [`EngineConfig`].
    ///
    /// Fails if the word list exceeds the configured limits or a pattern
    /// does not compile; every pattern is compiled here once and reused
    /// across all `filter` calls.
    pub fn with_config<I, S>(words: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        if words.len() > config.max_words {
            return Err(Error::WordListTooLarge {
                count: words.len(),
                limit: config.max_words,
            });
        }

        let mut patterns = Vec::with_capacity(words.len());
        for word in &words {
            let len = word.chars().count();
            if len > config.max_pattern_chars {
                return Err(Error::PatternTooLong {
                    pattern: word.clone(),
                    len,
                    limit: config.max_pattern_chars,
                });
            }
            patterns.push(CompiledPattern::compile(word, &config.confusables)?);
        }

        tracing::debug!(patterns = patterns.len(), "compiled profanity patterns");

        Ok(Self {
            patterns,
            mask_char: config.mask_char,
        })
    }

    /// Filter `text`, masking every matched token in place.
    ///
    /// Never fails for any valid Unicode input, punctuation-only,
    /// whitespace-only and mixed-script text included. Cost grows with
    /// text length × pattern count; callers feeding untrusted text should
    /// cap its length upstream (chat messages are naturally short).
    pub fn filter(&self, text: &str) -> FilterResult {
        let mut found = false;
        let mut current = text.to_string();
        for policy in PASSES {
            current = self.run_pass(&current, policy, &mut found);
        }

        FilterResult {
            filtered_text: current,
            has_profanity: found,
        }
    }

    /// One tokenize → normalize → match → mask sweep under a single policy.
    fn run_pass(&self, text: &str, policy: SplitPolicy, found: &mut bool) -> String {
        let mut out = String::with_capacity(text.len());
        for token in tokenize(text, policy) {
            match self.first_match(token) {
                Some(pattern) => {
                    let len = token.chars().count();
                    tracing::debug!(word = %pattern.word, len, "masked token");
                    out.extend(std::iter::repeat(self.mask_char).take(len));
                    *found = true;
                }
                None => out.push_str(token),
            }
        }
        out
    }

    fn first_match(&self, token: &str) -> Option<&CompiledPattern> {
        if self.patterns.is_empty() {
            return None;
        }
        let normalized = normalize_token(token);
        self.patterns.iter().find(|p| p.is_match(&normalized))
    }
}
