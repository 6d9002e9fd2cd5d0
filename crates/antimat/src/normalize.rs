//! Token normalization applied before matching. The original token text is
//! never touched; callers keep it around for output.

/// Collapse runs of the same character into a single occurrence.
///
/// Defeats repetition evasion: "baaaad" becomes "bad". Idempotent.
pub fn collapse_repeats(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = None;
    for c in s.chars() {
        if prev != Some(c) {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Canonical matching form of a token: lowercased, repeats collapsed.
pub fn normalize_token(token: &str) -> String {
    collapse_repeats(&token.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_consecutive_duplicates() {
        assert_eq!(collapse_repeats("fuuuuck"), "fuck");
        assert_eq!(collapse_repeats("aabbaa"), "aba");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(collapse_repeats(""), "");
        assert_eq!(normalize_token(""), "");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_token("BaAaAd");
        assert_eq!(normalize_token(&once), once);
    }

    #[test]
    fn lowercases_before_collapsing() {
        // "Aa" only collapses once both halves share case.
        assert_eq!(normalize_token("Aa"), "a");
        assert_eq!(normalize_token("БАаад"), "бад");
    }

    #[test]
    fn keeps_alternating_characters() {
        assert_eq!(collapse_repeats("abab"), "abab");
    }
}
