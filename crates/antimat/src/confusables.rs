//! Look-alike substitutions keyed by the canonical lowercase letter.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Substitutions seen in real evasion attempts: digits and symbols standing
/// in for Latin letters, keyboard digraphs, and Latin/Cyrillic homoglyphs
/// registered both ways so the same table serves word lists in either script.
///
/// Several pairs below look identical in print but are distinct codepoints
/// (Latin `a` U+0061 vs Cyrillic `а` U+0430, and so on).
const BUILTIN: &[(char, &[&str])] = &[
    // Latin keys
    ('a', &["@", "4", "\u{430}"]),
    ('b', &["6", "\u{431}", "\u{44c}"]),
    ('c', &["(", "\u{441}"]),
    ('e', &["3", "\u{435}", "\u{451}"]),
    ('g', &["9"]),
    ('h', &["\u{43d}", "}{"]),
    ('i', &["1", "!", "\u{456}"]),
    ('k', &["i{", "|{", "\u{43a}"]),
    ('l', &["|", "\u{43b}"]),
    ('o', &["0", "\u{43e}"]),
    ('p', &["\u{440}"]),
    ('s', &["5", "$", "\u{441}"]),
    ('t', &["7", "+", "\u{442}"]),
    ('u', &["\u{443}", "\u{438}"]),
    ('x', &["\u{445}", "}{"]),
    ('y', &["\u{443}"]),
    ('z', &["2", "\u{437}"]),
    // Cyrillic keys
    ('\u{430}', &["a", "@", "4"]),                // а
    ('\u{431}', &["6", "b"]),                     // б
    ('\u{432}', &["b", "v", "8"]),                // в
    ('\u{433}', &["g", "r"]),                     // г
    ('\u{434}', &["d"]),                          // д
    ('\u{435}', &["e", "3", "\u{451}"]),          // е
    ('\u{451}', &["e", "3", "\u{435}"]),          // ё
    ('\u{436}', &["zh", "}|{"]),                  // ж
    ('\u{437}', &["z", "3"]),                     // з
    ('\u{438}', &["i", "u"]),                     // и
    ('\u{439}', &["i", "u", "\u{438}"]),          // й
    ('\u{43a}', &["k", "i{", "|{"]),              // к
    ('\u{43b}', &["l", "ji"]),                    // л
    ('\u{43c}', &["m"]),                          // м
    ('\u{43d}', &["h", "n"]),                     // н
    ('\u{43e}', &["o", "0"]),                     // о
    ('\u{43f}', &["p", "n"]),                     // п
    ('\u{440}', &["r", "p"]),                     // р
    ('\u{441}', &["c", "s", "("]),                // с
    ('\u{442}', &["t", "m"]),                     // т
    ('\u{443}', &["y", "u"]),                     // у
    ('\u{444}', &["f"]),                          // ф
    ('\u{445}', &["x", "h", "}{", ")("]),         // х
    ('\u{446}', &["c", "u"]),                     // ц
    ('\u{447}', &["4", "ch"]),                    // ч
    ('\u{448}', &["sh", "w"]),                    // ш
    ('\u{449}', &["sch", "w"]),                   // щ
    ('\u{44b}', &["bl", "bi"]),                   // ы
    ('\u{44c}', &["b"]),                          // ь
    ('\u{44d}', &["e", "3"]),                     // э
    ('\u{44e}', &["io", "|o"]),                   // ю
    ('\u{44f}', &["ya", "9i"]),                   // я
];

static BUILTIN_TABLE: Lazy<ConfusableTable> = Lazy::new(|| ConfusableTable::from_pairs(BUILTIN));

/// Mapping from a canonical lowercase character to the ordered list of
/// strings a user might substitute for it. Read-only after construction.
#[derive(Clone, Debug)]
pub struct ConfusableTable {
    map: HashMap<char, Vec<String>>,
}

impl ConfusableTable {
    /// The built-in table: Latin leetspeak, digraphs, and two-way
    /// Latin/Cyrillic homoglyphs.
    pub fn builtin() -> &'static ConfusableTable {
        &BUILTIN_TABLE
    }

    /// Build a table from `(canonical char, substitutes)` pairs.
    ///
    /// Uppercase keys and substitutes equal to their own key are dropped, as
    /// are entries left with no substitutes.
    pub fn from_pairs(pairs: &[(char, &[&str])]) -> Self {
        let mut map = HashMap::with_capacity(pairs.len());
        for &(key, subs) in pairs {
            if key.is_uppercase() {
                continue;
            }
            let key_s = key.to_string();
            let kept: Vec<String> = subs
                .iter()
                .map(|s| s.to_string())
                .filter(|s| *s != key_s)
                .collect();
            if kept.is_empty() {
                continue;
            }
            map.insert(key, kept);
        }
        Self { map }
    }

    /// Substitutes registered for `c`, in priority order. Empty when none.
    pub fn substitutes(&self, c: char) -> &[String] {
        self.map.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of canonical characters with at least one substitute.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for ConfusableTable {
    fn default() -> Self {
        ConfusableTable::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_are_lowercase() {
        for &(key, _) in BUILTIN {
            assert!(!key.is_uppercase(), "uppercase key: {key:?}");
        }
    }

    #[test]
    fn builtin_never_maps_a_key_to_itself() {
        for &(key, subs) in BUILTIN {
            let key_s = key.to_string();
            assert!(
                subs.iter().all(|s| *s != key_s),
                "key {key:?} lists itself as a substitute"
            );
        }
    }

    #[test]
    fn homoglyphs_are_registered_both_ways() {
        let t = ConfusableTable::builtin();
        // Latin a <-> Cyrillic а
        assert!(t.substitutes('a').iter().any(|s| s == "\u{430}"));
        assert!(t.substitutes('\u{430}').iter().any(|s| s == "a"));
        // Latin x <-> Cyrillic х
        assert!(t.substitutes('x').iter().any(|s| s == "\u{445}"));
        assert!(t.substitutes('\u{445}').iter().any(|s| s == "x"));
    }

    #[test]
    fn digraph_substitutes_are_present() {
        let t = ConfusableTable::builtin();
        assert!(t.substitutes('k').iter().any(|s| s == "i{"));
        assert!(t.substitutes('\u{436}').iter().any(|s| s == "}|{"));
    }

    #[test]
    fn unregistered_char_yields_empty_slice() {
        let t = ConfusableTable::builtin();
        assert!(t.substitutes('7').is_empty());
        assert!(t.substitutes('*').is_empty());
    }

    #[test]
    fn from_pairs_drops_invalid_entries() {
        let t = ConfusableTable::from_pairs(&[
            ('A', &["4"]),        // uppercase key
            ('b', &["b", "6"]),   // self-substitution filtered out
            ('c', &["c"]),        // nothing left after filtering
        ]);
        assert!(t.substitutes('A').is_empty());
        assert_eq!(t.substitutes('b'), ["6"]);
        assert!(t.substitutes('c').is_empty());
        assert_eq!(t.len(), 1);
    }
}
