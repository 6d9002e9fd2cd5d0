//! Parsing of word-list documents. The engine itself does no I/O; read the
//! file however you like and hand the contents to [`parse`].

/// Parse a word-list document into the entries [`Engine::new`] consumes.
///
/// One pattern per line. Blank lines and `#` comments are skipped and
/// surrounding whitespace is trimmed; entries are otherwise kept verbatim,
/// wildcard markers and mixed case included.
///
/// [`Engine::new`]: crate::Engine::new
pub fn parse(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
