/// Errors surfaced while building an [`Engine`](crate::Engine).
///
/// Filtering itself is total: once an engine is constructed it never fails
/// for any valid Unicode input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("word list too large: {count} entries (limit {limit})")]
    WordListTooLarge { count: usize, limit: usize },

    #[error("pattern too long: {pattern:?} is {len} chars (limit {limit})")]
    PatternTooLong {
        pattern: String,
        len: usize,
        limit: usize,
    },

    #[error("pattern {pattern:?} failed to compile: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
