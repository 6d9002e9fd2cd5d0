//! Obfuscation-resistant profanity matching.
//!
//! Detects profane words despite leetspeak digits and symbols, Latin/Cyrillic
//! homoglyphs, repeated characters and camel-case joining, and masks every
//! match with a same-length run of asterisks so the message keeps its shape.
//!
//! The engine is a pure library: no I/O, no persistence, no async. Build it
//! once from a word list and call [`Engine::filter`] from as many threads as
//! you like.
//!
//! ```
//! use antimat::Engine;
//!
//! let engine = Engine::new(["bad"]).unwrap();
//! let result = engine.filter("This is a b@d word");
//! assert!(result.has_profanity);
//! assert_eq!(result.filtered_text, "This is a *** word");
//! ```

pub mod config;
pub mod confusables;
pub mod engine;
pub mod errors;
pub mod normalize;
pub mod tokenize;
pub mod wordlist;

mod pattern;

pub use config::EngineConfig;
pub use confusables::ConfusableTable;
pub use engine::{Engine, FilterResult};
pub use errors::{Error, Result};
