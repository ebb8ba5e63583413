//! Dictionary loading
//!
//! One candidate per line. A missing file is not an error: the loader falls
//! back to a handful of common passwords so the demo always has something to
//! scan. The secret is appended when the list does not already contain it.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Used when the dictionary file does not exist (the secret is added after)
pub const FALLBACK_WORDS: &[&str] = &["password", "admin", "letmein", "123456", "azerty"];

/// Where the candidates came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictionarySource {
    File(PathBuf),
    /// Text handed over in memory
    Inline,
    Fallback,
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::File(path) => write!(f, "{}", path.display()),
            DictionarySource::Inline => write!(f, "inline text"),
            DictionarySource::Fallback => write!(f, "built-in list"),
        }
    }
}

/// A resolved candidate list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub source: DictionarySource,
    pub words: Vec<String>,
}

impl Dictionary {
    /// Load `path`, or the fallback list if it does not exist
    pub fn load(path: &Path, secret: &str) -> Result<Self> {
        let (source, mut words) = match std::fs::read(path) {
            Ok(bytes) => {
                let words = parse_lines(&String::from_utf8_lossy(&bytes));
                log::info!("Loaded {} words from {}", words.len(), path.display());
                (DictionarySource::File(path.to_path_buf()), words)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!(
                    "Dictionary {} not found, using built-in list",
                    path.display()
                );
                (DictionarySource::Fallback, fallback_words())
            }
            Err(e) => return Err(EngineError::io(path, e)),
        };

        ensure_secret(&mut words, secret);
        Ok(Self { source, words })
    }

    /// Build from in-memory text (same rules as a file)
    pub fn from_text(text: &str, secret: &str) -> Self {
        let mut words = parse_lines(text);
        ensure_secret(&mut words, secret);
        Self {
            source: DictionarySource::Inline,
            words,
        }
    }

    /// The built-in list plus the secret
    pub fn fallback(secret: &str) -> Self {
        let mut words = fallback_words();
        ensure_secret(&mut words, secret);
        Self {
            source: DictionarySource::Fallback,
            words,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

fn fallback_words() -> Vec<String> {
    FALLBACK_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Trimmed, non-empty lines
fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn ensure_secret(words: &mut Vec<String>, secret: &str) {
    if !words.iter().any(|w| w == secret) {
        words.push(secret.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_and_trims() {
        let dict = Dictionary::from_text("  alpha \n\n\tbeta\r\n   \ngamma", "beta");
        assert_eq!(dict.words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_secret_appended_once() {
        let dict = Dictionary::from_text("a\nb", "s3cret");
        assert_eq!(dict.words.last().map(String::as_str), Some("s3cret"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_text_source_is_inline() {
        let dict = Dictionary::from_text("a\nb", "b");
        assert_eq!(dict.source, DictionarySource::Inline);
        assert_eq!(dict.source.to_string(), "inline text");
        assert_ne!(Dictionary::fallback("b").source, dict.source);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("vision-attack-no-such-dictionary.txt");
        let dict = Dictionary::load(&path, "1231232024").unwrap();
        assert_eq!(dict.source, DictionarySource::Fallback);
        assert_eq!(dict.words.len(), FALLBACK_WORDS.len() + 1);
        assert!(dict.words.iter().any(|w| w == "1231232024"));
    }

    #[test]
    fn test_loads_file_with_invalid_utf8() {
        let path = std::env::temp_dir().join(format!(
            "vision-attack-dict-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, b"one\ntw\xffo\nthree\n").unwrap();
        let dict = Dictionary::load(&path, "three").unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(dict.source, DictionarySource::File(path));
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.words[0], "one");
        assert!(dict.words[1].starts_with("tw"));
    }

    #[test]
    fn test_directory_is_an_error() {
        let err = Dictionary::load(&std::env::temp_dir(), "x").unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
