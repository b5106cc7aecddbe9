//! # Stop-word filtering
//!
//! Removes tokens whose exact text is a member of a fixed stop-word set.
//! Comparison is case-sensitive and no normalization happens first, so `"The"`
//! survives a filter that removes `"the"`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PrepError, Result};
use crate::tokenizer::Token;

/// English list shipped with the classic NLTK corpora (179 entries).
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Languages with a built-in stop-word set and a Snowball stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
}

impl Language {
    fn to_stop_words_language(self) -> stop_words::LANGUAGE {
        match self {
            Language::English => stop_words::LANGUAGE::English,
            Language::German => stop_words::LANGUAGE::German,
            Language::French => stop_words::LANGUAGE::French,
            Language::Spanish => stop_words::LANGUAGE::Spanish,
            Language::Italian => stop_words::LANGUAGE::Italian,
            Language::Portuguese => stop_words::LANGUAGE::Portuguese,
            Language::Dutch => stop_words::LANGUAGE::Dutch,
            Language::Russian => stop_words::LANGUAGE::Russian,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StopWordFilter {
    words: HashSet<String>,
}

impl StopWordFilter {
    /// The built-in set for `language`.
    ///
    /// English uses the fixed NLTK list; the others come from the `stop-words` crate.
    pub fn for_language(language: Language) -> Self {
        let words: HashSet<String> = match language {
            Language::English => ENGLISH.iter().map(|w| w.to_string()).collect(),
            other => stop_words::get(other.to_stop_words_language())
                .into_iter()
                .map(|w| w.to_string())
                .collect(),
        };
        debug!(?language, count = words.len(), "stop-word set ready");
        Self { words }
    }

    pub fn english() -> Self {
        Self::for_language(Language::English)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads one stop word per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| PrepError::unavailable("stop-word list", path, e))?;
        Ok(Self::from_words(
            source
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        ))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keeps the tokens that are not stop words, in order.
    pub fn filter(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        tokens.retain(|t| !self.is_stop_word(&t.text));
        tokens
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::english()
    }
}
