//! # Model configuration
//!
//! Every field has a default, so an empty TOML document (or `PrepConfig::default()`)
//! yields the embedded English resources and the standard training schedule.
//!
//! ```toml
//! language = "english"
//! tagger_iterations = 5
//! lexicon_dir = "/usr/share/prep/lexicon"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};
use crate::stopwords::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Language of the stop-word set and of the stemmer.
    pub language: Language,
    /// Passes of the averaged perceptron over the POS corpus.
    pub tagger_iterations: usize,
    /// Minimum corpus frequency for an unambiguous word to enter the tag dictionary.
    pub tagdict_min_count: usize,
    /// SGD epochs of the entity-type classifier.
    pub chunker_iterations: usize,
    pub chunker_learning_rate: f64,
    /// L2 penalty of the entity-type classifier.
    pub chunker_l2: f64,
    /// Newline-separated stop-word list replacing the built-in set.
    pub stopwords_path: Option<PathBuf>,
    /// Directory with `lemmas.tsv` and `exceptions.tsv` replacing the built-in lexicon.
    pub lexicon_dir: Option<PathBuf>,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            tagger_iterations: 5,
            tagdict_min_count: 3,
            chunker_iterations: 20,
            chunker_learning_rate: 0.1,
            chunker_l2: 0.001,
            stopwords_path: None,
            lexicon_dir: None,
        }
    }
}

impl PrepConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a TOML file. A missing file is a resource error, not a silent default.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| PrepError::unavailable("configuration file", path, e))?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PrepConfig::from_toml_str("").unwrap();
        assert_eq!(config, PrepConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = PrepConfig::from_toml_str(
            "language = \"german\"\ntagger_iterations = 8\nlexicon_dir = \"/tmp/lex\"\n",
        )
        .unwrap();
        assert_eq!(config.language, Language::German);
        assert_eq!(config.tagger_iterations, 8);
        assert_eq!(config.lexicon_dir, Some(PathBuf::from("/tmp/lex")));
        assert_eq!(config.tagdict_min_count, 3);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = PrepConfig::from_toml_str("tagger_iterations = \"many\"").unwrap_err();
        assert!(matches!(err, PrepError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_resource_error() {
        let err = PrepConfig::from_file("/definitely/not/here/prep.toml").unwrap_err();
        assert!(matches!(err, PrepError::ResourceUnavailable { .. }));
    }
}
