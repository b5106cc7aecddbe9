//! # Shared model context
//!
//! [`PrepModel`] holds every resource the pipeline reads: the stop-word set,
//! the stemmer, the lexicon, the trained POS tagger and the entity chunker.
//! It is built once by an explicit [`PrepModel::load`] and never mutated
//! afterwards, so a single instance can be shared by any number of threads.
//!
//! Loading reads the configured files *before* training anything: a missing
//! stop-word list or lexicon directory fails immediately instead of at the
//! first call that would have needed it.

use std::fmt;
use std::time::Instant;

use tracing::info;

use crate::chunker::{EntityChunker, NeChunker};
use crate::config::PrepConfig;
use crate::corpus::get_corpus;
use crate::error::Result;
use crate::gazetteer::Gazetteers;
use crate::lexicon::{Lexicon, MorphyLexicon};
use crate::postag::PosTagger;
use crate::reduce::{Lemmatizer, Stemmer};
use crate::stopwords::StopWordFilter;
use crate::tagger::PerceptronTagger;

pub struct PrepModel {
    config: PrepConfig,
    stopwords: StopWordFilter,
    stemmer: Stemmer,
    tagger: Box<dyn PosTagger>,
    chunker: Box<dyn EntityChunker>,
    lexicon: Box<dyn Lexicon>,
}

impl PrepModel {
    /// Builds the context described by `config`.
    ///
    /// # Errors
    ///
    /// [`PrepError::ResourceUnavailable`](crate::error::PrepError::ResourceUnavailable)
    /// when `stopwords_path` or `lexicon_dir` cannot be read, and
    /// [`PrepError::MalformedResource`](crate::error::PrepError::MalformedResource)
    /// when a lexicon file has an unparsable line.
    pub fn load(config: &PrepConfig) -> Result<Self> {
        let start = Instant::now();

        let stopwords = match &config.stopwords_path {
            Some(path) => StopWordFilter::from_file(path)?,
            None => StopWordFilter::for_language(config.language),
        };
        let lexicon = match &config.lexicon_dir {
            Some(dir) => MorphyLexicon::from_dir(dir)?,
            None => MorphyLexicon::english(),
        };

        let corpus = get_corpus();
        let gazetteers = Gazetteers::english();
        let tagger = PerceptronTagger::train(
            &corpus,
            &gazetteers,
            config.tagger_iterations,
            config.tagdict_min_count,
        );
        let chunker = NeChunker::train(
            &corpus,
            gazetteers,
            config.chunker_iterations,
            config.chunker_learning_rate,
            config.chunker_l2,
        );

        info!(
            language = ?config.language,
            stopwords = stopwords.len(),
            lemmas = lexicon.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "preprocessing model loaded"
        );

        Ok(Self {
            config: config.clone(),
            stopwords,
            stemmer: Stemmer::new(config.language),
            tagger: Box::new(tagger),
            chunker: Box::new(chunker),
            lexicon: Box::new(lexicon),
        })
    }

    /// Assembles a context from caller-supplied annotators; nothing is trained.
    pub fn from_parts(
        config: PrepConfig,
        stopwords: StopWordFilter,
        tagger: Box<dyn PosTagger>,
        chunker: Box<dyn EntityChunker>,
        lexicon: Box<dyn Lexicon>,
    ) -> Self {
        Self {
            stemmer: Stemmer::new(config.language),
            config,
            stopwords,
            tagger,
            chunker,
            lexicon,
        }
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopWordFilter {
        &self.stopwords
    }

    pub fn stemmer(&self) -> &Stemmer {
        &self.stemmer
    }

    pub fn tagger(&self) -> &dyn PosTagger {
        self.tagger.as_ref()
    }

    pub fn chunker(&self) -> &dyn EntityChunker {
        self.chunker.as_ref()
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    /// Lemmatizer over this context's tagger and lexicon.
    pub fn lemmatizer(&self) -> Lemmatizer<'_> {
        Lemmatizer::new(self.tagger(), self.lexicon())
    }
}

impl fmt::Debug for PrepModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrepModel")
            .field("config", &self.config)
            .field("stopwords", &self.stopwords.len())
            .field("stemmer", &self.stemmer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;
    use crate::postag::PennTag;
    use crate::stopwords::Language;

    #[test]
    fn test_missing_stopword_file_fails_fast() {
        let config = PrepConfig {
            stopwords_path: Some("/nonexistent/prep/stopwords.txt".into()),
            ..PrepConfig::default()
        };
        let err = PrepModel::load(&config).unwrap_err();
        match err {
            PrepError::ResourceUnavailable { resource, .. } => assert_eq!(resource, "stop-word list"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_lexicon_dir_fails_fast() {
        let config = PrepConfig {
            lexicon_dir: Some("/nonexistent/prep/lexicon".into()),
            ..PrepConfig::default()
        };
        assert!(matches!(
            PrepModel::load(&config),
            Err(PrepError::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_default_and_reload() {
        let first = PrepModel::load(&PrepConfig::default()).unwrap();
        let second = PrepModel::load(&PrepConfig::default()).unwrap();
        assert!(first.stopwords().is_stop_word("the"));
        assert_eq!(first.stemmer().language(), Language::English);

        let tokens = ["Albert", "Einstein", "was", "born", "in", "Ulm", "."];
        assert_eq!(first.tagger().tag(&tokens), second.tagger().tag(&tokens));
        assert_eq!(first.tagger().tag(&tokens)[0], PennTag::NNP);
    }

    #[test]
    fn test_stemmer_follows_language() {
        let config = PrepConfig {
            language: Language::German,
            ..PrepConfig::default()
        };
        let model = PrepModel::load(&config).unwrap();
        assert_eq!(model.stemmer().language(), Language::German);
        assert!(model.stopwords().is_stop_word("und"));
    }
}
