//! # prep-core: English text preprocessing
//!
//! Cleaning, tokenization, stop-word removal, stemming, lemmatization,
//! part-of-speech tagging and named-entity chunking behind one
//! [`Preprocessor`].
//!
//! ## Architecture
//!
//! 1.  **Cleaning** ([`cleaning`]): pure string normalizations.
//! 2.  **Tokenization** ([`tokenizer`]): an injected [`Tokenizer`]; the default
//!     splits sentences Punkt-style and words Treebank-style.
//! 3.  **Stop words** ([`stopwords`]): exact, case-sensitive set membership.
//! 4.  **Root reduction** ([`reduce`]): [`Stemmer`] and [`Lemmatizer`], two
//!     implementations of [`RootReducer`].
//! 5.  **POS tagging** ([`tagger`]): averaged perceptron over the Penn tagset.
//! 6.  **Entity chunking** ([`chunker`]): gazetteer and head-word rules with a
//!     MaxEnt fallback ([`maxent`]).
//!
//! The statistical models are trained from the embedded corpus ([`corpus`])
//! when the shared [`PrepModel`] is loaded, so there is nothing to download.
//!
//! ## Example
//!
//! ```rust
//! use prep_core::{EntityLabel, PrepConfig, Preprocessor};
//!
//! let prep = Preprocessor::load(&PrepConfig::default()).unwrap();
//!
//! assert_eq!(prep.remove_html("<h1>Hello</h1> World!"), "Hello World!");
//! assert_eq!(prep.stemming("Cars are running fast"), ["car", "are", "run", "fast"]);
//!
//! let entities = prep.named_entity_recognizer("Albert Einstein was born in Ulm.", false);
//! assert!(entities
//!     .iter()
//!     .any(|e| e.text == "Albert Einstein" && e.label == EntityLabel::Person));
//! ```

pub mod chunker;
pub mod cleaning;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod gazetteer;
pub mod lexicon;
pub mod maxent;
pub mod model;
pub mod perceptron;
pub mod pipeline;
pub mod postag;
pub mod reduce;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use chunker::{Chunk, EntityChunk, EntityChunker, EntityLabel, NeChunker};
pub use cleaning::EmojiMode;
pub use config::PrepConfig;
pub use error::{PrepError, Result};
pub use lexicon::{Lexicon, MorphyLexicon};
pub use model::PrepModel;
pub use pipeline::{Analysis, Entity, PipelineEvent, Preprocessor};
pub use postag::{PennTag, PosTagger, TaggedToken, WordClass};
pub use reduce::{Lemmatizer, RootReducer, Stemmer};
pub use stopwords::{Language, StopWordFilter};
pub use tagger::PerceptronTagger;
pub use tokenizer::{Sentence, Token, Tokenizer, TreebankTokenizer, WhitespaceTokenizer};
