//! # Preprocessing pipeline
//!
//! [`Preprocessor`] composes the stages over one shared [`PrepModel`]:
//!
//! ```text
//! text ─┬─ cleaning (lower_casing, remove_html, remove_url, remove_emoji, remove_punctuation)
//!       └─ Tokenizer ─┬─ stop_word_removal
//!                     ├─ stemming / lemmatization   (RootReducer)
//!                     └─ pos_tagging ── named_entity_recognizer
//! ```
//!
//! Every operation is a pure function of its input and the read-only model;
//! the struct is cheap to clone and can be used from many threads at once.
//!
//! [`Preprocessor::analyze_streaming`] runs all stages in sequence and reports
//! each result on an `mpsc` channel as a [`PipelineEvent`], which is what the
//! web front end forwards over its WebSocket.

use std::collections::BTreeSet;
use std::sync::{mpsc, Arc};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::chunker::{Chunk, EntityLabel};
use crate::cleaning::{self, EmojiMode};
use crate::config::PrepConfig;
use crate::error::Result;
use crate::model::PrepModel;
use crate::postag::TaggedToken;
use crate::reduce::RootReducer;
use crate::tokenizer::{Token, Tokenizer, TreebankTokenizer};

/// One named entity: the chunk text (tokens joined by spaces) and its label.
///
/// Ordered by text, then label, which is the iteration order of the sets
/// returned by [`Preprocessor::named_entity_recognizer`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// Results of every stage for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub lower_cased: String,
    pub without_html: String,
    pub without_urls: String,
    pub emoji_described: String,
    pub without_punctuation: String,
    pub sentences: Vec<String>,
    pub tokens: Vec<Token>,
    pub without_stopwords: Vec<Token>,
    pub stems: Vec<String>,
    pub lemmas: Vec<String>,
    pub pos_tags: Vec<TaggedToken>,
    pub entities: BTreeSet<Entity>,
    pub binary_entities: BTreeSet<Entity>,
}

/// Progress of [`Preprocessor::analyze_streaming`], one event per finished stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// A string-level cleaning operation finished.
    Cleaned { operation: String, text: String },
    SentencesSplit { sentences: Vec<String> },
    Tokenized { tokens: Vec<Token>, total: usize },
    StopWordsRemoved { tokens: Vec<Token>, removed: usize },
    /// A root reducer (`stemming` or `lemmatization`) finished.
    Reduced { strategy: String, roots: Vec<String> },
    Tagged { tokens: Vec<TaggedToken> },
    EntitiesFound { binary: bool, entities: Vec<Entity> },
    Done { analysis: Box<Analysis>, processing_ms: u64 },
}

/// Entry point of the library: every preprocessing operation over a shared model.
#[derive(Clone)]
pub struct Preprocessor {
    model: Arc<PrepModel>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Preprocessor {
    /// Uses the Treebank tokenizer.
    pub fn new(model: Arc<PrepModel>) -> Self {
        Self::with_tokenizer(model, Arc::new(TreebankTokenizer::default()))
    }

    pub fn with_tokenizer(model: Arc<PrepModel>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { model, tokenizer }
    }

    /// Loads a [`PrepModel`] from `config` and wraps it.
    pub fn load(config: &PrepConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(PrepModel::load(config)?)))
    }

    pub fn model(&self) -> &PrepModel {
        &self.model
    }

    // ---- cleaning ----

    pub fn lower_casing(&self, text: &str) -> String {
        cleaning::lower_casing(text)
    }

    pub fn remove_html(&self, text: &str) -> String {
        cleaning::remove_html(text)
    }

    pub fn remove_url(&self, text: &str) -> String {
        cleaning::remove_url(text)
    }

    pub fn remove_emoji(&self, text: &str, mode: EmojiMode) -> String {
        cleaning::remove_emoji(text, mode)
    }

    /// Boolean form of [`remove_emoji`](Self::remove_emoji): `true` describes, `false` removes.
    pub fn remove_emoji_flag(&self, text: &str, replace_with_meaning: bool) -> String {
        cleaning::remove_emoji(text, EmojiMode::from(replace_with_meaning))
    }

    pub fn remove_punctuation(&self, text: &str) -> String {
        cleaning::remove_punctuation(text)
    }

    // ---- tokenization ----

    pub fn tokenize_words(&self, text: &str) -> Vec<Token> {
        self.tokenizer.words(text)
    }

    pub fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .sentences(text)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    /// Tokens whose exact text is not in the stop-word set.
    pub fn stop_word_removal(&self, text: &str) -> Vec<Token> {
        self.model.stopwords().filter(self.tokenize_words(text))
    }

    // ---- root reduction ----

    /// One root per token with any [`RootReducer`].
    pub fn root_reduce(&self, text: &str, reducer: &dyn RootReducer) -> Vec<String> {
        reducer.reduce_all(&self.tokenize_words(text))
    }

    pub fn stemming(&self, text: &str) -> Vec<String> {
        self.root_reduce(text, self.model.stemmer())
    }

    /// Tags each token on its own (no sentence context) to pick its lemma.
    pub fn lemmatization(&self, text: &str) -> Vec<String> {
        self.root_reduce(text, &self.model.lemmatizer())
    }

    // ---- annotation ----

    /// One tag per token, tagged as a whole sequence.
    pub fn pos_tagging(&self, text: &str) -> Vec<TaggedToken> {
        self.tag_tokens(self.tokenize_words(text))
    }

    fn tag_tokens(&self, tokens: Vec<Token>) -> Vec<TaggedToken> {
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let tags = self.model.tagger().tag(&words);
        tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken { token, tag })
            .collect()
    }

    /// Chunked sentence: bare tokens and entity groups, in document order.
    pub fn chunks(&self, text: &str, binary: bool) -> Vec<Chunk> {
        self.model.chunker().chunk(&self.pos_tagging(text), binary)
    }

    /// Distinct `(text, label)` pairs of every entity chunk.
    ///
    /// Repeated mentions collapse into one entry and document order is lost;
    /// use [`chunks`](Self::chunks) for positions or counts.
    pub fn named_entity_recognizer(&self, text: &str, binary: bool) -> BTreeSet<Entity> {
        entity_set(self.chunks(text, binary))
    }

    // ---- batches ----

    pub fn pos_tagging_batch(&self, texts: &[&str]) -> Vec<Vec<TaggedToken>> {
        texts.par_iter().map(|text| self.pos_tagging(text)).collect()
    }

    pub fn named_entity_recognizer_batch(&self, texts: &[&str], binary: bool) -> Vec<BTreeSet<Entity>> {
        texts
            .par_iter()
            .map(|text| self.named_entity_recognizer(text, binary))
            .collect()
    }

    // ---- whole pipeline ----

    /// Runs every stage on `text` and returns all results.
    pub fn analyze(&self, text: &str) -> Analysis {
        self.collect_with(text, |_| {})
    }

    /// Runs every stage, sending one event per stage and a final `Done`.
    ///
    /// A closed receiver does not stop the run.
    pub fn analyze_streaming(&self, text: &str, tx: mpsc::Sender<PipelineEvent>) {
        let start = Instant::now();
        let analysis = self.collect_with(text, |event| {
            let _ = tx.send(event);
        });
        let _ = tx.send(PipelineEvent::Done {
            analysis: Box::new(analysis),
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }

    fn collect_with(&self, text: &str, mut emit: impl FnMut(PipelineEvent)) -> Analysis {
        let mut cleaned = |operation: &str, result: String| {
            emit(PipelineEvent::Cleaned {
                operation: operation.to_string(),
                text: result.clone(),
            });
            result
        };
        let lower_cased = cleaned("lower_casing", self.lower_casing(text));
        let without_html = cleaned("remove_html", self.remove_html(text));
        let without_urls = cleaned("remove_url", self.remove_url(text));
        let emoji_described = cleaned("remove_emoji", self.remove_emoji(text, EmojiMode::Describe));
        let without_punctuation = cleaned("remove_punctuation", self.remove_punctuation(text));

        let sentences = self.tokenize_sentences(text);
        emit(PipelineEvent::SentencesSplit {
            sentences: sentences.clone(),
        });

        let tokens = self.tokenize_words(text);
        emit(PipelineEvent::Tokenized {
            tokens: tokens.clone(),
            total: tokens.len(),
        });

        let without_stopwords = self.model.stopwords().filter(tokens.clone());
        emit(PipelineEvent::StopWordsRemoved {
            tokens: without_stopwords.clone(),
            removed: tokens.len() - without_stopwords.len(),
        });

        let stemmer = self.model.stemmer();
        let lemmatizer = self.model.lemmatizer();
        let reducers: [&dyn RootReducer; 2] = [stemmer, &lemmatizer];
        let mut roots = reducers.map(|reducer| {
            let reduced = reducer.reduce_all(&tokens);
            emit(PipelineEvent::Reduced {
                strategy: reducer.name().to_string(),
                roots: reduced.clone(),
            });
            reduced
        });
        let lemmas = std::mem::take(&mut roots[1]);
        let stems = std::mem::take(&mut roots[0]);

        let pos_tags = self.tag_tokens(tokens.clone());
        emit(PipelineEvent::Tagged {
            tokens: pos_tags.clone(),
        });

        let mut entity_sets = [false, true].map(|binary| {
            let entities = entity_set(self.model.chunker().chunk(&pos_tags, binary));
            emit(PipelineEvent::EntitiesFound {
                binary,
                entities: entities.iter().cloned().collect(),
            });
            entities
        });
        let binary_entities = std::mem::take(&mut entity_sets[1]);
        let entities = std::mem::take(&mut entity_sets[0]);

        Analysis {
            lower_cased,
            without_html,
            without_urls,
            emoji_described,
            without_punctuation,
            sentences,
            tokens,
            without_stopwords,
            stems,
            lemmas,
            pos_tags,
            entities,
            binary_entities,
        }
    }
}

/// `(text, label)` of every entity chunk; repeats collapse.
fn entity_set(chunks: Vec<Chunk>) -> BTreeSet<Entity> {
    chunks
        .into_iter()
        .filter_map(|chunk| match chunk {
            Chunk::Entity(entity) => Some(Entity {
                text: entity.text(),
                label: entity.label,
            }),
            Chunk::Token(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    use crate::chunker::EntityChunker;
    use crate::lexicon::MorphyLexicon;
    use crate::postag::{PennTag, PosTagger};
    use crate::stopwords::StopWordFilter;
    use crate::tokenizer::WhitespaceTokenizer;

    fn prep() -> Preprocessor {
        static MODEL: OnceLock<Arc<PrepModel>> = OnceLock::new();
        let model = MODEL.get_or_init(|| Arc::new(PrepModel::load(&PrepConfig::default()).unwrap()));
        Preprocessor::new(Arc::clone(model))
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn entity(text: &str, label: EntityLabel) -> Entity {
        Entity {
            text: text.to_string(),
            label,
        }
    }

    #[test]
    fn test_remove_html_example() {
        assert_eq!(prep().remove_html("<h1>Hello</h1> World!"), "Hello World!");
    }

    #[test]
    fn test_emoji_modes() {
        let prep = prep();
        assert_eq!(prep.remove_emoji("ok 👍", EmojiMode::Describe), "ok :thumbs_up:");
        assert_eq!(prep.remove_emoji("ok 👍", EmojiMode::Remove), "ok ");
        assert_eq!(prep.remove_emoji_flag("ok 👍", true), "ok :thumbs_up:");
        assert_eq!(prep.remove_emoji_flag("ok 👍", false), "ok ");
    }

    #[test]
    fn test_stop_word_removal_example() {
        let kept = prep().stop_word_removal("the cat sat on the mat");
        assert_eq!(texts(&kept), ["cat", "sat", "mat"]);
    }

    #[test]
    fn test_stop_words_are_case_sensitive() {
        let kept = prep().stop_word_removal("The cat is on the mat");
        assert_eq!(texts(&kept), ["The", "cat", "mat"]);
    }

    #[test]
    fn test_stemming_example() {
        assert_eq!(prep().stemming("Cars are running fast"), ["car", "are", "run", "fast"]);
    }

    #[test]
    fn test_lemmatization_keeps_length() {
        let prep = prep();
        let text = "The striped bats were hanging on their feet.";
        let lemmas = prep.lemmatization(text);
        assert_eq!(lemmas.len(), prep.tokenize_words(text).len());
        assert_eq!(lemmas[0], "The");
        // "were" is tagged VBD even without context
        assert_eq!(lemmas[3], "be");
        assert_eq!(lemmas.last().map(String::as_str), Some("."));
    }

    #[test]
    fn test_pos_tagging_aligns_with_tokens() {
        let prep = prep();
        let text = "Albert Einstein was born in Ulm.";
        let tagged = prep.pos_tagging(text);
        let tokens = prep.tokenize_words(text);
        assert_eq!(tagged.len(), tokens.len());
        for (t, token) in tagged.iter().zip(&tokens) {
            assert_eq!(&t.token, token);
        }
        assert_eq!(tagged[0].tag, PennTag::NNP);
        assert_eq!(tagged.last().map(|t| t.tag), Some(PennTag::Period));
    }

    #[test]
    fn test_ner_example() {
        let found = prep().named_entity_recognizer("Albert Einstein was born in Ulm.", false);
        assert!(found.contains(&entity("Albert Einstein", EntityLabel::Person)));
        assert!(found.contains(&entity("Ulm", EntityLabel::Gpe)));
    }

    #[test]
    fn test_unseen_plurals_are_tagged_and_lemmatized() {
        let prep = prep();
        let text = "The dogs were chasing the cats across the gardens.";
        let tagged = prep.pos_tagging(text);
        for i in [1, 5, 8] {
            assert_eq!(tagged[i].tag, PennTag::NNS, "{}", tagged[i].token.text);
        }
        let lemmas = prep.lemmatization(text);
        assert_eq!((lemmas[1].as_str(), lemmas[5].as_str(), lemmas[8].as_str()), ("dog", "cat", "garden"));
        assert_eq!(lemmas[2], "be");
    }

    #[test]
    fn test_regular_inflections_lemmatized() {
        let prep = prep();
        assert_eq!(prep.lemmatization("Barack Obama visited Kenya last year.")[2], "visit");
        assert_eq!(
            prep.lemmatization("The bakers burned the cookies."),
            ["The", "baker", "burn", "the", "cookie", "."]
        );
    }

    #[test]
    fn test_ner_names_outside_gazetteers() {
        let prep = prep();
        let found = prep.named_entity_recognizer("Sundar Pichai leads Alphabet in Mountain View.", false);
        assert!(found.contains(&entity("Sundar Pichai", EntityLabel::Person)), "{found:?}");

        let found = prep.named_entity_recognizer("Priya Raman joined Veltrix Labs in Denver.", false);
        assert!(found.contains(&entity("Priya Raman", EntityLabel::Person)), "{found:?}");
        assert!(found.contains(&entity("Veltrix Labs", EntityLabel::Organization)), "{found:?}");
    }

    #[test]
    fn test_ner_binary_and_dedup() {
        let prep = prep();
        let text = "Ulm is small. Albert Einstein left Ulm. Ulm remembers him.";
        let found = prep.named_entity_recognizer(text, true);
        assert!(found.iter().all(|e| e.label == EntityLabel::Entity));
        assert_eq!(found.iter().filter(|e| e.text == "Ulm").count(), 1);

        let chunks = prep.chunks(text, true);
        let mentions = chunks
            .iter()
            .filter(|c| matches!(c, Chunk::Entity(e) if e.text() == "Ulm"))
            .count();
        assert_eq!(mentions, 3);
    }

    #[test]
    fn test_empty_input() {
        let prep = prep();
        assert!(prep.tokenize_words("").is_empty());
        assert!(prep.tokenize_sentences("").is_empty());
        assert!(prep.stemming("").is_empty());
        assert!(prep.lemmatization("").is_empty());
        assert!(prep.pos_tagging("").is_empty());
        assert!(prep.named_entity_recognizer("", false).is_empty());
    }

    #[test]
    fn test_sentences() {
        let sentences = prep().tokenize_sentences("Dr. Smith arrived. He sat down.");
        assert_eq!(sentences, ["Dr. Smith arrived.", "He sat down."]);
    }

    #[test]
    fn test_batches_match_sequential() {
        let prep = prep();
        let docs = ["Albert Einstein was born in Ulm.", "", "Marie Curie worked in Paris."];
        let tagged = prep.pos_tagging_batch(&docs);
        let entities = prep.named_entity_recognizer_batch(&docs, false);
        for (i, doc) in docs.iter().enumerate() {
            assert_eq!(tagged[i], prep.pos_tagging(doc));
            assert_eq!(entities[i], prep.named_entity_recognizer(doc, false));
        }
    }

    #[test]
    fn test_swappable_tokenizer() {
        let prep = Preprocessor::with_tokenizer(Arc::clone(&prep().model), Arc::new(WhitespaceTokenizer));
        let tokens = prep.tokenize_words("Cars, running.");
        assert_eq!(texts(&tokens), ["Cars,", "running."]);
        assert_eq!(prep.stemming("Cars, running.").len(), 2);
    }

    struct AllNouns;

    impl PosTagger for AllNouns {
        fn tag(&self, tokens: &[&str]) -> Vec<PennTag> {
            vec![PennTag::NNP; tokens.len()]
        }
    }

    struct EveryTokenAnEntity;

    impl EntityChunker for EveryTokenAnEntity {
        fn chunk(&self, tokens: &[TaggedToken], binary: bool) -> Vec<Chunk> {
            tokens
                .iter()
                .map(|t| {
                    Chunk::Entity(crate::chunker::EntityChunk {
                        label: if binary { EntityLabel::Entity } else { EntityLabel::Location },
                        tokens: vec![t.clone()],
                    })
                })
                .collect()
        }
    }

    #[test]
    fn test_injected_annotators() {
        let model = PrepModel::from_parts(
            PrepConfig::default(),
            StopWordFilter::from_words(["x"]),
            Box::new(AllNouns),
            Box::new(EveryTokenAnEntity),
            Box::new(MorphyLexicon::new()),
        );
        let prep = Preprocessor::new(Arc::new(model));
        let found = prep.named_entity_recognizer("a b a", false);
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            [entity("a", EntityLabel::Location), entity("b", EntityLabel::Location)]
        );
        assert_eq!(prep.lemmatization("cars"), ["cars"]);
        assert_eq!(texts(&prep.stop_word_removal("x y")), ["y"]);
    }

    #[test]
    fn test_event_wire_format() {
        let event = PipelineEvent::EntitiesFound {
            binary: false,
            entities: vec![entity("Ulm", EntityLabel::Gpe)],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "EntitiesFound",
                "data": { "binary": false, "entities": [{ "text": "Ulm", "label": "GPE" }] }
            })
        );
    }

    #[test]
    fn test_analyze_streams_every_stage() {
        let prep = prep();
        let text = "Visit https://example.com <b>now</b> 👍 Albert Einstein was born in Ulm.";
        let (tx, rx) = mpsc::channel();
        prep.analyze_streaming(text, tx);
        let events: Vec<PipelineEvent> = rx.into_iter().collect();

        let cleaned = events
            .iter()
            .filter(|e| matches!(e, PipelineEvent::Cleaned { .. }))
            .count();
        assert_eq!(cleaned, 5);
        assert!(matches!(events.last(), Some(PipelineEvent::Done { .. })));

        let analysis = prep.analyze(text);
        match events.last() {
            Some(PipelineEvent::Done { analysis: streamed, .. }) => assert_eq!(**streamed, analysis),
            other => panic!("expected Done, got {other:?}"),
        }
        assert_eq!(analysis.tokens, prep.tokenize_words(text));
        assert_eq!(analysis.stems, prep.stemming(text));
        assert_eq!(analysis.lemmas, prep.lemmatization(text));
        assert_eq!(analysis.entities, prep.named_entity_recognizer(text, false));
        assert_eq!(analysis.binary_entities, prep.named_entity_recognizer(text, true));
        assert!(!analysis.without_urls.contains("https"));
        assert!(analysis.emoji_described.contains(":thumbs_up:"));
    }
}
