//! Property-based tests for the preprocessing operations.
//!
//! The model is trained once and shared by every case.

use std::sync::{Arc, OnceLock};

use prep_core::{Chunk, PrepConfig, PrepModel, Preprocessor};
use proptest::prelude::*;

fn prep() -> Preprocessor {
    static MODEL: OnceLock<Arc<PrepModel>> = OnceLock::new();
    let model = MODEL.get_or_init(|| Arc::new(PrepModel::load(&PrepConfig::default()).unwrap()));
    Preprocessor::new(Arc::clone(model))
}

/// Sentence-like text: names, function words, contractions and punctuation.
fn sentence_like() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("Albert"), Just("Einstein"), Just("Ulm"), Just("Paris"), Just("Marie"), Just("Curie"),
        Just("the"), Just("The"), Just("was"), Just("born"), Just("in"), Just("of"), Just("cars"),
        Just("running"), Just("don't"), Just("Dr."), Just("University"), Just("Swiss"), Just("1879"),
        Just(","), Just("."), Just("!"), Just("("), Just(")"), Just("\""), Just("..."), Just("--"),
    ];
    prop::collection::vec(word, 0..30).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Stemming and lemmatization return one root per token.
    #[test]
    fn root_reduction_preserves_token_count(text in ".{0,80}") {
        let prep = prep();
        let n = prep.tokenize_words(&text).len();
        prop_assert_eq!(prep.stemming(&text).len(), n);
        prop_assert_eq!(prep.lemmatization(&text).len(), n);
    }

    /// One tag per token, in token order.
    #[test]
    fn pos_tagging_aligns_with_tokens(text in sentence_like()) {
        let prep = prep();
        let tokens = prep.tokenize_words(&text);
        let tagged = prep.pos_tagging(&text);
        prop_assert_eq!(tagged.len(), tokens.len());
        for (t, token) in tagged.iter().zip(&tokens) {
            prop_assert_eq!(&t.token, token);
        }
    }

    #[test]
    fn lower_casing_is_idempotent(text in ".{0,100}") {
        let prep = prep();
        let once = prep.lower_casing(&text);
        prop_assert_eq!(prep.lower_casing(&once), once);
    }

    #[test]
    fn remove_html_is_idempotent(text in "[a-z <>/=\"\n]{0,60}") {
        let prep = prep();
        let once = prep.remove_html(&text);
        prop_assert_eq!(prep.remove_html(&once), once);
    }

    #[test]
    fn remove_punctuation_leaves_no_punctuation(text in ".{0,100}") {
        let cleaned = prep().remove_punctuation(&text);
        prop_assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()));
        // non-punctuation characters survive in order
        let expected: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
        prop_assert_eq!(cleaned, expected);
    }

    /// No `(text, label)` pair appears twice, and every entity is a chunk of the text.
    #[test]
    fn ner_results_are_unique(text in sentence_like(), binary in any::<bool>()) {
        let prep = prep();
        let entities: Vec<_> = prep.named_entity_recognizer(&text, binary).into_iter().collect();
        let mut deduped = entities.clone();
        deduped.dedup();
        prop_assert_eq!(&deduped, &entities);

        let chunk_texts: Vec<String> = prep
            .chunks(&text, binary)
            .iter()
            .filter_map(|c| match c {
                Chunk::Entity(e) => Some(e.text()),
                Chunk::Token(_) => None,
            })
            .collect();
        for entity in &entities {
            prop_assert!(chunk_texts.contains(&entity.text));
        }
    }

    /// Chunks cover the tagged tokens exactly once, in order.
    #[test]
    fn chunks_partition_tokens(text in sentence_like()) {
        let prep = prep();
        let tagged = prep.pos_tagging(&text);
        let flattened: Vec<_> = prep
            .chunks(&text, false)
            .into_iter()
            .flat_map(|c| match c {
                Chunk::Token(t) => vec![t],
                Chunk::Entity(e) => e.tokens,
            })
            .collect();
        prop_assert_eq!(flattened, tagged);
    }
}
