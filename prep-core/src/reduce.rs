//! # Root reduction
//!
//! Two interchangeable ways of bringing a token back to a root form:
//!
//! - [`Stemmer`]: Snowball (Porter2) suffix stripping. Fast, needs no
//!   dictionary, and the result is not always a word (`studies -> studi`).
//! - [`Lemmatizer`]: asks the tagger for the token's class *in isolation*,
//!   then looks the token up in a [`Lexicon`]. Unknown words come back as-is.

use std::fmt;

use rust_stemmers::Algorithm;

use crate::lexicon::Lexicon;
use crate::postag::{PosTagger, WordClass};
use crate::stopwords::Language;
use crate::tokenizer::Token;

/// A strategy that maps every token to exactly one root form.
pub trait RootReducer: Send + Sync {
    /// Short strategy name, e.g. `"stemming"`.
    fn name(&self) -> &'static str;

    fn reduce(&self, token: &str) -> String;

    /// One root per token, in order.
    fn reduce_all(&self, tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| self.reduce(&t.text)).collect()
    }
}

fn algorithm(language: Language) -> Algorithm {
    match language {
        Language::English => Algorithm::English,
        Language::German => Algorithm::German,
        Language::French => Algorithm::French,
        Language::Spanish => Algorithm::Spanish,
        Language::Italian => Algorithm::Italian,
        Language::Portuguese => Algorithm::Portuguese,
        Language::Dutch => Algorithm::Dutch,
        Language::Russian => Algorithm::Russian,
    }
}

/// Snowball stemmer. Tokens are lowercased first.
///
/// For English this is Porter2, the revised Snowball algorithm, not the
/// original Porter stemmer: `fairly` stems to `fair` here, where Porter gives
/// `fairli`.
pub struct Stemmer {
    language: Language,
    inner: rust_stemmers::Stemmer,
}

impl Stemmer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm(language)),
        }
    }

    pub fn english() -> Self {
        Self::new(Language::English)
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stemmer").field("language", &self.language).finish()
    }
}

impl RootReducer for Stemmer {
    fn name(&self) -> &'static str {
        "stemming"
    }

    fn reduce(&self, token: &str) -> String {
        self.inner.stem(&token.to_lowercase()).into_owned()
    }
}

/// Dictionary lemmatizer driven by single-token POS tags.
///
/// Each token is tagged alone, without its sentence, so its class can differ
/// from the one `pos_tagging` assigns in context.
pub struct Lemmatizer<'a> {
    tagger: &'a dyn PosTagger,
    lexicon: &'a dyn Lexicon,
}

impl<'a> Lemmatizer<'a> {
    pub fn new(tagger: &'a dyn PosTagger, lexicon: &'a dyn Lexicon) -> Self {
        Self { tagger, lexicon }
    }

    /// Coarse class of `token` tagged on its own; noun when the tag has no class.
    pub fn word_class(&self, token: &str) -> WordClass {
        self.tagger
            .tag(&[token])
            .first()
            .map(|tag| tag.word_class())
            .unwrap_or_default()
    }
}

impl RootReducer for Lemmatizer<'_> {
    fn name(&self) -> &'static str {
        "lemmatization"
    }

    fn reduce(&self, token: &str) -> String {
        self.lexicon
            .lemma(token, self.word_class(token))
            .unwrap_or_else(|| token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MorphyLexicon;
    use crate::postag::PennTag;
    use crate::tokenizer::{Tokenizer, TreebankTokenizer};

    /// Tags from a fixed table; everything else is a singular noun.
    struct TableTagger;

    impl PosTagger for TableTagger {
        fn tag(&self, tokens: &[&str]) -> Vec<PennTag> {
            tokens
                .iter()
                .map(|t| match *t {
                    "was" | "ran" => PennTag::VBD,
                    "running" => PennTag::VBG,
                    "better" => PennTag::JJR,
                    "quickly" => PennTag::RB,
                    "the" => PennTag::DT,
                    _ => PennTag::NN,
                })
                .collect()
        }
    }

    fn reduce_text(reducer: &dyn RootReducer, text: &str) -> Vec<String> {
        reducer.reduce_all(&TreebankTokenizer::default().words(text))
    }

    #[test]
    fn test_stemming_example() {
        let stems = reduce_text(&Stemmer::english(), "Cars are running fast");
        assert_eq!(stems, ["car", "are", "run", "fast"]);
    }

    #[test]
    fn test_stems_need_not_be_words() {
        let stemmer = Stemmer::english();
        assert_eq!(stemmer.reduce("studies"), "studi");
        assert_eq!(stemmer.reduce("."), ".");
    }

    #[test]
    fn test_english_is_porter2() {
        assert_eq!(Stemmer::english().reduce("fairly"), "fair");
    }

    #[test]
    fn test_other_language() {
        let stemmer = Stemmer::new(Language::German);
        assert_eq!(stemmer.language(), Language::German);
        assert_eq!(stemmer.reduce("Katzen"), "katz");
    }

    #[test]
    fn test_lemmatization_uses_class() {
        let lexicon = MorphyLexicon::english();
        let lemmatizer = Lemmatizer::new(&TableTagger, &lexicon);
        assert_eq!(lemmatizer.reduce("was"), "be");
        assert_eq!(lemmatizer.reduce("running"), "run");
        assert_eq!(lemmatizer.reduce("better"), "good");
        assert_eq!(lemmatizer.reduce("cars"), "car");
        // DT has no WordNet class, so "the" is looked up as a noun and kept
        assert_eq!(lemmatizer.word_class("the"), WordClass::Noun);
        assert_eq!(lemmatizer.reduce("the"), "the");
    }

    #[test]
    fn test_lemmatization_falls_back_to_token() {
        let lexicon = MorphyLexicon::english();
        let lemmatizer = Lemmatizer::new(&TableTagger, &lexicon);
        assert_eq!(lemmatizer.reduce("Cars"), "Cars");
        assert_eq!(lemmatizer.reduce("zxq"), "zxq");
    }

    #[test]
    fn test_reducers_preserve_length() {
        let lexicon = MorphyLexicon::english();
        let reducers: [&dyn RootReducer; 2] = [&Stemmer::english(), &Lemmatizer::new(&TableTagger, &lexicon)];
        let tokens = TreebankTokenizer::default().words("The children weren't there... were they?");
        for reducer in reducers {
            assert_eq!(reducer.reduce_all(&tokens).len(), tokens.len(), "{}", reducer.name());
        }
    }
}
