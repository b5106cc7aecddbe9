//! # Greedy perceptron POS tagger
//!
//! Tags left to right; every decision sees the two tags already predicted
//! before it. Frequent unambiguous words never reach the model: they are
//! resolved by a tag dictionary built from three sources.
//!
//! 1. A closed-class lexicon (determiners, pronouns, prepositions, modals,
//!    punctuation) matched on lowercase or title-case words.
//! 2. The capitalized words of the gazetteers (`NNP`), with nationality
//!    adjectives (`JJ`) taking precedence.
//! 3. Corpus words seen at least `min_count` times, always with the same tag.
//!
//! Plain numbers (`1879`, `3.5`, `1,000`) are always `CD`.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::corpus::AnnotatedSentence;
use crate::features::{self, START};
use crate::gazetteer::{capitalize, Gazetteers};
use crate::perceptron::AveragedPerceptron;
use crate::postag::{PennTag, PosTagger};

static NUMBER: OnceLock<Regex> = OnceLock::new();

fn number() -> &'static Regex {
    NUMBER.get_or_init(|| Regex::new(r"^[+-]?\d+(?:[.,]\d+)*$").expect("valid number pattern"))
}

const CLOSED_CLASS: &[(&str, PennTag)] = &[
    ("the", PennTag::DT), ("a", PennTag::DT), ("an", PennTag::DT), ("this", PennTag::DT),
    ("these", PennTag::DT), ("those", PennTag::DT), ("every", PennTag::DT), ("each", PennTag::DT),
    ("any", PennTag::DT), ("no", PennTag::DT), ("another", PennTag::DT), ("either", PennTag::DT),
    ("neither", PennTag::DT), ("some", PennTag::DT), ("all", PennTag::DT),
    ("and", PennTag::CC), ("or", PennTag::CC), ("but", PennTag::CC), ("nor", PennTag::CC),
    ("&", PennTag::CC),
    ("in", PennTag::IN), ("of", PennTag::IN), ("on", PennTag::IN), ("at", PennTag::IN),
    ("by", PennTag::IN), ("for", PennTag::IN), ("with", PennTag::IN), ("from", PennTag::IN),
    ("into", PennTag::IN), ("onto", PennTag::IN), ("through", PennTag::IN), ("during", PennTag::IN),
    ("before", PennTag::IN), ("after", PennTag::IN), ("under", PennTag::IN), ("between", PennTag::IN),
    ("among", PennTag::IN), ("without", PennTag::IN), ("within", PennTag::IN),
    ("against", PennTag::IN), ("because", PennTag::IN), ("since", PennTag::IN),
    ("while", PennTag::IN), ("although", PennTag::IN), ("though", PennTag::IN), ("if", PennTag::IN),
    ("whether", PennTag::IN), ("than", PennTag::IN), ("upon", PennTag::IN), ("near", PennTag::IN),
    ("across", PennTag::IN), ("toward", PennTag::IN), ("towards", PennTag::IN),
    ("despite", PennTag::IN), ("unless", PennTag::IN), ("until", PennTag::IN), ("via", PennTag::IN),
    ("as", PennTag::IN),
    ("to", PennTag::TO),
    ("i", PennTag::PRP), ("you", PennTag::PRP), ("he", PennTag::PRP), ("she", PennTag::PRP),
    ("it", PennTag::PRP), ("we", PennTag::PRP), ("they", PennTag::PRP), ("me", PennTag::PRP),
    ("him", PennTag::PRP), ("us", PennTag::PRP), ("them", PennTag::PRP), ("myself", PennTag::PRP),
    ("yourself", PennTag::PRP), ("himself", PennTag::PRP), ("herself", PennTag::PRP),
    ("itself", PennTag::PRP), ("ourselves", PennTag::PRP), ("themselves", PennTag::PRP),
    ("my", PennTag::PRPS), ("your", PennTag::PRPS), ("his", PennTag::PRPS), ("her", PennTag::PRPS),
    ("its", PennTag::PRPS), ("our", PennTag::PRPS), ("their", PennTag::PRPS),
    ("can", PennTag::MD), ("could", PennTag::MD), ("will", PennTag::MD), ("would", PennTag::MD),
    ("shall", PennTag::MD), ("should", PennTag::MD), ("may", PennTag::MD), ("might", PennTag::MD),
    ("must", PennTag::MD), ("ca", PennTag::MD), ("wo", PennTag::MD),
    ("which", PennTag::WDT), ("who", PennTag::WP), ("whom", PennTag::WP), ("what", PennTag::WP),
    ("whose", PennTag::WPS), ("when", PennTag::WRB), ("where", PennTag::WRB), ("why", PennTag::WRB),
    ("how", PennTag::WRB),
    ("there", PennTag::EX),
    ("is", PennTag::VBZ), ("has", PennTag::VBZ), ("does", PennTag::VBZ), ("are", PennTag::VBP),
    ("am", PennTag::VBP), ("was", PennTag::VBD), ("were", PennTag::VBD), ("did", PennTag::VBD),
    ("been", PennTag::VBN), ("being", PennTag::VBG), ("be", PennTag::VB),
    ("not", PennTag::RB), ("n't", PennTag::RB), ("very", PennTag::RB), ("also", PennTag::RB),
    ("too", PennTag::RB), ("often", PennTag::RB), ("never", PennTag::RB), ("always", PennTag::RB),
    ("already", PennTag::RB), ("however", PennTag::RB), ("quite", PennTag::RB),
    ("rather", PennTag::RB), ("almost", PennTag::RB),
    ("one", PennTag::CD), ("two", PennTag::CD), ("three", PennTag::CD), ("four", PennTag::CD),
    ("five", PennTag::CD), ("six", PennTag::CD), ("seven", PennTag::CD), ("eight", PennTag::CD),
    ("nine", PennTag::CD), ("ten", PennTag::CD), ("hundred", PennTag::CD),
    ("thousand", PennTag::CD), ("million", PennTag::CD), ("billion", PennTag::CD),
    (".", PennTag::Period), ("!", PennTag::Period), ("?", PennTag::Period), (",", PennTag::Comma),
    (":", PennTag::Colon), (";", PennTag::Colon), ("--", PennTag::Colon), ("...", PennTag::Colon),
    ("-", PennTag::Colon), ("(", PennTag::LeftParen), ("[", PennTag::LeftParen),
    ("{", PennTag::LeftParen), (")", PennTag::RightParen), ("]", PennTag::RightParen),
    ("}", PennTag::RightParen), ("$", PennTag::Dollar), ("#", PennTag::Pound),
    ("``", PennTag::OpenQuote), ("\u{201C}", PennTag::OpenQuote), ("''", PennTag::CloseQuote),
    ("\u{201D}", PennTag::CloseQuote), ("%", PennTag::NN),
];

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().map(char::is_uppercase).unwrap_or(false) && chars.all(|c| !c.is_uppercase())
}

/// Greedy averaged-perceptron tagger over the Penn Treebank tagset.
#[derive(Debug, Clone)]
pub struct PerceptronTagger {
    model: AveragedPerceptron<PennTag>,
    /// Lowercase closed-class words.
    closed: HashMap<String, PennTag>,
    /// Exact surface forms: gazetteer names, titles and frequent corpus words.
    tagdict: HashMap<String, PennTag>,
    accuracy: f64,
}

impl PerceptronTagger {
    /// Trains a tagger on `corpus`.
    ///
    /// Deterministic: the corpus is visited in order on every pass.
    pub fn train(
        corpus: &[AnnotatedSentence],
        gazetteers: &Gazetteers,
        iterations: usize,
        min_count: usize,
    ) -> Self {
        let closed: HashMap<String, PennTag> =
            CLOSED_CLASS.iter().map(|(w, t)| (w.to_string(), *t)).collect();
        let tagdict = build_tagdict(corpus, gazetteers, min_count);

        let gold: Vec<(Vec<&str>, Vec<PennTag>)> = corpus
            .iter()
            .map(|s| {
                let tags = s
                    .pos_tags()
                    .iter()
                    .map(|t| t.parse::<PennTag>().unwrap_or(PennTag::NN))
                    .collect();
                (s.words(), tags)
            })
            .collect();

        let mut tagger = Self {
            model: AveragedPerceptron::new(gold.iter().flat_map(|(_, tags)| tags.iter().copied())),
            closed,
            tagdict,
            accuracy: 0.0,
        };

        for epoch in 0..iterations {
            let (mut correct, mut total) = (0usize, 0usize);
            for (words, truth) in &gold {
                let context = features::context(words);
                let (mut prev, mut prev2) = (START[0].to_string(), START[1].to_string());
                for (i, word) in words.iter().enumerate() {
                    let guess = match tagger.lookup(word) {
                        Some(tag) => tag,
                        None => {
                            let fv = features::pos_features(i, words, &context, &prev, &prev2);
                            let guess = tagger.model.predict(&fv).unwrap_or(PennTag::NN);
                            tagger.model.update(&truth[i], &guess, &fv);
                            guess
                        }
                    };
                    prev2 = std::mem::replace(&mut prev, guess.as_str().to_string());
                    correct += usize::from(guess == truth[i]);
                    total += 1;
                }
            }
            tagger.accuracy = correct as f64 / total.max(1) as f64;
            debug!(epoch, correct, total, accuracy = tagger.accuracy, "tagger epoch");
        }
        tagger.model.average_weights();

        info!(
            sentences = corpus.len(),
            tagdict = tagger.tagdict.len(),
            classes = tagger.model.classes().len(),
            accuracy = tagger.accuracy,
            "POS tagger trained"
        );
        tagger
    }

    /// Dictionary tag of `word`, if it bypasses the model.
    pub fn lookup(&self, word: &str) -> Option<PennTag> {
        if number().is_match(word) {
            return Some(PennTag::CD);
        }
        if let Some(tag) = self.tagdict.get(word) {
            return Some(*tag);
        }
        let lower = word.to_lowercase();
        if lower == word || is_title_case(word) {
            return self.closed.get(&lower).copied();
        }
        None
    }

    pub fn tagdict_len(&self) -> usize {
        self.tagdict.len()
    }

    /// Accuracy on the training corpus during the last pass, before averaging.
    pub fn training_accuracy(&self) -> f64 {
        self.accuracy
    }
}

impl PosTagger for PerceptronTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<PennTag> {
        let context = features::context(tokens);
        let (mut prev, mut prev2) = (START[0].to_string(), START[1].to_string());
        let mut tags = Vec::with_capacity(tokens.len());

        for (i, word) in tokens.iter().enumerate() {
            let tag = self.lookup(word).unwrap_or_else(|| {
                let fv = features::pos_features(i, tokens, &context, &prev, &prev2);
                self.model.predict(&fv).unwrap_or(PennTag::NN)
            });
            prev2 = std::mem::replace(&mut prev, tag.as_str().to_string());
            tags.push(tag);
        }
        tags
    }
}

fn build_tagdict(
    corpus: &[AnnotatedSentence],
    gazetteers: &Gazetteers,
    min_count: usize,
) -> HashMap<String, PennTag> {
    let mut counts: HashMap<&str, HashMap<&str, usize>> = HashMap::new();
    for sentence in corpus {
        for (word, pos, _) in sentence.tokens {
            *counts.entry(*word).or_default().entry(*pos).or_insert(0) += 1;
        }
    }

    let mut tagdict = HashMap::new();
    for (word, tags) in &counts {
        if tags.len() != 1 {
            continue;
        }
        let Some((pos, count)) = tags.iter().next() else { continue };
        if *count >= min_count.max(1) {
            if let Ok(tag) = pos.parse::<PennTag>() {
                tagdict.insert(word.to_string(), tag);
            }
        }
    }

    for name in gazetteers.proper_nouns() {
        tagdict.insert(name, PennTag::NNP);
    }
    for title in gazetteers.titles.iter().filter(|t| t.ends_with('.')) {
        tagdict.insert(capitalize(title), PennTag::NNP);
    }
    for nationality in &gazetteers.nationalities {
        tagdict.insert(capitalize(nationality), PennTag::JJ);
    }
    tagdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::get_corpus;

    fn tagger() -> PerceptronTagger {
        PerceptronTagger::train(&get_corpus(), &Gazetteers::english(), 5, 3)
    }

    #[test]
    fn test_one_tag_per_token() {
        let tagger = tagger();
        let words = ["Cars", "are", "running", "fast"];
        let tags = tagger.tag(&words);
        assert_eq!(tags.len(), words.len());
        assert_eq!(tags[1], PennTag::VBP);
    }

    #[test]
    fn test_dictionary_tags() {
        let tagger = tagger();
        let tags = tagger.tag(&["Albert", "Einstein", "was", "born", "in", "Ulm", "."]);
        assert_eq!(tags[0], PennTag::NNP);
        assert_eq!(tags[1], PennTag::NNP);
        assert_eq!(tags[2], PennTag::VBD);
        assert_eq!(tags[4], PennTag::IN);
        assert_eq!(tags[5], PennTag::NNP);
        assert_eq!(tags[6], PennTag::Period);
    }

    #[test]
    fn test_numbers_and_nationalities() {
        let tagger = tagger();
        assert_eq!(tagger.lookup("1879"), Some(PennTag::CD));
        assert_eq!(tagger.lookup("1,000.5"), Some(PennTag::CD));
        assert_eq!(tagger.lookup("Swiss"), Some(PennTag::JJ));
        assert_eq!(tagger.lookup("Dr."), Some(PennTag::NNP));
        // title case reaches the closed-class lexicon, all caps does not
        assert_eq!(tagger.lookup("The"), Some(PennTag::DT));
        assert_eq!(tagger.lookup("US"), None);
    }

    #[test]
    fn test_frequent_corpus_words_enter_dictionary() {
        let tagger = tagger();
        // "cars" occurs three times, always NNS
        assert_eq!(tagger.lookup("cars"), Some(PennTag::NNS));
        assert!(tagger.tagdict_len() > 0);
    }

    #[test]
    fn test_unseen_plurals_are_nns() {
        let tagger = tagger();
        // none of these nouns occur in the corpus
        let words = ["The", "dogs", "were", "chasing", "the", "cats", "across", "the", "gardens", "."];
        let tags = tagger.tag(&words);
        assert_eq!(tags[1], PennTag::NNS);
        assert_eq!(tags[5], PennTag::NNS);
        assert_eq!(tags[8], PennTag::NNS);
        for word in ["dogs", "bakers", "cookies"] {
            assert_eq!(tagger.tag(&[word]), [PennTag::NNS], "{word}");
        }
    }

    #[test]
    fn test_regular_past_tenses_alone() {
        let tagger = tagger();
        for word in ["visited", "burned"] {
            assert_eq!(tagger.tag(&[word]), [PennTag::VBD], "{word}");
        }
    }

    #[test]
    fn test_unseen_names_are_proper_nouns() {
        let tags = tagger().tag(&["Sundar", "Pichai", "leads", "Alphabet", "in", "Mountain", "View", "."]);
        assert_eq!(&tags[..3], [PennTag::NNP, PennTag::NNP, PennTag::VBZ]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tagger().tag(&[]).is_empty());
    }

    #[test]
    fn test_training_is_deterministic() {
        let words = ["The", "smaller", "the", "object", ",", "the", "less", "information", "the", "model", "has"];
        assert_eq!(tagger().tag(&words), tagger().tag(&words));
    }

    #[test]
    fn test_learns_the_corpus() {
        let tagger = tagger();
        assert!(tagger.training_accuracy() > 0.8, "{}", tagger.training_accuracy());
    }
}
