//! # Feature extraction
//!
//! Sparse binary features for the two statistical models:
//!
//! - **POS tagging** ([`pos_features`]): the classic greedy-tagger template. The
//!   current word, its one- to three-letter suffixes and first character, the two
//!   previous *predicted* tags, and the words and suffixes in a ±2 window. Words
//!   are normalized first so that years, numbers and hyphenated compounds share
//!   statistics. The shape of the word next to the shape of each neighbour lets
//!   unseen names inherit `NNP` ("Sundar Pichai") without dragging a lowercase
//!   verb between two names along.
//! - **Entity typing** ([`span_features`]): shape, boundary words, head word,
//!   context and gazetteer hits of a candidate entity span.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::gazetteer::Gazetteers;

/// Active features of one item, by name.
///
/// Kept ordered so that dot products are summed in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Ex: `{"bias": 1.0, "i suffix=ein": 1.0}`.
    pub features: BTreeMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.features.insert(key.into(), value);
    }

    /// Adds a binary feature `name=value`.
    pub fn add(&mut self, name: &str, value: &str) {
        self.insert(format!("{name}={value}"), 1.0);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

pub const START: [&str; 2] = ["-START-", "-START2-"];
pub const END: [&str; 2] = ["-END-", "-END2-"];

/// Maps a word onto the form used as context.
///
/// Hyphenated compounds become `!HYPHEN`, four-digit numbers `!YEAR`, other
/// digit-initial tokens `!DIGITS`; everything else is lowercased.
pub fn normalize(word: &str) -> String {
    if word.contains('-') && !word.starts_with('-') {
        "!HYPHEN".to_string()
    } else if word.len() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
        "!YEAR".to_string()
    } else if word.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
        "!DIGITS".to_string()
    } else {
        word.to_lowercase()
    }
}

/// Builds the padded context `[-START-, -START2-, w0.., -END-, -END2-]`.
pub fn context(words: &[&str]) -> Vec<String> {
    START
        .iter()
        .map(|s| s.to_string())
        .chain(words.iter().map(|w| normalize(w)))
        .chain(END.iter().map(|s| s.to_string()))
        .collect()
}

/// Last `n` characters of `word`.
fn suffix(word: &str, n: usize) -> String {
    let count = word.chars().count();
    word.chars().skip(count.saturating_sub(n)).collect()
}

/// Coarse orthographic shape: `Xx`, `x`, `X`, `d`, `p` or `m` (mixed).
pub fn shape(word: &str) -> &'static str {
    let mut chars = word.chars();
    let Some(first) = chars.next() else { return "m" };
    if word.chars().all(|c| c.is_numeric() || c == ',' || c == '.') && first.is_numeric() {
        "d"
    } else if word.chars().all(|c| !c.is_alphanumeric()) {
        "p"
    } else if word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()) {
        "X"
    } else if first.is_uppercase() && chars.all(|c| !c.is_uppercase()) {
        "Xx"
    } else if word.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()) {
        "x"
    } else {
        "m"
    }
}

/// Features of token `i` of `words` given the padded `context` and the previous two predicted tags.
pub fn pos_features(i: usize, words: &[&str], context: &[String], prev: &str, prev2: &str) -> FeatureVector {
    let mut fv = FeatureVector::new();
    let word = words[i];
    let word_shape = shape(word);
    let prev_shape = if i > 0 { shape(words[i - 1]) } else { START[0] };
    let next_shape = words.get(i + 1).map(|w| shape(w)).unwrap_or(END[0]);
    // context is padded by two on each side
    let i = i + START.len();

    fv.insert("bias", 1.0);
    fv.add("i suffix", &suffix(word, 3));
    fv.add("i suffix2", &suffix(word, 2));
    fv.add("i suffix1", &suffix(word, 1));
    fv.add("i pref1", &word.chars().next().map(String::from).unwrap_or_default());
    fv.add("i shape", word_shape);
    fv.add("i shape+i-1 shape", &format!("{word_shape} {prev_shape}"));
    fv.add("i shape+i+1 shape", &format!("{word_shape} {next_shape}"));
    fv.add("i-1 tag", prev);
    fv.add("i-2 tag", prev2);
    fv.add("i tag+i-2 tag", &format!("{prev} {prev2}"));
    fv.add("i word", &context[i]);
    fv.add("i-1 tag+i word", &format!("{prev} {}", context[i]));
    fv.add("i-1 word", &context[i - 1]);
    fv.add("i-1 suffix", &suffix(&context[i - 1], 3));
    fv.add("i-2 word", &context[i - 2]);
    fv.add("i+1 word", &context[i + 1]);
    fv.add("i+1 suffix", &suffix(&context[i + 1], 3));
    fv.add("i+2 word", &context[i + 2]);

    if i == START.len() && word_shape == "Xx" {
        fv.insert("i title-first", 1.0);
    }
    fv
}

/// Features of the entity span `words[start..end]`.
pub fn span_features(words: &[&str], start: usize, end: usize, gazetteers: &Gazetteers) -> FeatureVector {
    let mut fv = FeatureVector::new();
    let span = &words[start..end];
    let Some((first, last)) = span.first().zip(span.last()) else {
        return fv;
    };
    let lower: Vec<String> = span.iter().map(|w| w.to_lowercase()).collect();
    let joined = lower.join(" ");

    fv.insert("bias", 1.0);
    fv.add("len", &span.len().min(4).to_string());
    fv.add("first", &first.to_lowercase());
    fv.add("last", &last.to_lowercase());
    fv.add("last suffix", &suffix(&last.to_lowercase(), 3));
    fv.add("first suffix", &suffix(&first.to_lowercase(), 3));
    fv.add("shape", &span.iter().map(|w| shape(w)).collect::<Vec<_>>().join(" "));
    if lower.iter().any(|w| w == "of") {
        fv.insert("has_of", 1.0);
    }
    if span.iter().any(|w| w.contains('-')) {
        fv.insert("has_hyphen", 1.0);
    }

    let prev = if start > 0 { words[start - 1].to_lowercase() } else { START[0].to_string() };
    let next = words.get(end).map(|w| w.to_lowercase()).unwrap_or_else(|| END[0].to_string());
    fv.add("prev", &prev);
    fv.add("next", &next);

    if lower.iter().any(|w| gazetteers.first_names.contains(w)) {
        fv.insert("gaz_first_name", 1.0);
    }
    if lower.iter().any(|w| gazetteers.surnames.contains(w)) {
        fv.insert("gaz_surname", 1.0);
    }
    if gazetteers.gpe.contains(&joined) {
        fv.insert("gaz_gpe", 1.0);
    }
    if gazetteers.locations.contains(&joined) {
        fv.insert("gaz_location", 1.0);
    }
    if gazetteers.organizations.contains(&joined) {
        fv.insert("gaz_organization", 1.0);
    }
    if gazetteers.facilities.contains(&joined) {
        fv.insert("gaz_facility", 1.0);
    }
    if gazetteers.titles.contains(&prev) {
        fv.insert("prev_is_title", 1.0);
    }
    fv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("German-born"), "!HYPHEN");
        assert_eq!(normalize("-LRB-"), "-lrb-");
        assert_eq!(normalize("1879"), "!YEAR");
        assert_eq!(normalize("21"), "!DIGITS");
        assert_eq!(normalize("3.5"), "!DIGITS");
        assert_eq!(normalize("Cars"), "cars");
    }

    #[test]
    fn test_shape() {
        assert_eq!(shape("Einstein"), "Xx");
        assert_eq!(shape("NASA"), "X");
        assert_eq!(shape("cars"), "x");
        assert_eq!(shape("1,000"), "d");
        assert_eq!(shape(","), "p");
        assert_eq!(shape("iPhone"), "m");
    }

    #[test]
    fn test_context_padding() {
        let ctx = context(&["The", "cat"]);
        assert_eq!(ctx, ["-START-", "-START2-", "the", "cat", "-END-", "-END2-"]);
    }

    #[test]
    fn test_pos_features_window() {
        let words = ["Albert", "Einstein", "was"];
        let ctx = context(&words);
        let fv = pos_features(1, &words, &ctx, "NNP", "-START-");
        assert!(fv.features.contains_key("i word=einstein"));
        assert!(fv.features.contains_key("i-1 word=albert"));
        assert!(fv.features.contains_key("i+1 word=was"));
        assert!(fv.features.contains_key("i+2 word=-END-"));
        assert!(fv.features.contains_key("i suffix=ein"));
        assert!(fv.features.contains_key("i-1 tag=NNP"));
        assert!(!fv.features.contains_key("i title-first"));
    }

    #[test]
    fn test_pos_features_short_suffixes_and_shapes() {
        let words = ["Sundar", "Pichai", "leads"];
        let ctx = context(&words);
        let fv = pos_features(2, &words, &ctx, "NNP", "NNP");
        assert!(fv.features.contains_key("i suffix1=s"));
        assert!(fv.features.contains_key("i suffix2=ds"));
        assert!(fv.features.contains_key("i shape+i-1 shape=x Xx"));
        assert!(fv.features.contains_key("i shape+i+1 shape=x -END-"));

        let first = pos_features(0, &words, &ctx, "-START-", "-START2-");
        assert!(first.features.contains_key("i shape+i-1 shape=Xx -START-"));
        assert!(first.features.contains_key("i title-first"));
    }

    #[test]
    fn test_span_features_gazetteers() {
        let gaz = Gazetteers::english();
        let words = ["Albert", "Einstein", "was", "born", "in", "Ulm"];
        let person = span_features(&words, 0, 2, &gaz);
        assert!(person.features.contains_key("gaz_first_name"));
        assert!(person.features.contains_key("next=was"));
        let place = span_features(&words, 5, 6, &gaz);
        assert!(place.features.contains_key("gaz_gpe"));
        assert!(place.features.contains_key("prev=in"));
        assert!(place.features.contains_key("next=-END-"));
    }
}
