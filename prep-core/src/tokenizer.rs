//! # English tokenizer
//!
//! Splits raw text into sentences and word tokens. Every token keeps its byte
//! offsets in the original text so later stages (chunking, the web view) can
//! point back at the source.
//!
//! ## Scheme
//!
//! 1. **Sentences**: a run of `.`, `!` or `?` (plus closing quotes/brackets)
//!    followed by whitespace ends a sentence, unless the period follows a known
//!    abbreviation or a single-letter initial, or the next word starts lowercase.
//! 2. **Words** (per sentence, Treebank conventions):
//!    - whitespace separates chunks;
//!    - opening quotes/brackets and leading symbols are split from the front;
//!    - closing quotes/brackets, `,;:?!%` and `...` are split from the back;
//!    - the period of the sentence's last chunk is split off, other periods stay
//!      (`U.S.`, `Dr.`, `etc.` in mid-sentence);
//!    - commas and colons between digits stay (`1,000`, `10:30`);
//!    - contractions split: `don't` -> `do`, `n't`; `she'll` -> `she`, `'ll`;
//!      `cannot` -> `can`, `not`; `gonna` -> `gon`, `na`.
//!
//! ```rust
//! use prep_core::tokenizer::{Tokenizer, TreebankTokenizer};
//!
//! let tokenizer = TreebankTokenizer::default();
//! let words: Vec<String> = tokenizer
//!     .words("Dr. Smith can't come.")
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, ["Dr.", "Smith", "ca", "n't", "come", "."]);
//! ```

use serde::{Deserialize, Serialize};

/// A token cut from the original text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Token text, e.g. `"Einstein"`, `","`, `"n't"`.
    pub text: String,
    /// Start byte in the original text (inclusive).
    pub start: usize,
    /// End byte in the original text (exclusive).
    pub end: usize,
    /// Position in the token sequence (0, 1, 2...).
    pub index: usize,
}

/// A sentence span of the original text, trimmed of surrounding whitespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Word and sentence segmentation, injected into the pipeline.
pub trait Tokenizer: Send + Sync {
    /// Word tokens in document order, re-indexed from zero.
    fn words(&self, text: &str) -> Vec<Token>;
    /// Sentence spans in document order.
    fn sentences(&self, text: &str) -> Vec<Sentence>;
}

/// Abbreviations whose trailing period does not end a sentence (lowercase, no dot).
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "gen", "gov", "sen", "rep",
    "col", "capt", "lt", "sgt", "rev", "hon", "pres", "inc", "ltd", "co", "corp", "dept", "univ",
    "vs", "etc", "al", "approx", "est", "fig", "no", "vol", "pp", "ed", "eds", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "wed", "thu",
    "fri", "sat", "sun", "e.g", "i.e", "u.s", "u.k", "a.m", "p.m", "ave", "blvd", "rd",
];

/// Characters split from the front of a chunk.
const LEADING: &[char] = &[
    '"', '\'', '\u{201C}', '\u{2018}', '(', '[', '{', '<', ',', ';', ':', '?', '!', '@', '#', '$',
    '%', '&', '*',
];

/// Characters split from the back of a chunk.
const TRAILING: &[char] = &[
    '"', '\'', '\u{201D}', '\u{2019}', ')', ']', '}', '>', ',', ';', ':', '?', '!', '%', '*',
];

/// Characters always split inside a chunk.
const INNER: &[char] = &['"', '(', ')', '[', ']', '{', '}', '<', '>', ';', '?', '!', '&'];

/// Sentence-final closers that belong to the sentence they close.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}'];

/// Contraction suffixes split off a word (ASCII and typographic apostrophe).
const CONTRACTIONS: &[&str] = &[
    "n't", "'ll", "'re", "'ve", "'s", "'m", "'d", "n\u{2019}t", "\u{2019}ll", "\u{2019}re",
    "\u{2019}ve", "\u{2019}s", "\u{2019}m", "\u{2019}d",
];

/// Whole words split at a fixed byte position (`cannot` -> `can` + `not`).
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("wanna", 3),
    ("gimme", 3),
    ("lemme", 3),
];

/// Punkt-style sentence splitter plus Treebank-style word splitter.
#[derive(Debug, Clone)]
pub struct TreebankTokenizer {
    abbreviations: Vec<String>,
}

impl Default for TreebankTokenizer {
    fn default() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TreebankTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an abbreviation (case-insensitive, without the final period).
    pub fn add_abbreviation(&mut self, abbreviation: &str) {
        let abbreviation = abbreviation.trim_end_matches('.').to_lowercase();
        if !self.abbreviations.contains(&abbreviation) {
            self.abbreviations.push(abbreviation);
        }
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        let word = word.trim_end_matches('.').to_lowercase();
        self.abbreviations.iter().any(|a| *a == word)
    }

    /// Does the period ending `word` (which precedes `next`) terminate a sentence?
    fn period_ends_sentence(&self, word: &str, next: Option<char>) -> bool {
        let bare = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        if self.is_abbreviation(bare) {
            return false;
        }
        // Initials such as "J." in "J. R. R. Tolkien"
        let stem = bare.trim_end_matches('.');
        if stem.chars().count() == 1 && stem.chars().all(char::is_uppercase) {
            return false;
        }
        !matches!(next, Some(c) if c.is_lowercase())
    }
}

impl Tokenizer for TreebankTokenizer {
    fn sentences(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut sentence_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (_, ch) = chars[i];
            if !matches!(ch, '.' | '!' | '?') {
                i += 1;
                continue;
            }

            // Run of terminators, then closing quotes/brackets
            let mut j = i;
            while j < chars.len() && matches!(chars[j].1, '.' | '!' | '?') {
                j += 1;
            }
            let all_periods = chars[i..j].iter().all(|(_, c)| *c == '.');
            let single_period = all_periods && j - i == 1;
            while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                j += 1;
            }
            let end = chars.get(j).map(|(b, _)| *b).unwrap_or(text.len());

            // A boundary needs whitespace (or end of text) after it
            let followed_by_space = j >= chars.len() || chars[j].1.is_whitespace();
            if !followed_by_space {
                i = j.max(i + 1);
                continue;
            }

            let next = chars[j..].iter().map(|(_, c)| *c).find(|c| !c.is_whitespace());
            let is_boundary = if single_period {
                let word_start = chars[..i]
                    .iter()
                    .rposition(|(_, c)| c.is_whitespace())
                    .map(|p| chars[p].0 + chars[p].1.len_utf8())
                    .unwrap_or(0)
                    .max(sentence_start);
                self.period_ends_sentence(&text[word_start..end], next)
            } else if all_periods {
                // ellipsis
                !matches!(next, Some(c) if c.is_lowercase())
            } else {
                true
            };

            if is_boundary {
                push_sentence(&mut sentences, text, sentence_start, end);
                sentence_start = end;
            }
            i = j.max(i + 1);
        }

        push_sentence(&mut sentences, text, sentence_start, text.len());
        sentences
    }

    fn words(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for sentence in self.sentences(text) {
            let chunks = whitespace_chunks(&sentence.text, sentence.start);
            let last = chunks.len().saturating_sub(1);
            for (n, (chunk, start)) in chunks.into_iter().enumerate() {
                split_chunk(chunk, start, n == last, &mut tokens);
            }
        }
        reindex(tokens)
    }
}

/// Splits on whitespace only, keeping every other character in its chunk.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn words(&self, text: &str) -> Vec<Token> {
        let tokens = whitespace_chunks(text, 0)
            .into_iter()
            .map(|(chunk, start)| Token {
                text: chunk.to_string(),
                start,
                end: start + chunk.len(),
                index: 0,
            })
            .collect();
        reindex(tokens)
    }

    fn sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        push_sentence(&mut sentences, text, 0, text.len());
        sentences
    }
}

fn reindex(mut tokens: Vec<Token>) -> Vec<Token> {
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// Adds the trimmed `text[start..end]` as a sentence, if not blank.
fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let slice = &text[start..end];
    let trimmed_start = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = start + trimmed_start;
    sentences.push(Sentence {
        text: trimmed.to_string(),
        start,
        end: start + trimmed.len(),
    });
}

/// Whitespace-separated chunks with their absolute byte offsets.
fn whitespace_chunks(text: &str, base: usize) -> Vec<(&str, usize)> {
    let mut chunks = Vec::new();
    let mut chunk_start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = chunk_start.take() {
                chunks.push((&text[s..i], base + s));
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(i);
        }
    }
    if let Some(s) = chunk_start {
        chunks.push((&text[s..], base + s));
    }
    chunks
}

/// Adds a token directly.
fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize) {
    tokens.push(Token {
        text: text.to_string(),
        start,
        end: start + text.len(),
        index: 0,
    });
}

/// Splits one whitespace chunk into Treebank tokens.
fn split_chunk(chunk: &str, start: usize, sentence_final: bool, tokens: &mut Vec<Token>) {
    let mut lo = 0;
    let mut hi = chunk.len();

    // Leading symbols, one character at a time
    while lo < hi {
        let rest = &chunk[lo..hi];
        if rest.starts_with("...") {
            push_token(tokens, "...", start + lo);
            lo += 3;
            continue;
        }
        let Some(ch) = rest.chars().next() else { break };
        // "'s" or "'ll" alone is a contraction, not a quote
        if ch == '\'' && CONTRACTIONS.iter().any(|c| rest.eq_ignore_ascii_case(c)) {
            break;
        }
        if LEADING.contains(&ch) && rest.len() > ch.len_utf8() {
            push_token(tokens, &rest[..ch.len_utf8()], start + lo);
            lo += ch.len_utf8();
        } else {
            break;
        }
    }

    // Trailing symbols, collected back to front
    let mut trailing: Vec<(usize, usize)> = Vec::new();
    while lo < hi {
        let rest = &chunk[lo..hi];
        if rest.len() > 3 && rest.ends_with("...") {
            hi -= 3;
            trailing.push((hi, hi + 3));
            continue;
        }
        let Some(ch) = rest.chars().next_back() else { break };
        let width = ch.len_utf8();
        if rest.len() == width {
            break;
        }
        let is_final_period = ch == '.' && sentence_final;
        if TRAILING.contains(&ch) || is_final_period {
            hi -= width;
            trailing.push((hi, hi + width));
        } else {
            break;
        }
    }

    if lo < hi {
        split_inner(&chunk[lo..hi], start + lo, tokens);
    }
    for (s, e) in trailing.into_iter().rev() {
        push_token(tokens, &chunk[s..e], start + s);
    }
}

/// Splits inner punctuation and `--`, then contractions on each remaining piece.
fn split_inner(core: &str, start: usize, tokens: &mut Vec<Token>) {
    let chars: Vec<(usize, char)> = core.char_indices().collect();
    let mut piece_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];
        let prev_digit = i > 0 && chars[i - 1].1.is_ascii_digit();
        let next_digit = chars.get(i + 1).map(|(_, c)| c.is_ascii_digit()).unwrap_or(false);

        if ch == '-' && chars.get(i + 1).map(|(_, c)| *c == '-').unwrap_or(false) {
            split_contractions(&core[piece_start..pos], start + piece_start, tokens);
            push_token(tokens, "--", start + pos);
            i += 2;
            piece_start = pos + 2;
            continue;
        }

        let separates = INNER.contains(&ch) || ((ch == ',' || ch == ':') && !(prev_digit && next_digit));
        if separates {
            split_contractions(&core[piece_start..pos], start + piece_start, tokens);
            push_token(tokens, &core[pos..pos + ch.len_utf8()], start + pos);
            piece_start = pos + ch.len_utf8();
        }
        i += 1;
    }
    split_contractions(&core[piece_start..], start + piece_start, tokens);
}

fn ends_with_ignore_case(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len()
        && word.is_char_boundary(word.len() - suffix.len())
        && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

fn split_contractions(piece: &str, start: usize, tokens: &mut Vec<Token>) {
    if piece.is_empty() {
        return;
    }

    if let Some((_, at)) = SPLIT_WORDS.iter().find(|(w, _)| piece.eq_ignore_ascii_case(w)) {
        push_token(tokens, &piece[..*at], start);
        push_token(tokens, &piece[*at..], start + at);
        return;
    }

    for suffix in CONTRACTIONS {
        if piece.len() > suffix.len() && ends_with_ignore_case(piece, suffix) {
            let cut = piece.len() - suffix.len();
            let base = &piece[..cut];
            if base.ends_with('\'') || base.ends_with('\u{2019}') {
                continue;
            }
            push_token(tokens, base, start);
            push_token(tokens, &piece[cut..], start + cut);
            return;
        }
    }

    push_token(tokens, piece, start);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        TreebankTokenizer::default()
            .words(text)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    fn sentences(text: &str) -> Vec<String> {
        TreebankTokenizer::default()
            .sentences(text)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_words_basic() {
        assert_eq!(words("Cars are running fast"), ["Cars", "are", "running", "fast"]);
        assert_eq!(words("the cat sat on the mat"), ["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_words_punctuation() {
        assert_eq!(
            words("Small objects are, well, small."),
            ["Small", "objects", "are", ",", "well", ",", "small", "."]
        );
        assert_eq!(
            words("plates! (really) \"yes\""),
            ["plates", "!", "(", "really", ")", "\"", "yes", "\""]
        );
    }

    #[test]
    fn test_words_contractions() {
        assert_eq!(words("I don't know"), ["I", "do", "n't", "know"]);
        assert_eq!(words("She'll say it's John's"), ["She", "'ll", "say", "it", "'s", "John", "'s"]);
        assert_eq!(words("We cannot stop"), ["We", "can", "not", "stop"]);
        assert_eq!(words("gonna go"), ["gon", "na", "go"]);
    }

    #[test]
    fn test_words_numbers_and_mid_sentence_periods() {
        assert_eq!(words("It cost 1,000 dollars at 10:30"), ["It", "cost", "1,000", "dollars", "at", "10:30"]);
        assert_eq!(words("The U.S. economy grew."), ["The", "U.S.", "economy", "grew", "."]);
    }

    #[test]
    fn test_words_dashes_and_ellipsis() {
        assert_eq!(words("wait--what"), ["wait", "--", "what"]);
        assert_eq!(words("so... maybe"), ["so", "...", "maybe"]);
    }

    #[test]
    fn test_words_unicode_and_hyphens() {
        assert_eq!(
            words("He was born in Württemberg, a German-born physicist."),
            ["He", "was", "born", "in", "Württemberg", ",", "a", "German-born", "physicist", "."]
        );
    }

    #[test]
    fn test_words_offsets_point_into_text() {
        let text = "Albert Einstein was born in Ulm.";
        let tokens = TreebankTokenizer::default().words(text);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(&text[token.start..token.end], token.text);
            assert_eq!(token.index, i);
        }
        assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("."));
    }

    #[test]
    fn test_words_empty() {
        assert!(words("").is_empty());
        assert!(words("   \n ").is_empty());
    }

    #[test]
    fn test_sentences_basic() {
        assert_eq!(
            sentences("He moved to Switzerland. He was 17! Was he? Yes."),
            ["He moved to Switzerland.", "He was 17!", "Was he?", "Yes."]
        );
    }

    #[test]
    fn test_sentences_abbreviations_and_initials() {
        assert_eq!(
            sentences("Dr. Smith met J. R. Tolkien in the U.S. yesterday. Then he left."),
            ["Dr. Smith met J. R. Tolkien in the U.S. yesterday.", "Then he left."]
        );
    }

    #[test]
    fn test_sentences_lowercase_continuation() {
        assert_eq!(sentences("It was approx. five metres. ok then."), ["It was approx. five metres. ok then."]);
    }

    #[test]
    fn test_sentences_closing_quote() {
        assert_eq!(
            sentences("He said \"stop.\" Then it stopped."),
            ["He said \"stop.\"", "Then it stopped."]
        );
    }

    #[test]
    fn test_sentence_offsets() {
        let text = "  First one.  Second one.  ";
        for sentence in TreebankTokenizer::default().sentences(text) {
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
    }

    #[test]
    fn test_whitespace_tokenizer() {
        let tokens = WhitespaceTokenizer.words("Quick brown fox!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Quick", "brown", "fox!"]);
        assert_eq!(WhitespaceTokenizer.sentences(" a. b. ").len(), 1);
    }
}
