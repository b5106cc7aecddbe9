//! # Part-of-speech tags
//!
//! The closed Penn Treebank tagset, the coarse WordNet classes derived from it
//! and the tagger capability the pipeline consumes.
//!
//! | Tag    | Meaning                     | Tag   | Meaning                        |
//! |--------|-----------------------------|-------|--------------------------------|
//! | `NN`   | noun, singular              | `VB`  | verb, base form                |
//! | `NNS`  | noun, plural                | `VBD` | verb, past tense               |
//! | `NNP`  | proper noun                 | `VBG` | gerund / present participle    |
//! | `JJ`   | adjective                   | `VBN` | past participle                |
//! | `RB`   | adverb                      | `VBZ` | 3rd person singular present    |
//! | `DT`   | determiner                  | `IN`  | preposition / subordinator     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tokenizer::Token;

/// Penn Treebank part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PennTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    JJ,
    JJR,
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    PRP,
    /// Possessive pronoun (`PRP$`)
    PRPS,
    RB,
    RBR,
    RBS,
    /// Particle
    RP,
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun (`WP$`)
    WPS,
    /// Wh-adverb
    WRB,
    /// `$`
    Dollar,
    /// `#`
    Pound,
    /// Opening quote (two backticks)
    OpenQuote,
    /// Closing quote (`''`)
    CloseQuote,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `.` (sentence-final punctuation, including `!` and `?`)
    Period,
    /// `:` (colons, semicolons, dashes, ellipses)
    Colon,
}

impl PennTag {
    /// Every tag, in declaration order.
    pub const ALL: [PennTag; 45] = [
        PennTag::CC, PennTag::CD, PennTag::DT, PennTag::EX, PennTag::FW, PennTag::IN,
        PennTag::JJ, PennTag::JJR, PennTag::JJS, PennTag::LS, PennTag::MD, PennTag::NN,
        PennTag::NNS, PennTag::NNP, PennTag::NNPS, PennTag::PDT, PennTag::POS, PennTag::PRP,
        PennTag::PRPS, PennTag::RB, PennTag::RBR, PennTag::RBS, PennTag::RP, PennTag::SYM,
        PennTag::TO, PennTag::UH, PennTag::VB, PennTag::VBD, PennTag::VBG, PennTag::VBN,
        PennTag::VBP, PennTag::VBZ, PennTag::WDT, PennTag::WP, PennTag::WPS, PennTag::WRB,
        PennTag::Dollar, PennTag::Pound, PennTag::OpenQuote, PennTag::CloseQuote,
        PennTag::LeftParen, PennTag::RightParen, PennTag::Comma, PennTag::Period, PennTag::Colon,
    ];

    /// Treebank spelling of the tag (e.g. `"PRP$"`, `"''"`, `"."`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PennTag::CC => "CC",
            PennTag::CD => "CD",
            PennTag::DT => "DT",
            PennTag::EX => "EX",
            PennTag::FW => "FW",
            PennTag::IN => "IN",
            PennTag::JJ => "JJ",
            PennTag::JJR => "JJR",
            PennTag::JJS => "JJS",
            PennTag::LS => "LS",
            PennTag::MD => "MD",
            PennTag::NN => "NN",
            PennTag::NNS => "NNS",
            PennTag::NNP => "NNP",
            PennTag::NNPS => "NNPS",
            PennTag::PDT => "PDT",
            PennTag::POS => "POS",
            PennTag::PRP => "PRP",
            PennTag::PRPS => "PRP$",
            PennTag::RB => "RB",
            PennTag::RBR => "RBR",
            PennTag::RBS => "RBS",
            PennTag::RP => "RP",
            PennTag::SYM => "SYM",
            PennTag::TO => "TO",
            PennTag::UH => "UH",
            PennTag::VB => "VB",
            PennTag::VBD => "VBD",
            PennTag::VBG => "VBG",
            PennTag::VBN => "VBN",
            PennTag::VBP => "VBP",
            PennTag::VBZ => "VBZ",
            PennTag::WDT => "WDT",
            PennTag::WP => "WP",
            PennTag::WPS => "WP$",
            PennTag::WRB => "WRB",
            PennTag::Dollar => "$",
            PennTag::Pound => "#",
            PennTag::OpenQuote => "``",
            PennTag::CloseQuote => "''",
            PennTag::LeftParen => "(",
            PennTag::RightParen => ")",
            PennTag::Comma => ",",
            PennTag::Period => ".",
            PennTag::Colon => ":",
        }
    }

    pub fn is_proper_noun(&self) -> bool {
        matches!(self, PennTag::NNP | PennTag::NNPS)
    }

    /// Coarse class used by the lexicon: first letter `J`, `N`, `V`, `R`, otherwise noun.
    pub fn word_class(&self) -> WordClass {
        match self.as_str().as_bytes()[0] {
            b'J' => WordClass::Adjective,
            b'V' => WordClass::Verb,
            b'R' => WordClass::Adverb,
            _ => WordClass::Noun,
        }
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Penn Treebank tag {:?}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for PennTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PennTag::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl Serialize for PennTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PennTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// WordNet-style coarse part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Adjective,
    #[default]
    Noun,
    Verb,
    Adverb,
}

impl WordClass {
    /// WordNet's one-letter code (`a`, `n`, `v`, `r`).
    pub fn code(&self) -> char {
        match self {
            WordClass::Adjective => 'a',
            WordClass::Noun => 'n',
            WordClass::Verb => 'v',
            WordClass::Adverb => 'r',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" | "s" => Some(WordClass::Adjective),
            "n" => Some(WordClass::Noun),
            "v" => Some(WordClass::Verb),
            "r" => Some(WordClass::Adverb),
            _ => None,
        }
    }
}

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PennTag,
}

/// Assigns one tag per token, using the whole sequence as context.
pub trait PosTagger: Send + Sync {
    /// The result has exactly `tokens.len()` entries, in input order.
    fn tag(&self, tokens: &[&str]) -> Vec<PennTag>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip_spelling() {
        for tag in PennTag::ALL {
            assert_eq!(tag.as_str().parse::<PennTag>(), Ok(tag));
        }
        assert!("XYZ".parse::<PennTag>().is_err());
    }

    #[test]
    fn test_word_class_mapping() {
        assert_eq!(PennTag::JJS.word_class(), WordClass::Adjective);
        assert_eq!(PennTag::NNS.word_class(), WordClass::Noun);
        assert_eq!(PennTag::VBD.word_class(), WordClass::Verb);
        assert_eq!(PennTag::RBR.word_class(), WordClass::Adverb);
        // unmapped tags fall back to noun
        assert_eq!(PennTag::DT.word_class(), WordClass::Noun);
        assert_eq!(PennTag::Period.word_class(), WordClass::Noun);
        // WRB starts with W, not R
        assert_eq!(PennTag::WRB.word_class(), WordClass::Noun);
    }

    #[test]
    fn test_serde_uses_treebank_spelling() {
        let json = serde_json::to_string(&PennTag::PRPS).unwrap();
        assert_eq!(json, "\"PRP$\"");
        let tag: PennTag = serde_json::from_str("\"''\"").unwrap();
        assert_eq!(tag, PennTag::CloseQuote);
    }

    #[test]
    fn test_word_class_codes() {
        assert_eq!(WordClass::from_code("v"), Some(WordClass::Verb));
        assert_eq!(WordClass::from_code("s"), Some(WordClass::Adjective));
        assert_eq!(WordClass::from_code("x"), None);
        assert_eq!(WordClass::Adverb.code(), 'r');
    }
}
