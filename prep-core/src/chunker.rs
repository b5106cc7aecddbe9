//! # Named-entity chunking
//!
//! Groups POS-tagged tokens into entity chunks in two steps.
//!
//! **Candidates.** A candidate is a maximal run of proper nouns (`NNP`,
//! `NNPS`). A nationality adjective directly before the run belongs to it
//! ("*Swiss* Federal Institute"), and `of` continues the run after an
//! institution or territory head ("Kingdom *of* Württemberg"). Leading titles
//! ("Dr.", "President") are left out of the entity but mark it as a person.
//! A nationality adjective on its own ("the *German* government") is a GPE.
//!
//! **Labels**, first match wins:
//!
//! | Rule                                   | Example                   | Label        |
//! |----------------------------------------|---------------------------|--------------|
//! | preceded by a title                    | Mr. **Johnson**           | PERSON       |
//! | whole span in a gazetteer              | **Federal Reserve**       | (its list)   |
//! | facility/org/location/GPE head word    | **Stanford University**   | (head type)  |
//! | known first name or surname            | **Albert Einstein**       | PERSON       |
//! | all-caps single token                  | **CERN**                  | ORGANIZATION |
//! | otherwise                              | **Ulmerton**              | MaxEnt model |
//!
//! In binary mode every entity is labelled `NE`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::corpus::AnnotatedSentence;
use crate::features::span_features;
use crate::gazetteer::Gazetteers;
use crate::maxent::MaxEntModel;
use crate::postag::{PennTag, TaggedToken};

/// Entity type of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityLabel {
    #[serde(rename = "PERSON")]
    Person,
    #[serde(rename = "ORGANIZATION")]
    Organization,
    /// Geo-political entity: countries, cities, states.
    #[serde(rename = "GPE")]
    Gpe,
    /// Non-political places: rivers, mountains, regions.
    #[serde(rename = "LOCATION")]
    Location,
    /// Buildings, airports, bridges.
    #[serde(rename = "FACILITY")]
    Facility,
    /// Geo-social-political groups ("Americans").
    #[serde(rename = "GSP")]
    Gsp,
    /// Untyped entity, used in binary mode.
    #[serde(rename = "NE")]
    Entity,
}

impl EntityLabel {
    pub const ALL: [EntityLabel; 7] = [
        EntityLabel::Person,
        EntityLabel::Organization,
        EntityLabel::Gpe,
        EntityLabel::Location,
        EntityLabel::Facility,
        EntityLabel::Gsp,
        EntityLabel::Entity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORGANIZATION",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Location => "LOCATION",
            EntityLabel::Facility => "FACILITY",
            EntityLabel::Gsp => "GSP",
            EntityLabel::Entity => "NE",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityLabel::ALL
            .iter()
            .find(|l| l.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown entity label {s:?}"))
    }
}

/// Consecutive tokens forming one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChunk {
    pub label: EntityLabel,
    pub tokens: Vec<TaggedToken>,
}

impl EntityChunk {
    /// Token texts joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One element of a chunked sentence: a bare token or an entity group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chunk {
    Token(TaggedToken),
    Entity(EntityChunk),
}

/// Groups tagged tokens into entity chunks.
pub trait EntityChunker: Send + Sync {
    /// Chunks cover the input in order; every token appears exactly once.
    fn chunk(&self, tokens: &[TaggedToken], binary: bool) -> Vec<Chunk>;
}

/// Rule-first chunker with a MaxEnt fallback for unknown names.
#[derive(Debug, Clone)]
pub struct NeChunker {
    gazetteers: Gazetteers,
    classifier: MaxEntModel<EntityLabel>,
}

impl NeChunker {
    /// Trains the fallback classifier on the entity spans of `corpus`.
    pub fn train(
        corpus: &[AnnotatedSentence],
        gazetteers: Gazetteers,
        iterations: usize,
        learning_rate: f64,
        l2: f64,
    ) -> Self {
        let mut examples = Vec::new();
        for sentence in corpus {
            let words = sentence.words();
            for (start, end, label) in sentence.entity_spans() {
                if let Ok(label) = label.parse::<EntityLabel>() {
                    examples.push((span_features(&words, start, end, &gazetteers), label));
                }
            }
        }

        let mut classifier = MaxEntModel::new();
        let accuracy = classifier.train(&examples, iterations, learning_rate, l2);
        info!(spans = examples.len(), accuracy, "entity classifier trained");

        Self { gazetteers, classifier }
    }

    pub fn gazetteers(&self) -> &Gazetteers {
        &self.gazetteers
    }

    /// Labelled entity spans as `(start, end, label)`, `end` exclusive, in order.
    pub fn spans(&self, tokens: &[TaggedToken]) -> Vec<(usize, usize, EntityLabel)> {
        let words: Vec<&str> = tokens.iter().map(|t| t.token.text.as_str()).collect();
        let tags: Vec<PennTag> = tokens.iter().map(|t| t.tag).collect();
        let gaz = &self.gazetteers;
        let mut spans = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let nationality = tags[i] == PennTag::JJ && gaz.is_nationality(words[i]);
            let starts_run = tags[i].is_proper_noun()
                || (nationality && tags.get(i + 1).map(PennTag::is_proper_noun).unwrap_or(false));

            if !starts_run {
                if nationality {
                    spans.push((i, i + 1, EntityLabel::Gpe));
                }
                i += 1;
                continue;
            }

            let end = self.run_end(&words, &tags, i + 1);
            let mut start = i;
            let mut titled = false;
            while end - start > 1 && gaz.is_title(words[start]) {
                start += 1;
                titled = true;
            }
            // a title on its own is not an entity
            if !(end - start == 1 && gaz.is_title(words[start])) {
                let label = self.label_span(&words, start, end, titled);
                spans.push((start, end, label));
            }
            i = end;
        }
        spans
    }

    /// Extends a proper-noun run starting before `j`, joining across `of` after a head word.
    fn run_end(&self, words: &[&str], tags: &[PennTag], mut j: usize) -> usize {
        loop {
            while j < tags.len() && tags[j].is_proper_noun() {
                j += 1;
            }
            let joins_of = j + 1 < tags.len()
                && words[j].eq_ignore_ascii_case("of")
                && tags[j + 1].is_proper_noun()
                && self.gazetteers.of_heads.contains(&words[j - 1].to_lowercase());
            if !joins_of {
                return j;
            }
            j += 1;
        }
    }

    fn label_span(&self, words: &[&str], start: usize, end: usize, titled: bool) -> EntityLabel {
        if titled {
            return EntityLabel::Person;
        }
        let gaz = &self.gazetteers;
        let lower: Vec<String> = words[start..end].iter().map(|w| w.to_lowercase()).collect();
        let joined = lower.join(" ");

        if gaz.facilities.contains(&joined) {
            return EntityLabel::Facility;
        }
        if gaz.organizations.contains(&joined) {
            return EntityLabel::Organization;
        }
        if gaz.locations.contains(&joined) {
            return EntityLabel::Location;
        }
        if gaz.gpe.contains(&joined) {
            return EntityLabel::Gpe;
        }
        if gaz.gsp.contains(&joined) {
            return EntityLabel::Gsp;
        }

        if lower.len() > 1 {
            // last word, first word, and the word before "of"
            let mut heads = vec![&lower[lower.len() - 1], &lower[0]];
            if let Some(of) = lower.iter().position(|w| w == "of").filter(|&p| p > 0) {
                heads.push(&lower[of - 1]);
            }
            for head in heads {
                if gaz.facility_heads.contains(head) {
                    return EntityLabel::Facility;
                }
                if gaz.org_heads.contains(head) {
                    return EntityLabel::Organization;
                }
                if gaz.location_heads.contains(head) {
                    return EntityLabel::Location;
                }
                if gaz.gpe_heads.contains(head) {
                    return EntityLabel::Gpe;
                }
            }
        }

        if gaz.first_names.contains(&lower[0])
            || (lower.len() <= 3 && gaz.surnames.contains(&lower[lower.len() - 1]))
        {
            return EntityLabel::Person;
        }

        let word = words[start];
        if end - start == 1 && word.chars().count() > 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
            return EntityLabel::Organization;
        }

        self.classifier
            .predict(&span_features(words, start, end, gaz))
            .map(|(label, _)| label)
            .unwrap_or(EntityLabel::Person)
    }
}

impl EntityChunker for NeChunker {
    fn chunk(&self, tokens: &[TaggedToken], binary: bool) -> Vec<Chunk> {
        let mut chunks = Vec::with_capacity(tokens.len());
        let mut next = 0;
        for (start, end, label) in self.spans(tokens) {
            chunks.extend(tokens[next..start].iter().cloned().map(Chunk::Token));
            chunks.push(Chunk::Entity(EntityChunk {
                label: if binary { EntityLabel::Entity } else { label },
                tokens: tokens[start..end].to_vec(),
            }));
            next = end;
        }
        chunks.extend(tokens[next..].iter().cloned().map(Chunk::Token));
        chunks
    }
}
