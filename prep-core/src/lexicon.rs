//! # Dictionary lookup for lemmatization
//!
//! [`MorphyLexicon`] follows WordNet's *morphy*: an inflected form is resolved
//! first through a per-class exception table (irregular forms such as
//! `ran -> run`), otherwise by detaching regular suffixes (`-ies -> -y`,
//! `-ing -> -e`, ...) and keeping the candidates that are known base forms.
//! The shortest surviving candidate is the lemma.
//!
//! Lookups are exact: `"Cars"` is not a key, only `"cars"` is.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PrepError, Result};
use crate::postag::WordClass;

/// Dictionary form lookup: `None` means the word is unknown for that class.
pub trait Lexicon: Send + Sync {
    fn lemma(&self, word: &str, class: WordClass) -> Option<String>;
}

const NOUNS: &str = "
    age agreement algorithm analysis animal apple area article baby bag baker ball bank beach bed
    bird boat body bone book bottle box boy brain bread bridge brother building business cake calf
    camera car carrot castle cat center century chair chance change child church city class climber
    cloud club coat coin color company computer contract cookie country criterion cup dance datum
    day delegate detection detector distance doctor dog door dream dress economist economy egg
    employee end energy engine engineer essay exam example experiment eye face fact family farm
    farmer father feature field finding fire fish flight flood flower fog food foot forest friend
    fruit game garden girl glass gold goose government grass group hair half hand head heart hill
    hole horse hotel hour house human husband idea image influence information insect institute
    instruction interest island job journal key kingdom kitchen knife lady lake landmark launch law
    leaf lesson letter library license life light line lion list machine man map market match meal
    meeting member message metal mile milk mind minute mistake model moment money month morning
    mother motion mountain mouse mouth mural music name nation night nose note novel number nurse
    object office oil owner ox page painting pair paper parent park part party path patient pen
    pencil people person phenomenon philosophy phone physicist physics picture piece pillar pilot
    pixel place plan planet plant plate play player pocket poem point potato present price prize
    problem profit program project prototype queen question rate reason region relativity report
    reporter researcher restaurant result rival river road rock roof room rope rule salt sand
    satellite school science scientist sculpture sea season seat seed sheep shelf ship shirt shoe
    shop side sign sister skill skin sky smile snow song sound space sport spring square star state
    station step stone store storm story street student study summit sun system table tail talk task
    tea teacher team technology temperature test theory thief thing ticket time tool tooth top
    tourist town toy trade train tree trip trouble truck university vegetable view village voice
    volunteer wall war watch water wave way weather week whale wheel wife window wing winter wolf
    woman wood word work world yard year
";

const VERBS: &str = "
    address announce answer arrange arrive ask bake be bear become begin believe borrow break bring
    build burn buy call carry change chase check choose clean climb close coach collect come compete
    connect cook cross cry dance decide defeat delay deliver describe design destroy detect develop
    die discover display do drink drive eat enjoy explain fail fall feel find finish fix flow fly
    follow forget found get give go grade grow happen hate have hear help hide hire hold hope hurry
    identify improve interview invite join jump keep kick kill kiss knock know land laugh launch
    lead learn leave lie like list listen live look lose love make manage marry mean measure meet
    miss mix move need notice occupy offer open order own pack paint pass pay perform pick plan
    plant play point prefer prepare print promise protect publish pull push rain raise reach read
    receive remember repair repeat reply report resign rest return run rush save say see sell share
    shop shout show sign sing sit smell smile sound speak stand start stay stop study suggest
    support swim take talk teach tell test thank think throw touch train translate travel treat
    trust try turn understand use visit wait walk want wash watch wear win wish wonder work worry
    write
";

const ADJECTIVES: &str = "
    bad best big chief discernible distant early easy electric famous far fast few first good great
    happy hard heavy high large last late little long low many modern new next old other scientific
    short small strong theoretical useful visible well wide young
";

const ADVERBS: &str = "
    again already also always carefully far fast hard heavily just never often only quickly sharply
    slowly still today together too very visually well
";

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"), ("men", "man"), ("women", "woman"), ("mice", "mouse"), ("geese", "goose"),
    ("feet", "foot"), ("teeth", "tooth"), ("people", "person"), ("data", "datum"),
    ("analyses", "analysis"), ("criteria", "criterion"), ("phenomena", "phenomenon"), ("lives", "life"),
    ("knives", "knife"), ("wives", "wife"), ("leaves", "leaf"), ("wolves", "wolf"), ("halves", "half"),
    ("oxen", "ox"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("was", "be"), ("were", "be"), ("is", "be"), ("am", "be"), ("are", "be"), ("been", "be"),
    ("has", "have"), ("had", "have"), ("did", "do"), ("done", "do"), ("does", "do"), ("ran", "run"),
    ("went", "go"), ("gone", "go"), ("saw", "see"), ("seen", "see"), ("ate", "eat"), ("eaten", "eat"),
    ("wrote", "write"), ("written", "write"), ("took", "take"), ("taken", "take"), ("gave", "give"),
    ("given", "give"), ("came", "come"), ("got", "get"), ("gotten", "get"), ("made", "make"),
    ("born", "bear"), ("bore", "bear"), ("began", "begin"), ("begun", "begin"), ("knew", "know"),
    ("known", "know"), ("said", "say"), ("sold", "sell"), ("met", "meet"), ("rose", "rise"),
    ("risen", "rise"), ("spoke", "speak"), ("spoken", "speak"), ("held", "hold"), ("found", "find"),
    ("thought", "think"), ("brought", "bring"), ("bought", "buy"), ("built", "build"), ("grew", "grow"),
    ("grown", "grow"), ("flew", "fly"), ("flown", "fly"), ("left", "leave"), ("felt", "feel"),
    ("kept", "keep"), ("led", "lead"), ("lost", "lose"), ("paid", "pay"), ("sat", "sit"),
    ("stood", "stand"), ("told", "tell"), ("understood", "understand"), ("won", "win"),
    ("wore", "wear"), ("drove", "drive"), ("driven", "drive"), ("fell", "fall"), ("fallen", "fall"),
    ("became", "become"), ("chose", "choose"), ("chosen", "choose"), ("broke", "break"),
    ("broken", "break"), ("forgot", "forget"), ("forgotten", "forget"), ("hid", "hide"),
    ("hidden", "hide"), ("threw", "throw"), ("thrown", "throw"), ("swam", "swim"), ("swum", "swim"),
    ("sang", "sing"), ("sung", "sing"), ("drank", "drink"), ("drunk", "drink"), ("heard", "hear"),
    ("meant", "mean"), ("taught", "teach"), ("lay", "lie"), ("lain", "lie"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"), ("further", "far"),
    ("farther", "far"), ("furthest", "far"), ("farthest", "far"), ("elder", "old"), ("eldest", "old"),
    ("less", "little"), ("least", "little"), ("more", "many"), ("most", "many"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"), ("best", "well"), ("farther", "far"), ("further", "far"), ("harder", "hard"),
    ("hardest", "hard"), ("faster", "fast"), ("fastest", "fast"),
];

/// Regular suffix detachment rules `(suffix, replacement)`.
fn rules(class: WordClass) -> &'static [(&'static str, &'static str)] {
    match class {
        WordClass::Noun => &[
            ("s", ""), ("ses", "s"), ("xes", "x"), ("ves", "f"), ("zes", "z"), ("ches", "ch"),
            ("shes", "sh"), ("men", "man"), ("ies", "y"),
        ],
        WordClass::Verb => &[
            ("s", ""), ("ies", "y"), ("es", "e"), ("es", ""), ("ed", "e"), ("ed", ""), ("ing", "e"),
            ("ing", ""),
        ],
        WordClass::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
        WordClass::Adverb => &[],
    }
}

const CLASSES: [WordClass; 4] = [WordClass::Noun, WordClass::Verb, WordClass::Adjective, WordClass::Adverb];

/// WordNet-morphy style lexicon over per-class base forms and exception tables.
#[derive(Debug, Clone, Default)]
pub struct MorphyLexicon {
    lemmas: HashMap<WordClass, HashSet<String>>,
    /// class -> inflected form -> base forms
    exceptions: HashMap<WordClass, HashMap<String, Vec<String>>>,
}

impl MorphyLexicon {
    /// Empty lexicon; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English lexicon.
    pub fn english() -> Self {
        let mut lexicon = Self::new();
        for (class, words) in [
            (WordClass::Noun, NOUNS),
            (WordClass::Verb, VERBS),
            (WordClass::Adjective, ADJECTIVES),
            (WordClass::Adverb, ADVERBS),
        ] {
            for word in words.split_whitespace() {
                lexicon.add_lemma(word, class);
            }
        }
        for (class, table) in [
            (WordClass::Noun, NOUN_EXCEPTIONS),
            (WordClass::Verb, VERB_EXCEPTIONS),
            (WordClass::Adjective, ADJECTIVE_EXCEPTIONS),
            (WordClass::Adverb, ADVERB_EXCEPTIONS),
        ] {
            for (form, lemma) in table {
                lexicon.add_exception(form, class, lemma);
            }
        }
        lexicon
    }

    /// Loads `lemmas.tsv` (`word<TAB>class`) and `exceptions.tsv`
    /// (`form<TAB>class<TAB>lemma`) from `dir`. Classes are `n`, `v`, `a` (or `s`) and `r`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut lexicon = Self::new();

        let lemmas = dir.join("lemmas.tsv");
        for (line, fields) in read_tsv(&lemmas, "lemma list")? {
            match fields.as_slice() {
                [word, code] => lexicon.add_lemma(word, parse_class(code, &lemmas, line)?),
                _ => return Err(malformed("lemma list", &lemmas, line, "expected word<TAB>class")),
            }
        }

        let exceptions = dir.join("exceptions.tsv");
        for (line, fields) in read_tsv(&exceptions, "exception list")? {
            match fields.as_slice() {
                [form, code, lemma] => {
                    let class = parse_class(code, &exceptions, line)?;
                    lexicon.add_exception(form, class, lemma);
                }
                _ => {
                    return Err(malformed(
                        "exception list",
                        &exceptions,
                        line,
                        "expected form<TAB>class<TAB>lemma",
                    ))
                }
            }
        }

        debug!(dir = %dir.display(), lemmas = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }

    pub fn add_lemma(&mut self, word: &str, class: WordClass) {
        self.lemmas.entry(class).or_default().insert(word.to_string());
    }

    pub fn add_exception(&mut self, form: &str, class: WordClass, lemma: &str) {
        let bases = self
            .exceptions
            .entry(class)
            .or_default()
            .entry(form.to_string())
            .or_default();
        if !bases.iter().any(|b| b == lemma) {
            bases.push(lemma.to_string());
        }
    }

    pub fn contains(&self, word: &str, class: WordClass) -> bool {
        self.lemmas.get(&class).map(|set| set.contains(word)).unwrap_or(false)
    }

    /// Number of base forms over all classes.
    pub fn len(&self) -> usize {
        CLASSES.iter().filter_map(|c| self.lemmas.get(c)).map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every known base form `word` may reduce to, before picking the shortest.
    pub fn candidates(&self, word: &str, class: WordClass) -> Vec<String> {
        if let Some(bases) = self.exceptions.get(&class).and_then(|t| t.get(word)) {
            let mut found: Vec<String> = std::iter::once(word.to_string())
                .chain(bases.iter().cloned())
                .filter(|w| self.contains(w, class))
                .collect();
            found.dedup();
            return found;
        }

        let mut forms = vec![word.to_string()];
        for &(suffix, replacement) in rules(class) {
            let Some(stem) = word.strip_suffix(suffix) else { continue };
            forms.push(format!("{stem}{replacement}"));
            // running -> runn -> run, bigger -> bigg -> big
            if replacement.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    forms.push(undoubled.to_string());
                }
            }
        }

        let mut found: Vec<String> = Vec::new();
        for form in forms {
            if self.contains(&form, class) && !found.contains(&form) {
                found.push(form);
            }
        }
        found
    }
}

impl Lexicon for MorphyLexicon {
    fn lemma(&self, word: &str, class: WordClass) -> Option<String> {
        // first of the shortest, so ties keep rule order
        let mut best: Option<String> = None;
        for candidate in self.candidates(word, class) {
            if best.as_ref().map(|b| candidate.len() < b.len()).unwrap_or(true) {
                best = Some(candidate);
            }
        }
        best
    }
}

/// `stem` without its last letter when it ends in a doubled consonant.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let (last, before) = (chars.next()?, chars.next()?);
    let consonant = last.is_ascii_alphabetic() && !"aeiou".contains(last);
    (last == before && consonant && stem.len() > 2).then(|| &stem[..stem.len() - last.len_utf8()])
}

fn read_tsv(path: &Path, resource: &'static str) -> Result<Vec<(usize, Vec<String>)>> {
    let source = std::fs::read_to_string(path).map_err(|e| PrepError::unavailable(resource, path, e))?;
    Ok(source
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty() && !l.starts_with('#'))
        .map(|(i, l)| (i + 1, l.split('\t').map(|f| f.trim().to_string()).collect()))
        .collect())
}

fn parse_class(code: &str, path: &Path, line: usize) -> Result<WordClass> {
    WordClass::from_code(code)
        .ok_or_else(|| malformed("lexicon", path, line, &format!("unknown word class {code:?}")))
}

fn malformed(resource: &'static str, path: &Path, line: usize, reason: &str) -> PrepError {
    warn!(path = %path.display(), line, reason, "rejecting {resource}");
    PrepError::MalformedResource {
        resource,
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, class: WordClass) -> Option<String> {
        MorphyLexicon::english().lemma(word, class)
    }

    #[test]
    fn test_regular_suffixes() {
        assert_eq!(lemma("cars", WordClass::Noun).as_deref(), Some("car"));
        assert_eq!(lemma("studies", WordClass::Noun).as_deref(), Some("study"));
        assert_eq!(lemma("detected", WordClass::Verb).as_deref(), Some("detect"));
        assert_eq!(lemma("moved", WordClass::Verb).as_deref(), Some("move"));
        assert_eq!(lemma("identifying", WordClass::Verb).as_deref(), Some("identify"));
        assert_eq!(lemma("smaller", WordClass::Adjective).as_deref(), Some("small"));
    }

    #[test]
    fn test_ves_plurals() {
        // no exception entries for these
        assert_eq!(lemma("calves", WordClass::Noun).as_deref(), Some("calf"));
        assert_eq!(lemma("shelves", WordClass::Noun).as_deref(), Some("shelf"));
        assert_eq!(lemma("thieves", WordClass::Noun).as_deref(), Some("thief"));
        assert_eq!(lemma("wolves", WordClass::Noun).as_deref(), Some("wolf"));
    }

    #[test]
    fn test_common_plurals_and_past_tenses() {
        let nouns = [
            ("dogs", "dog"),
            ("cats", "cat"),
            ("gardens", "garden"),
            ("boxes", "box"),
            ("glasses", "glass"),
        ];
        for (word, base) in nouns {
            assert_eq!(lemma(word, WordClass::Noun).as_deref(), Some(base), "{word}");
        }
        let verbs = [("visited", "visit"), ("burned", "burn"), ("founded", "found"), ("planned", "plan")];
        for (word, base) in verbs {
            assert_eq!(lemma(word, WordClass::Verb).as_deref(), Some(base), "{word}");
        }
    }

    #[test]
    fn test_doubled_consonants() {
        assert_eq!(lemma("running", WordClass::Verb).as_deref(), Some("run"));
        assert_eq!(lemma("stopped", WordClass::Verb).as_deref(), Some("stop"));
        assert_eq!(lemma("bigger", WordClass::Adjective).as_deref(), Some("big"));
    }

    #[test]
    fn test_exceptions() {
        assert_eq!(lemma("was", WordClass::Verb).as_deref(), Some("be"));
        assert_eq!(lemma("born", WordClass::Verb).as_deref(), Some("bear"));
        assert_eq!(lemma("children", WordClass::Noun).as_deref(), Some("child"));
        assert_eq!(lemma("better", WordClass::Adjective).as_deref(), Some("good"));
        assert_eq!(lemma("better", WordClass::Adverb).as_deref(), Some("well"));
    }

    #[test]
    fn test_base_forms_map_to_themselves() {
        assert_eq!(lemma("car", WordClass::Noun).as_deref(), Some("car"));
        assert_eq!(lemma("fast", WordClass::Adverb).as_deref(), Some("fast"));
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        assert_eq!(lemma("Cars", WordClass::Noun), None);
        assert_eq!(lemma("xyzzy", WordClass::Noun), None);
        // class matters: "running" is not a noun here
        assert_eq!(lemma("running", WordClass::Noun), None);
    }

    #[test]
    fn test_from_dir() {
        let dir = std::env::temp_dir().join(format!("prep-lexicon-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("lemmas.tsv"), "# base forms\ngoose\tn\ngo\tv\n").unwrap();
        std::fs::write(dir.join("exceptions.tsv"), "geese\tn\tgoose\nwent\tv\tgo\n").unwrap();

        let lexicon = MorphyLexicon::from_dir(&dir).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lemma("geese", WordClass::Noun).as_deref(), Some("goose"));
        assert_eq!(lexicon.lemma("went", WordClass::Verb).as_deref(), Some("go"));
        assert_eq!(lexicon.lemma("cars", WordClass::Noun), None);

        std::fs::write(dir.join("lemmas.tsv"), "goose\tq\n").unwrap();
        let err = MorphyLexicon::from_dir(&dir).unwrap_err();
        assert!(matches!(err, PrepError::MalformedResource { line: 1, .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir() {
        let err = MorphyLexicon::from_dir("/no/such/lexicon").unwrap_err();
        assert!(matches!(err, PrepError::ResourceUnavailable { .. }));
    }
}
