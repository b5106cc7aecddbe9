//! # Annotated English corpus
//!
//! Hand-annotated sentences used to train the part-of-speech tagger and the
//! entity-type classifier when the model context is loaded.
//!
//! Each token carries two annotations:
//! - a Penn Treebank tag (`NNP`, `VBD`, `.` ...);
//! - a BIO entity tag: `B-TYPE` starts an entity, `I-TYPE` continues it, `O`
//!   is outside any entity. Types are `PERSON`, `ORGANIZATION`, `GPE`,
//!   `LOCATION`, `FACILITY` and `GSP`.
//!
//! Titles such as `Mr.` or `President` stay outside the entity, and a
//! nationality adjective that modifies a plain noun is a one-word `GPE`
//! ("The **German** government").

/// One sentence, already split into tokens.
pub struct AnnotatedSentence {
    /// Raw sentence.
    pub text: &'static str,
    /// Topic, for per-domain inspection in the web UI.
    pub domain: &'static str,
    /// `(word, pos, entity)` triples. Ex: `("Ulm", "NNP", "B-GPE")`.
    pub tokens: &'static [(&'static str, &'static str, &'static str)],
}

impl AnnotatedSentence {
    pub fn words(&self) -> Vec<&'static str> {
        self.tokens.iter().map(|(w, _, _)| *w).collect()
    }

    pub fn pos_tags(&self) -> Vec<&'static str> {
        self.tokens.iter().map(|(_, p, _)| *p).collect()
    }

    /// Entity spans as `(start, end, type)`, `end` exclusive.
    pub fn entity_spans(&self) -> Vec<(usize, usize, &'static str)> {
        let mut spans = Vec::new();
        let mut open: Option<(usize, &'static str)> = None;

        for (i, (_, _, ne)) in self.tokens.iter().enumerate() {
            if let Some(label) = ne.strip_prefix("I-") {
                if matches!(open, Some((_, current)) if current == label) {
                    continue;
                }
            }
            if let Some((start, label)) = open.take() {
                spans.push((start, i, label));
            }
            if let Some(label) = ne.strip_prefix("B-").or_else(|| ne.strip_prefix("I-")) {
                open = Some((i, label));
            }
        }
        if let Some((start, label)) = open {
            spans.push((start, self.tokens.len(), label));
        }
        spans
    }
}

/// The full training corpus.
pub fn get_corpus() -> Vec<AnnotatedSentence> {
    vec![
        // ===== SCIENCE =====
        AnnotatedSentence {
            text: "Albert Einstein was born in Ulm.",
            domain: "science",
            tokens: &[
                ("Albert", "NNP", "B-PERSON"), ("Einstein", "NNP", "I-PERSON"), ("was", "VBD", "O"),
                ("born", "VBN", "O"), ("in", "IN", "O"), ("Ulm", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Marie Curie worked in Paris with her husband.",
            domain: "science",
            tokens: &[
                ("Marie", "NNP", "B-PERSON"), ("Curie", "NNP", "I-PERSON"), ("worked", "VBD", "O"),
                ("in", "IN", "O"), ("Paris", "NNP", "B-GPE"), ("with", "IN", "O"),
                ("her", "PRP$", "O"), ("husband", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "He studied physics at the Swiss Federal Institute of Technology in Zurich.",
            domain: "science",
            tokens: &[
                ("He", "PRP", "O"), ("studied", "VBD", "O"), ("physics", "NN", "O"), ("at", "IN", "O"),
                ("the", "DT", "O"), ("Swiss", "JJ", "B-ORGANIZATION"),
                ("Federal", "NNP", "I-ORGANIZATION"), ("Institute", "NNP", "I-ORGANIZATION"),
                ("of", "IN", "I-ORGANIZATION"), ("Technology", "NNP", "I-ORGANIZATION"),
                ("in", "IN", "O"), ("Zurich", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Isaac Newton described the laws of motion in his famous book.",
            domain: "science",
            tokens: &[
                ("Isaac", "NNP", "B-PERSON"), ("Newton", "NNP", "I-PERSON"), ("described", "VBD", "O"),
                ("the", "DT", "O"), ("laws", "NNS", "O"), ("of", "IN", "O"), ("motion", "NN", "O"),
                ("in", "IN", "O"), ("his", "PRP$", "O"), ("famous", "JJ", "O"), ("book", "NN", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The researchers have published their findings in a scientific journal.",
            domain: "science",
            tokens: &[
                ("The", "DT", "O"), ("researchers", "NNS", "O"), ("have", "VBP", "O"),
                ("published", "VBN", "O"), ("their", "PRP$", "O"), ("findings", "NNS", "O"),
                ("in", "IN", "O"), ("a", "DT", "O"), ("scientific", "JJ", "O"), ("journal", "NN", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "NASA will launch two satellites from Florida next month.",
            domain: "science",
            tokens: &[
                ("NASA", "NNP", "B-ORGANIZATION"), ("will", "MD", "O"), ("launch", "VB", "O"),
                ("two", "CD", "O"), ("satellites", "NNS", "O"), ("from", "IN", "O"),
                ("Florida", "NNP", "B-GPE"), ("next", "JJ", "O"), ("month", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Dr. Smith works at the Johnson Space Center in Houston.",
            domain: "science",
            tokens: &[
                ("Dr.", "NNP", "O"), ("Smith", "NNP", "B-PERSON"), ("works", "VBZ", "O"),
                ("at", "IN", "O"), ("the", "DT", "O"), ("Johnson", "NNP", "B-FACILITY"),
                ("Space", "NNP", "I-FACILITY"), ("Center", "NNP", "I-FACILITY"), ("in", "IN", "O"),
                ("Houston", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Stanford University is located near Silicon Valley.",
            domain: "science",
            tokens: &[
                ("Stanford", "NNP", "B-ORGANIZATION"), ("University", "NNP", "I-ORGANIZATION"),
                ("is", "VBZ", "O"), ("located", "VBN", "O"), ("near", "IN", "O"),
                ("Silicon", "NNP", "B-LOCATION"), ("Valley", "NNP", "I-LOCATION"), (".", ".", "O"),
            ],
        },
        // ===== COMPUTER VISION =====
        AnnotatedSentence {
            text: "Small objects are hard to detect because they occupy only a few pixels.",
            domain: "vision",
            tokens: &[
                ("Small", "JJ", "O"), ("objects", "NNS", "O"), ("are", "VBP", "O"), ("hard", "JJ", "O"),
                ("to", "TO", "O"), ("detect", "VB", "O"), ("because", "IN", "O"), ("they", "PRP", "O"),
                ("occupy", "VBP", "O"), ("only", "RB", "O"), ("a", "DT", "O"), ("few", "JJ", "O"),
                ("pixels", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The model has a harder time identifying cars without visible wheels.",
            domain: "vision",
            tokens: &[
                ("The", "DT", "O"), ("model", "NN", "O"), ("has", "VBZ", "O"), ("a", "DT", "O"),
                ("harder", "JJR", "O"), ("time", "NN", "O"), ("identifying", "VBG", "O"),
                ("cars", "NNS", "O"), ("without", "IN", "O"), ("visible", "JJ", "O"),
                ("wheels", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Our team is working on a faster algorithm for detecting small objects.",
            domain: "vision",
            tokens: &[
                ("Our", "PRP$", "O"), ("team", "NN", "O"), ("is", "VBZ", "O"), ("working", "VBG", "O"),
                ("on", "IN", "O"), ("a", "DT", "O"), ("faster", "JJR", "O"), ("algorithm", "NN", "O"),
                ("for", "IN", "O"), ("detecting", "VBG", "O"), ("small", "JJ", "O"),
                ("objects", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Wheels and license plates are useful features for the detector!",
            domain: "vision",
            tokens: &[
                ("Wheels", "NNS", "O"), ("and", "CC", "O"), ("license", "NN", "O"),
                ("plates", "NNS", "O"), ("are", "VBP", "O"), ("useful", "JJ", "O"),
                ("features", "NNS", "O"), ("for", "IN", "O"), ("the", "DT", "O"),
                ("detector", "NN", "O"), ("!", ".", "O"),
            ],
        },
        // ===== BUSINESS =====
        AnnotatedSentence {
            text: "The company announced that its profits rose sharply last year.",
            domain: "business",
            tokens: &[
                ("The", "DT", "O"), ("company", "NN", "O"), ("announced", "VBD", "O"), ("that", "IN", "O"),
                ("its", "PRP$", "O"), ("profits", "NNS", "O"), ("rose", "VBD", "O"),
                ("sharply", "RB", "O"), ("last", "JJ", "O"), ("year", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Apple opened a new store in London on Monday.",
            domain: "business",
            tokens: &[
                ("Apple", "NNP", "B-ORGANIZATION"), ("opened", "VBD", "O"), ("a", "DT", "O"),
                ("new", "JJ", "O"), ("store", "NN", "O"), ("in", "IN", "O"), ("London", "NNP", "B-GPE"),
                ("on", "IN", "O"), ("Monday", "NNP", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Microsoft and Google are competing for the best engineers in California.",
            domain: "business",
            tokens: &[
                ("Microsoft", "NNP", "B-ORGANIZATION"), ("and", "CC", "O"),
                ("Google", "NNP", "B-ORGANIZATION"), ("are", "VBP", "O"), ("competing", "VBG", "O"),
                ("for", "IN", "O"), ("the", "DT", "O"), ("best", "JJS", "O"), ("engineers", "NNS", "O"),
                ("in", "IN", "O"), ("California", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Toyota sold more cars in Japan than any other company.",
            domain: "business",
            tokens: &[
                ("Toyota", "NNP", "B-ORGANIZATION"), ("sold", "VBD", "O"), ("more", "JJR", "O"),
                ("cars", "NNS", "O"), ("in", "IN", "O"), ("Japan", "NNP", "B-GPE"), ("than", "IN", "O"),
                ("any", "DT", "O"), ("other", "JJ", "O"), ("company", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The Federal Reserve raised interest rates again.",
            domain: "business",
            tokens: &[
                ("The", "DT", "O"), ("Federal", "NNP", "B-ORGANIZATION"),
                ("Reserve", "NNP", "I-ORGANIZATION"), ("raised", "VBD", "O"), ("interest", "NN", "O"),
                ("rates", "NNS", "O"), ("again", "RB", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Goldman Sachs hired John Smith as its chief economist.",
            domain: "business",
            tokens: &[
                ("Goldman", "NNP", "B-ORGANIZATION"), ("Sachs", "NNP", "I-ORGANIZATION"),
                ("hired", "VBD", "O"), ("John", "NNP", "B-PERSON"), ("Smith", "NNP", "I-PERSON"),
                ("as", "IN", "O"), ("its", "PRP$", "O"), ("chief", "JJ", "O"), ("economist", "NN", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Mr. Johnson said the economy would grow slowly this year.",
            domain: "business",
            tokens: &[
                ("Mr.", "NNP", "O"), ("Johnson", "NNP", "B-PERSON"), ("said", "VBD", "O"),
                ("the", "DT", "O"), ("economy", "NN", "O"), ("would", "MD", "O"), ("grow", "VB", "O"),
                ("slowly", "RB", "O"), ("this", "DT", "O"), ("year", "NN", "O"), (".", ".", "O"),
            ],
        },
        // ===== POLITICS =====
        AnnotatedSentence {
            text: "Barack Obama visited Germany and met Angela Merkel in Berlin.",
            domain: "politics",
            tokens: &[
                ("Barack", "NNP", "B-PERSON"), ("Obama", "NNP", "I-PERSON"), ("visited", "VBD", "O"),
                ("Germany", "NNP", "B-GPE"), ("and", "CC", "O"), ("met", "VBD", "O"),
                ("Angela", "NNP", "B-PERSON"), ("Merkel", "NNP", "I-PERSON"), ("in", "IN", "O"),
                ("Berlin", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "President Obama spoke to reporters at the White House.",
            domain: "politics",
            tokens: &[
                ("President", "NNP", "O"), ("Obama", "NNP", "B-PERSON"), ("spoke", "VBD", "O"),
                ("to", "TO", "O"), ("reporters", "NNS", "O"), ("at", "IN", "O"), ("the", "DT", "O"),
                ("White", "NNP", "B-FACILITY"), ("House", "NNP", "I-FACILITY"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The United Nations held a meeting in Geneva last week.",
            domain: "politics",
            tokens: &[
                ("The", "DT", "O"), ("United", "NNP", "B-ORGANIZATION"),
                ("Nations", "NNPS", "I-ORGANIZATION"), ("held", "VBD", "O"), ("a", "DT", "O"),
                ("meeting", "NN", "O"), ("in", "IN", "O"), ("Geneva", "NNP", "B-GPE"),
                ("last", "JJ", "O"), ("week", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The German government announced new rules for electric cars.",
            domain: "politics",
            tokens: &[
                ("The", "DT", "O"), ("German", "JJ", "B-GPE"), ("government", "NN", "O"),
                ("announced", "VBD", "O"), ("new", "JJ", "O"), ("rules", "NNS", "O"), ("for", "IN", "O"),
                ("electric", "JJ", "O"), ("cars", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The European Union and the United States signed a trade agreement.",
            domain: "politics",
            tokens: &[
                ("The", "DT", "O"), ("European", "NNP", "B-ORGANIZATION"),
                ("Union", "NNP", "I-ORGANIZATION"), ("and", "CC", "O"), ("the", "DT", "O"),
                ("United", "NNP", "B-GPE"), ("States", "NNPS", "I-GPE"), ("signed", "VBD", "O"),
                ("a", "DT", "O"), ("trade", "NN", "O"), ("agreement", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Americans and Canadians watched the game together.",
            domain: "politics",
            tokens: &[
                ("Americans", "NNPS", "B-GSP"), ("and", "CC", "O"), ("Canadians", "NNPS", "B-GSP"),
                ("watched", "VBD", "O"), ("the", "DT", "O"), ("game", "NN", "O"),
                ("together", "RB", "O"), (".", ".", "O"),
            ],
        },
        // ===== SPORTS & CULTURE =====
        AnnotatedSentence {
            text: "Lionel Messi moved from Paris Saint-Germain to Inter Miami in 2023.",
            domain: "sports",
            tokens: &[
                ("Lionel", "NNP", "B-PERSON"), ("Messi", "NNP", "I-PERSON"), ("moved", "VBD", "O"),
                ("from", "IN", "O"), ("Paris", "NNP", "B-ORGANIZATION"),
                ("Saint-Germain", "NNP", "I-ORGANIZATION"), ("to", "TO", "O"),
                ("Inter", "NNP", "B-ORGANIZATION"), ("Miami", "NNP", "I-ORGANIZATION"),
                ("in", "IN", "O"), ("2023", "CD", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Shakespeare wrote many plays that are still performed today.",
            domain: "culture",
            tokens: &[
                ("Shakespeare", "NNP", "B-PERSON"), ("wrote", "VBD", "O"), ("many", "JJ", "O"),
                ("plays", "NNS", "O"), ("that", "WDT", "O"), ("are", "VBP", "O"), ("still", "RB", "O"),
                ("performed", "VBN", "O"), ("today", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The Golden Gate Bridge is the most famous landmark in San Francisco.",
            domain: "culture",
            tokens: &[
                ("The", "DT", "O"), ("Golden", "NNP", "B-FACILITY"), ("Gate", "NNP", "I-FACILITY"),
                ("Bridge", "NNP", "I-FACILITY"), ("is", "VBZ", "O"), ("the", "DT", "O"),
                ("most", "RBS", "O"), ("famous", "JJ", "O"), ("landmark", "NN", "O"), ("in", "IN", "O"),
                ("San", "NNP", "B-GPE"), ("Francisco", "NNP", "I-GPE"), (".", ".", "O"),
            ],
        },
        // ===== GEOGRAPHY =====
        AnnotatedSentence {
            text: "The Thames flows through London into the North Sea.",
            domain: "geography",
            tokens: &[
                ("The", "DT", "O"), ("Thames", "NNP", "B-LOCATION"), ("flows", "VBZ", "O"),
                ("through", "IN", "O"), ("London", "NNP", "B-GPE"), ("into", "IN", "O"),
                ("the", "DT", "O"), ("North", "NNP", "B-LOCATION"), ("Sea", "NNP", "I-LOCATION"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Many climbers have died on Mount Everest in the Himalayas.",
            domain: "geography",
            tokens: &[
                ("Many", "JJ", "O"), ("climbers", "NNS", "O"), ("have", "VBP", "O"), ("died", "VBN", "O"),
                ("on", "IN", "O"), ("Mount", "NNP", "B-LOCATION"), ("Everest", "NNP", "I-LOCATION"),
                ("in", "IN", "O"), ("the", "DT", "O"), ("Himalayas", "NNPS", "B-LOCATION"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Flights from Heathrow Airport were delayed by heavy fog.",
            domain: "geography",
            tokens: &[
                ("Flights", "NNS", "O"), ("from", "IN", "O"), ("Heathrow", "NNP", "B-FACILITY"),
                ("Airport", "NNP", "I-FACILITY"), ("were", "VBD", "O"), ("delayed", "VBN", "O"),
                ("by", "IN", "O"), ("heavy", "JJ", "O"), ("fog", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "They quickly moved to Switzerland, where he began his studies.",
            domain: "geography",
            tokens: &[
                ("They", "PRP", "O"), ("quickly", "RB", "O"), ("moved", "VBD", "O"), ("to", "TO", "O"),
                ("Switzerland", "NNP", "B-GPE"), (",", ",", "O"), ("where", "WRB", "O"),
                ("he", "PRP", "O"), ("began", "VBD", "O"), ("his", "PRP$", "O"),
                ("studies", "NNS", "O"), (".", ".", "O"),
            ],
        },
        // ===== EVERYDAY =====
        AnnotatedSentence {
            text: "She is running faster than her brother.",
            domain: "everyday",
            tokens: &[
                ("She", "PRP", "O"), ("is", "VBZ", "O"), ("running", "VBG", "O"), ("faster", "RBR", "O"),
                ("than", "IN", "O"), ("her", "PRP$", "O"), ("brother", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The children were playing in the garden while their parents talked.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("children", "NNS", "O"), ("were", "VBD", "O"),
                ("playing", "VBG", "O"), ("in", "IN", "O"), ("the", "DT", "O"), ("garden", "NN", "O"),
                ("while", "IN", "O"), ("their", "PRP$", "O"), ("parents", "NNS", "O"),
                ("talked", "VBD", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "I don't think the results were better than expected.",
            domain: "everyday",
            tokens: &[
                ("I", "PRP", "O"), ("do", "VBP", "O"), ("n't", "RB", "O"), ("think", "VB", "O"),
                ("the", "DT", "O"), ("results", "NNS", "O"), ("were", "VBD", "O"),
                ("better", "JJR", "O"), ("than", "IN", "O"), ("expected", "VBN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "It was raining heavily when we arrived at the station.",
            domain: "everyday",
            tokens: &[
                ("It", "PRP", "O"), ("was", "VBD", "O"), ("raining", "VBG", "O"), ("heavily", "RB", "O"),
                ("when", "WRB", "O"), ("we", "PRP", "O"), ("arrived", "VBD", "O"), ("at", "IN", "O"),
                ("the", "DT", "O"), ("station", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Who wrote the letter that was found on the table?",
            domain: "everyday",
            tokens: &[
                ("Who", "WP", "O"), ("wrote", "VBD", "O"), ("the", "DT", "O"), ("letter", "NN", "O"),
                ("that", "WDT", "O"), ("was", "VBD", "O"), ("found", "VBN", "O"), ("on", "IN", "O"),
                ("the", "DT", "O"), ("table", "NN", "O"), ("?", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "There are three reasons why the project failed.",
            domain: "everyday",
            tokens: &[
                ("There", "EX", "O"), ("are", "VBP", "O"), ("three", "CD", "O"), ("reasons", "NNS", "O"),
                ("why", "WRB", "O"), ("the", "DT", "O"), ("project", "NN", "O"), ("failed", "VBD", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The old bridge across the river was built in 1879.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("old", "JJ", "O"), ("bridge", "NN", "O"), ("across", "IN", "O"),
                ("the", "DT", "O"), ("river", "NN", "O"), ("was", "VBD", "O"), ("built", "VBN", "O"),
                ("in", "IN", "O"), ("1879", "CD", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Students should read the instructions carefully before the exam.",
            domain: "everyday",
            tokens: &[
                ("Students", "NNS", "O"), ("should", "MD", "O"), ("read", "VB", "O"), ("the", "DT", "O"),
                ("instructions", "NNS", "O"), ("carefully", "RB", "O"), ("before", "IN", "O"),
                ("the", "DT", "O"), ("exam", "NN", "O"), (".", ".", "O"),
            ],
        },
        // ===== PEOPLE =====
        AnnotatedSentence {
            text: "Emma Watson opened the new library in Oxford last spring.",
            domain: "people",
            tokens: &[
                ("Emma", "NNP", "B-PERSON"), ("Watson", "NNP", "I-PERSON"), ("opened", "VBD", "O"),
                ("the", "DT", "O"), ("new", "JJ", "O"), ("library", "NN", "O"), ("in", "IN", "O"),
                ("Oxford", "NNP", "B-GPE"), ("last", "JJ", "O"), ("spring", "NN", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Kofi Annan led the talks between the two countries.",
            domain: "people",
            tokens: &[
                ("Kofi", "NNP", "B-PERSON"), ("Annan", "NNP", "I-PERSON"), ("led", "VBD", "O"),
                ("the", "DT", "O"), ("talks", "NNS", "O"), ("between", "IN", "O"),
                ("the", "DT", "O"), ("two", "CD", "O"), ("countries", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Rafael Nadal defeated his rival in four sets.",
            domain: "people",
            tokens: &[
                ("Rafael", "NNP", "B-PERSON"), ("Nadal", "NNP", "I-PERSON"),
                ("defeated", "VBD", "O"), ("his", "PRP$", "O"), ("rival", "NN", "O"),
                ("in", "IN", "O"), ("four", "CD", "O"), ("sets", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Greta Thunberg addressed the delegates at the summit in Madrid.",
            domain: "people",
            tokens: &[
                ("Greta", "NNP", "B-PERSON"), ("Thunberg", "NNP", "I-PERSON"),
                ("addressed", "VBD", "O"), ("the", "DT", "O"), ("delegates", "NNS", "O"),
                ("at", "IN", "O"), ("the", "DT", "O"), ("summit", "NN", "O"), ("in", "IN", "O"),
                ("Madrid", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Jacinda Ardern resigned after five years in office.",
            domain: "people",
            tokens: &[
                ("Jacinda", "NNP", "B-PERSON"), ("Ardern", "NNP", "I-PERSON"),
                ("resigned", "VBD", "O"), ("after", "IN", "O"), ("five", "CD", "O"),
                ("years", "NNS", "O"), ("in", "IN", "O"), ("office", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Satya Nadella runs Microsoft from Redmond.",
            domain: "people",
            tokens: &[
                ("Satya", "NNP", "B-PERSON"), ("Nadella", "NNP", "I-PERSON"), ("runs", "VBZ", "O"),
                ("Microsoft", "NNP", "B-ORGANIZATION"), ("from", "IN", "O"),
                ("Redmond", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Serena Williams won the tournament and thanked her fans.",
            domain: "people",
            tokens: &[
                ("Serena", "NNP", "B-PERSON"), ("Williams", "NNP", "I-PERSON"), ("won", "VBD", "O"),
                ("the", "DT", "O"), ("tournament", "NN", "O"), ("and", "CC", "O"),
                ("thanked", "VBD", "O"), ("her", "PRP$", "O"), ("fans", "NNS", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Tim Cook manages a company with thousands of employees.",
            domain: "people",
            tokens: &[
                ("Tim", "NNP", "B-PERSON"), ("Cook", "NNP", "I-PERSON"), ("manages", "VBZ", "O"),
                ("a", "DT", "O"), ("company", "NN", "O"), ("with", "IN", "O"),
                ("thousands", "NNS", "O"), ("of", "IN", "O"), ("employees", "NNS", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Chinua Achebe wrote novels about villages in Nigeria.",
            domain: "people",
            tokens: &[
                ("Chinua", "NNP", "B-PERSON"), ("Achebe", "NNP", "I-PERSON"), ("wrote", "VBD", "O"),
                ("novels", "NNS", "O"), ("about", "IN", "O"), ("villages", "NNS", "O"),
                ("in", "IN", "O"), ("Nigeria", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Ngozi Okonjo-Iweala joined the World Bank in 1982.",
            domain: "people",
            tokens: &[
                ("Ngozi", "NNP", "B-PERSON"), ("Okonjo-Iweala", "NNP", "I-PERSON"),
                ("joined", "VBD", "O"), ("the", "DT", "O"), ("World", "NNP", "B-ORGANIZATION"),
                ("Bank", "NNP", "I-ORGANIZATION"), ("in", "IN", "O"), ("1982", "CD", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Jensen Huang founded Nvidia with two friends.",
            domain: "people",
            tokens: &[
                ("Jensen", "NNP", "B-PERSON"), ("Huang", "NNP", "I-PERSON"),
                ("founded", "VBD", "O"), ("Nvidia", "NNP", "B-ORGANIZATION"), ("with", "IN", "O"),
                ("two", "CD", "O"), ("friends", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Yuki Tanaka teaches mathematics at a school in Osaka.",
            domain: "people",
            tokens: &[
                ("Yuki", "NNP", "B-PERSON"), ("Tanaka", "NNP", "I-PERSON"), ("teaches", "VBZ", "O"),
                ("mathematics", "NN", "O"), ("at", "IN", "O"), ("a", "DT", "O"),
                ("school", "NN", "O"), ("in", "IN", "O"), ("Osaka", "NNP", "B-GPE"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Lars Eriksson owns three restaurants in Stockholm.",
            domain: "people",
            tokens: &[
                ("Lars", "NNP", "B-PERSON"), ("Eriksson", "NNP", "I-PERSON"), ("owns", "VBZ", "O"),
                ("three", "CD", "O"), ("restaurants", "NNS", "O"), ("in", "IN", "O"),
                ("Stockholm", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Amara Okafor works for Zenith Labs in Lagos.",
            domain: "people",
            tokens: &[
                ("Amara", "NNP", "B-PERSON"), ("Okafor", "NNP", "I-PERSON"), ("works", "VBZ", "O"),
                ("for", "IN", "O"), ("Zenith", "NNP", "B-ORGANIZATION"),
                ("Labs", "NNP", "I-ORGANIZATION"), ("in", "IN", "O"), ("Lagos", "NNP", "B-GPE"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Carlos Mendez studies the behaviour of whales.",
            domain: "people",
            tokens: &[
                ("Carlos", "NNP", "B-PERSON"), ("Mendez", "NNP", "I-PERSON"),
                ("studies", "VBZ", "O"), ("the", "DT", "O"), ("behaviour", "NN", "O"),
                ("of", "IN", "O"), ("whales", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Hiroshi Sato designed the bridges that connect the islands.",
            domain: "people",
            tokens: &[
                ("Hiroshi", "NNP", "B-PERSON"), ("Sato", "NNP", "I-PERSON"),
                ("designed", "VBD", "O"), ("the", "DT", "O"), ("bridges", "NNS", "O"),
                ("that", "WDT", "O"), ("connect", "VBP", "O"), ("the", "DT", "O"),
                ("islands", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Fatima Khan leads a team of nurses at Mercy Hospital.",
            domain: "people",
            tokens: &[
                ("Fatima", "NNP", "B-PERSON"), ("Khan", "NNP", "I-PERSON"), ("leads", "VBZ", "O"),
                ("a", "DT", "O"), ("team", "NN", "O"), ("of", "IN", "O"), ("nurses", "NNS", "O"),
                ("at", "IN", "O"), ("Mercy", "NNP", "B-FACILITY"),
                ("Hospital", "NNP", "I-FACILITY"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Olga Petrova translated the poems into English.",
            domain: "people",
            tokens: &[
                ("Olga", "NNP", "B-PERSON"), ("Petrova", "NNP", "I-PERSON"),
                ("translated", "VBD", "O"), ("the", "DT", "O"), ("poems", "NNS", "O"),
                ("into", "IN", "O"), ("English", "NNP", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Diego Ramos signed a contract with Atlas Motors.",
            domain: "people",
            tokens: &[
                ("Diego", "NNP", "B-PERSON"), ("Ramos", "NNP", "I-PERSON"), ("signed", "VBD", "O"),
                ("a", "DT", "O"), ("contract", "NN", "O"), ("with", "IN", "O"),
                ("Atlas", "NNP", "B-ORGANIZATION"), ("Motors", "NNP", "I-ORGANIZATION"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Ingrid Larsen joined Nordlys Technologies last month.",
            domain: "people",
            tokens: &[
                ("Ingrid", "NNP", "B-PERSON"), ("Larsen", "NNP", "I-PERSON"),
                ("joined", "VBD", "O"), ("Nordlys", "NNP", "B-ORGANIZATION"),
                ("Technologies", "NNP", "I-ORGANIZATION"), ("last", "JJ", "O"),
                ("month", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Kwame Mensah coaches the national team in Accra.",
            domain: "people",
            tokens: &[
                ("Kwame", "NNP", "B-PERSON"), ("Mensah", "NNP", "I-PERSON"),
                ("coaches", "VBZ", "O"), ("the", "DT", "O"), ("national", "JJ", "O"),
                ("team", "NN", "O"), ("in", "IN", "O"), ("Accra", "NNP", "B-GPE"), (".", ".", "O"),
            ],
        },
        // ===== PLURALS AND PAST TENSES =====
        AnnotatedSentence {
            text: "The farmers planted potatoes and carrots in their fields.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("farmers", "NNS", "O"), ("planted", "VBD", "O"),
                ("potatoes", "NNS", "O"), ("and", "CC", "O"), ("carrots", "NNS", "O"),
                ("in", "IN", "O"), ("their", "PRP$", "O"), ("fields", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The engineers tested several prototypes before the launch.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("engineers", "NNS", "O"), ("tested", "VBD", "O"),
                ("several", "JJ", "O"), ("prototypes", "NNS", "O"), ("before", "IN", "O"),
                ("the", "DT", "O"), ("launch", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Small birds collect seeds and insects in the forests.",
            domain: "everyday",
            tokens: &[
                ("Small", "JJ", "O"), ("birds", "NNS", "O"), ("collect", "VBP", "O"),
                ("seeds", "NNS", "O"), ("and", "CC", "O"), ("insects", "NNS", "O"),
                ("in", "IN", "O"), ("the", "DT", "O"), ("forests", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The teachers graded the essays and returned the papers to the students.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("teachers", "NNS", "O"), ("graded", "VBD", "O"),
                ("the", "DT", "O"), ("essays", "NNS", "O"), ("and", "CC", "O"),
                ("returned", "VBD", "O"), ("the", "DT", "O"), ("papers", "NNS", "O"),
                ("to", "TO", "O"), ("the", "DT", "O"), ("students", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Several companies reported higher profits and lower costs.",
            domain: "everyday",
            tokens: &[
                ("Several", "JJ", "O"), ("companies", "NNS", "O"), ("reported", "VBD", "O"),
                ("higher", "JJR", "O"), ("profits", "NNS", "O"), ("and", "CC", "O"),
                ("lower", "JJR", "O"), ("costs", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The volunteers cleaned the beaches and collected bottles.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("volunteers", "NNS", "O"), ("cleaned", "VBD", "O"),
                ("the", "DT", "O"), ("beaches", "NNS", "O"), ("and", "CC", "O"),
                ("collected", "VBD", "O"), ("bottles", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The workers painted the walls and repaired the windows.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("workers", "NNS", "O"), ("painted", "VBD", "O"),
                ("the", "DT", "O"), ("walls", "NNS", "O"), ("and", "CC", "O"),
                ("repaired", "VBD", "O"), ("the", "DT", "O"), ("windows", "NNS", "O"),
                (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The doctors treated hundreds of patients during the storms.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("doctors", "NNS", "O"), ("treated", "VBD", "O"),
                ("hundreds", "NNS", "O"), ("of", "IN", "O"), ("patients", "NNS", "O"),
                ("during", "IN", "O"), ("the", "DT", "O"), ("storms", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Young players learn new skills in the clubs.",
            domain: "everyday",
            tokens: &[
                ("Young", "JJ", "O"), ("players", "NNS", "O"), ("learn", "VBP", "O"),
                ("new", "JJ", "O"), ("skills", "NNS", "O"), ("in", "IN", "O"), ("the", "DT", "O"),
                ("clubs", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The tourists visited the castles and the churches of the region.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("tourists", "NNS", "O"), ("visited", "VBD", "O"),
                ("the", "DT", "O"), ("castles", "NNS", "O"), ("and", "CC", "O"), ("the", "DT", "O"),
                ("churches", "NNS", "O"), ("of", "IN", "O"), ("the", "DT", "O"),
                ("region", "NN", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The scientists measured the temperatures of the lakes.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("scientists", "NNS", "O"), ("measured", "VBD", "O"),
                ("the", "DT", "O"), ("temperatures", "NNS", "O"), ("of", "IN", "O"),
                ("the", "DT", "O"), ("lakes", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The students asked many questions about the planets.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("students", "NNS", "O"), ("asked", "VBD", "O"),
                ("many", "JJ", "O"), ("questions", "NNS", "O"), ("about", "IN", "O"),
                ("the", "DT", "O"), ("planets", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The police closed the roads after the floods.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("police", "NNS", "O"), ("closed", "VBD", "O"),
                ("the", "DT", "O"), ("roads", "NNS", "O"), ("after", "IN", "O"), ("the", "DT", "O"),
                ("floods", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Old houses need strong roofs and dry walls.",
            domain: "everyday",
            tokens: &[
                ("Old", "JJ", "O"), ("houses", "NNS", "O"), ("need", "VBP", "O"),
                ("strong", "JJ", "O"), ("roofs", "NNS", "O"), ("and", "CC", "O"),
                ("dry", "JJ", "O"), ("walls", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The children opened their presents and played games.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("children", "NNS", "O"), ("opened", "VBD", "O"),
                ("their", "PRP$", "O"), ("presents", "NNS", "O"), ("and", "CC", "O"),
                ("played", "VBD", "O"), ("games", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The pilots checked the engines and the wings.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("pilots", "NNS", "O"), ("checked", "VBD", "O"),
                ("the", "DT", "O"), ("engines", "NNS", "O"), ("and", "CC", "O"), ("the", "DT", "O"),
                ("wings", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Farmers sell apples and eggs at the markets.",
            domain: "everyday",
            tokens: &[
                ("Farmers", "NNS", "O"), ("sell", "VBP", "O"), ("apples", "NNS", "O"),
                ("and", "CC", "O"), ("eggs", "NNS", "O"), ("at", "IN", "O"), ("the", "DT", "O"),
                ("markets", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The reporters interviewed the owners of the shops.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("reporters", "NNS", "O"), ("interviewed", "VBD", "O"),
                ("the", "DT", "O"), ("owners", "NNS", "O"), ("of", "IN", "O"), ("the", "DT", "O"),
                ("shops", "NNS", "O"), (".", ".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "The museum displays paintings and sculptures from many centuries.",
            domain: "everyday",
            tokens: &[
                ("The", "DT", "O"), ("museum", "NN", "O"), ("displays", "VBZ", "O"),
                ("paintings", "NNS", "O"), ("and", "CC", "O"), ("sculptures", "NNS", "O"),
                ("from", "IN", "O"), ("many", "JJ", "O"), ("centuries", "NNS", "O"),
                (".", ".", "O"),
            ],
        },
    ]
}

/// Demonstration texts for the web interface: `(title, text)`.
///
/// The first two are the classic sample paragraphs (an object-detection
/// passage with inline HTML, and a biography for entity extraction).
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Object detection",
            "First and foremost, detecting small objects is hard because small objects are, well, small. \n<h1>The smaller the object</h1>, the less information the detection model has to work with. If a car is far \noff in the distance, it might only occupy a few pixels in our image. In much the same way humans have \ntrouble making out distant objects, our model has a harder time identifying cars without visually \ndiscernible features like wheels and license plates!",
        ),
        (
            "Biography",
            "Albert Einstein was a German-born theoretical physicist who developed the theory of relativity, one of the two pillars of modern physics. His work is also known for its influence on the philosophy of science. He was born in Ulm, in the Kingdom of Württemberg in the German Empire, on 14 March 1879. When he was 17, he moved to Switzerland, where he began his theoretical physics studies at the Swiss Federal Institute of Technology in Zurich. He published his first paper in 1900, at the age of 21.",
        ),
        (
            "Web page",
            "<p>Check out the new release notes at https://example.com/releases 🎉</p> Visit www.example.org for docs! Questions? Ask @team, we're happy to help 👍",
        ),
        (
            "News",
            "President Obama spoke to reporters at the White House on Monday. Later, Mr. Johnson of Goldman Sachs said the Federal Reserve would raise rates again. Flights from Heathrow Airport to New York were delayed by heavy fog.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postag::PennTag;

    const ENTITY_TYPES: [&str; 6] = ["PERSON", "ORGANIZATION", "GPE", "LOCATION", "FACILITY", "GSP"];

    #[test]
    fn test_corpus_tags_are_valid() {
        for sentence in get_corpus() {
            for (word, pos, ne) in sentence.tokens {
                assert!(pos.parse::<PennTag>().is_ok(), "{word}: bad POS {pos}");
                let ok = *ne == "O"
                    || ne
                        .strip_prefix("B-")
                        .or_else(|| ne.strip_prefix("I-"))
                        .map(|t| ENTITY_TYPES.contains(&t))
                        .unwrap_or(false);
                assert!(ok, "{word}: bad entity tag {ne}");
            }
        }
    }

    #[test]
    fn test_inside_tags_continue_an_entity() {
        for sentence in get_corpus() {
            let mut prev = "O";
            for (word, _, ne) in sentence.tokens {
                if let Some(label) = ne.strip_prefix("I-") {
                    assert_eq!(&prev[2.min(prev.len())..], label, "{word} in {:?}", sentence.text);
                }
                prev = ne;
            }
        }
    }

    #[test]
    fn test_tokens_appear_in_text() {
        for sentence in get_corpus() {
            let joined: String = sentence.words().concat();
            assert_eq!(joined, sentence.text.replace(' ', ""), "{:?}", sentence.text);
        }
    }

    #[test]
    fn test_entity_spans() {
        let corpus = get_corpus();
        let obama = corpus
            .iter()
            .find(|s| s.text.starts_with("Barack Obama"))
            .unwrap();
        assert_eq!(
            obama.entity_spans(),
            vec![(0, 2, "PERSON"), (3, 4, "GPE"), (6, 8, "PERSON"), (9, 10, "GPE")]
        );

        let messi = corpus.iter().find(|s| s.text.starts_with("Lionel")).unwrap();
        let spans = messi.entity_spans();
        assert_eq!(spans[1], (4, 6, "ORGANIZATION"));
        assert_eq!(spans[2], (7, 9, "ORGANIZATION"));
    }

    #[test]
    fn test_demo_texts() {
        let demos = demo_texts();
        assert!(demos[0].1.contains("<h1>"));
        assert!(demos[1].1.starts_with("Albert Einstein"));
    }
}
