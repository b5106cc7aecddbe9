//! # Gazetteers and head-word rules
//!
//! Explicit knowledge for the entity chunker: lists of known names and the
//! words that signal an entity type when they head a proper-noun span
//! ("Stanford **University**", "**Mount** Everest", "Heathrow **Airport**").
//!
//! All entries are lowercase; multi-word entries are joined by single spaces.

use std::collections::HashSet;

const FIRST_NAMES: &[&str] = &[
    "albert", "marie", "barack", "angela", "lionel", "john", "james", "mary", "michael", "david",
    "robert", "william", "elizabeth", "george", "thomas", "charles", "richard", "joseph", "sarah",
    "anna", "peter", "paul", "mark", "susan", "emma", "olivia", "isaac", "galileo", "niels", "max",
    "werner", "ada", "alan", "steve", "bill", "elon", "jeff", "donald", "joe", "hillary",
    "vladimir", "narendra", "nelson", "martin", "winston", "napoleon", "leonardo", "wolfgang",
    "ludwig", "johann", "sigmund", "friedrich", "karl", "emmanuel", "boris", "theresa", "jane",
    "emily", "henry", "edward", "frank", "helen", "alice", "victor", "nikola", "stephen",
];

const SURNAMES: &[&str] = &[
    "einstein", "curie", "obama", "merkel", "newton", "darwin", "shakespeare", "messi", "smith",
    "edison", "galilei", "bohr", "planck", "heisenberg", "lovelace", "turing", "jobs", "gates",
    "musk", "bezos", "trump", "biden", "clinton", "putin", "mandela", "churchill", "bonaparte",
    "mozart", "beethoven", "bach", "freud", "nietzsche", "marx", "hawking", "macron", "johnson",
    "austen", "dickens", "picasso", "tolkien", "kennedy", "lincoln", "washington",
];

const GPE: &[&str] = &[
    "germany", "france", "switzerland", "ulm", "zurich", "paris", "london", "washington",
    "california", "japan", "canada", "china", "india", "russia", "italy", "spain", "brazil",
    "mexico", "australia", "egypt", "new york", "new york city", "tokyo", "berlin", "munich",
    "rome", "madrid", "geneva", "houston", "boston", "chicago", "texas", "moscow", "beijing",
    "united states", "united kingdom", "england", "scotland", "ireland", "austria", "sweden",
    "norway", "netherlands", "belgium", "poland", "württemberg", "bavaria", "prussia",
    "kingdom of württemberg", "german empire", "vienna", "prague", "amsterdam", "stockholm",
    "oslo", "dublin", "lisbon", "athens", "cairo", "sydney", "toronto", "vancouver", "ottawa",
    "miami", "seattle", "america", "bern", "milan", "florida", "ohio", "kenya", "nigeria",
];

const LOCATIONS: &[&str] = &[
    "thames", "north sea", "mount everest", "everest", "himalayas", "alps", "amazon river",
    "pacific ocean", "atlantic ocean", "indian ocean", "sahara", "mars", "venus", "jupiter",
    "europe", "asia", "africa", "north america", "south america", "antarctica", "mediterranean",
    "danube", "rhine", "nile", "mississippi", "andes", "rocky mountains", "arctic", "baltic sea",
    "lake geneva", "black forest", "silicon valley",
];

const ORGANIZATIONS: &[&str] = &[
    "apple", "microsoft", "google", "nasa", "toyota", "united nations", "federal reserve",
    "european union", "goldman sachs", "swiss federal institute of technology",
    "university of paris", "stanford university", "inter miami", "paris saint-germain", "amazon",
    "ibm", "intel", "nato", "fifa", "unesco", "bbc", "cnn", "ford", "facebook", "netflix",
    "samsung", "sony", "siemens", "volkswagen", "bmw", "harvard", "mit", "openai",
    "world health organization", "red cross", "nobel foundation", "royal society",
];

const FACILITIES: &[&str] = &[
    "heathrow airport", "golden gate bridge", "johnson space center", "louvre", "louvre museum",
    "eiffel tower", "empire state building", "white house", "big ben", "colosseum",
    "wembley stadium", "grand central station",
];

/// Group nouns for nationalities and political groups (`GSP`).
const GSP: &[&str] = &[
    "americans", "canadians", "germans", "french", "britons", "italians", "spaniards",
    "japanese", "chinese", "russians", "europeans", "swiss", "democrats", "republicans",
];

/// Nationality adjectives, tagged `JJ`.
const NATIONALITIES: &[&str] = &[
    "german", "swiss", "french", "american", "british", "italian", "spanish", "japanese",
    "chinese", "russian", "canadian", "indian", "mexican", "brazilian", "austrian", "dutch",
    "swedish", "polish", "irish", "greek", "egyptian", "australian",
];

/// Words that, right before a name, mark a person. The title itself is not part of the entity.
const TITLES: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "president",
    "professor", "sir", "lady", "lord", "king", "queen", "senator", "governor", "general",
    "captain", "judge", "pope", "chancellor", "minister", "prince", "princess",
];

const ORG_HEADS: &[&str] = &[
    "inc", "inc.", "corp", "corp.", "corporation", "company", "co.", "ltd", "ltd.", "llc",
    "group", "institute", "university", "college", "academy", "bank", "agency", "association",
    "council", "party", "ministry", "department", "federation", "foundation", "society",
    "reserve", "union", "nations", "committee", "commission", "school", "club", "fc",
    "airlines", "laboratories", "labs", "technologies", "motors", "church",
];

const LOCATION_HEADS: &[&str] = &[
    "river", "mountain", "mountains", "mount", "lake", "ocean", "sea", "valley", "desert",
    "island", "islands", "bay", "gulf", "peninsula", "forest", "canyon", "coast", "strait",
];

const FACILITY_HEADS: &[&str] = &[
    "airport", "bridge", "stadium", "tower", "station", "museum", "center", "centre", "hall",
    "building", "palace", "cathedral", "temple", "castle", "hospital", "arena", "square",
];

const GPE_HEADS: &[&str] = &[
    "kingdom", "empire", "republic", "city", "county", "province", "state", "states", "duchy",
    "principality", "emirates",
];

/// Heads after which `of` continues the name ("University of Paris").
const OF_HEADS: &[&str] = &[
    "university", "institute", "kingdom", "bank", "republic", "department", "ministry", "museum",
    "bay", "gulf", "isle", "cape", "lake", "academy", "college", "school", "federation", "union",
    "church", "city", "state", "duchy", "principality", "sea", "technology", "people",
];

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Entity-type lists used by the chunker and by span features.
#[derive(Debug, Clone, Default)]
pub struct Gazetteers {
    pub first_names: HashSet<String>,
    pub surnames: HashSet<String>,
    pub gpe: HashSet<String>,
    pub locations: HashSet<String>,
    pub organizations: HashSet<String>,
    pub facilities: HashSet<String>,
    pub gsp: HashSet<String>,
    pub nationalities: HashSet<String>,
    pub titles: HashSet<String>,
    pub org_heads: HashSet<String>,
    pub location_heads: HashSet<String>,
    pub facility_heads: HashSet<String>,
    pub gpe_heads: HashSet<String>,
    pub of_heads: HashSet<String>,
}

impl Gazetteers {
    /// Empty lists; useful for testing the statistical fallback alone.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English lists.
    pub fn english() -> Self {
        Self {
            first_names: to_set(FIRST_NAMES),
            surnames: to_set(SURNAMES),
            gpe: to_set(GPE),
            locations: to_set(LOCATIONS),
            organizations: to_set(ORGANIZATIONS),
            facilities: to_set(FACILITIES),
            gsp: to_set(GSP),
            nationalities: to_set(NATIONALITIES),
            titles: to_set(TITLES),
            org_heads: to_set(ORG_HEADS),
            location_heads: to_set(LOCATION_HEADS),
            facility_heads: to_set(FACILITY_HEADS),
            gpe_heads: to_set(GPE_HEADS),
            of_heads: to_set(OF_HEADS),
        }
    }

    pub fn add_person(&mut self, name: &str) {
        let parts: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        if let Some((last, rest)) = parts.split_last() {
            self.surnames.insert(last.clone());
            self.first_names.extend(rest.iter().cloned());
        }
    }

    pub fn add_gpe(&mut self, name: &str) {
        self.gpe.insert(normalize_entry(name));
    }

    pub fn add_location(&mut self, name: &str) {
        self.locations.insert(normalize_entry(name));
    }

    pub fn add_organization(&mut self, name: &str) {
        self.organizations.insert(normalize_entry(name));
    }

    pub fn add_facility(&mut self, name: &str) {
        self.facilities.insert(normalize_entry(name));
    }

    pub fn is_nationality(&self, word: &str) -> bool {
        self.nationalities.contains(&word.to_lowercase())
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(&word.to_lowercase())
    }

    /// Capitalized words of every named entry, for the tagger's proper-noun dictionary.
    ///
    /// `of`, `the` and `and` inside names are skipped, and nationality adjectives
    /// are left to the closed-class lexicon.
    pub fn proper_nouns(&self) -> Vec<String> {
        let mut words: Vec<String> = [
            &self.first_names,
            &self.surnames,
            &self.gpe,
            &self.locations,
            &self.organizations,
            &self.facilities,
        ]
        .into_iter()
        .flat_map(|set| set.iter())
        .flat_map(|entry| entry.split(' '))
        .filter(|w| !matches!(*w, "of" | "the" | "and") && !self.nationalities.contains(*w))
        .map(capitalize)
        .collect();
        words.sort();
        words.dedup();
        words
    }
}

fn normalize_entry(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first letter of every hyphen-separated part ("saint-germain" -> "Saint-Germain").
pub(crate) fn capitalize(word: &str) -> String {
    word.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lists_loaded() {
        let gaz = Gazetteers::english();
        assert!(gaz.first_names.contains("albert"));
        assert!(gaz.surnames.contains("einstein"));
        assert!(gaz.gpe.contains("ulm"));
        assert!(gaz.locations.contains("mount everest"));
        assert!(gaz.is_title("Dr."));
        assert!(gaz.is_nationality("Swiss"));
    }

    #[test]
    fn test_add_entries_normalizes() {
        let mut gaz = Gazetteers::new();
        gaz.add_person("Ada  Lovelace");
        gaz.add_organization("Acme   Widgets");
        assert!(gaz.first_names.contains("ada"));
        assert!(gaz.surnames.contains("lovelace"));
        assert!(gaz.organizations.contains("acme widgets"));
    }

    #[test]
    fn test_proper_nouns_are_capitalized() {
        let nouns = Gazetteers::english().proper_nouns();
        assert!(nouns.contains(&"Einstein".to_string()));
        assert!(nouns.contains(&"Württemberg".to_string()));
        assert!(nouns.contains(&"Saint-Germain".to_string()));
        assert!(!nouns.contains(&"Of".to_string()));
        // nationality adjectives stay out of the proper-noun list
        assert!(!nouns.contains(&"Swiss".to_string()));
    }
}
