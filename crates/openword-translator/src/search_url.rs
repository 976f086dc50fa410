use std::fmt;

/// Concept filters tried first by priority search, in order
pub const CONCEPTS: [&str; 2] = ["BaseConcept", "CoreConcept"];

/// Word-count hints tried by the priority fallback, in order
pub const WORD_COUNT_HINTS: [u8; 5] = [5, 4, 3, 2, 1];

/// Which search template a request uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode<'a> {
    /// `?term=`
    Vanilla,
    /// `?fq_rdftype=<concept>&term=`, query lower-cased
    Concept(&'a str),
    /// `?fq_word_count_pt=<hint>&term=`
    WordCount(u8),
}

impl fmt::Display for SearchMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Vanilla => f.write_str("vanilla"),
            SearchMode::Concept(concept) => write!(f, "concept {concept}"),
            SearchMode::WordCount(hint) => write!(f, "word count {hint}"),
        }
    }
}

/// Builds request URLs for the lexical search endpoint
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base: base_url.into(),
        }
    }

    pub fn build(&self, mode: SearchMode<'_>, query: &str) -> String {
        match mode {
            SearchMode::Vanilla => format!("{}?term={}", self.base, encode(query)),
            SearchMode::Concept(concept) => format!(
                "{}?fq_rdftype={}&term={}",
                self.base,
                encode(concept),
                encode(&query.to_lowercase())
            ),
            // Term is repeated, lower-cased, after the template
            SearchMode::WordCount(hint) => format!(
                "{}?fq_word_count_pt={}&term={}{}",
                self.base,
                hint,
                encode(query),
                encode(&query.to_lowercase())
            ),
        }
    }
}

fn encode(component: &str) -> String {
    ::url::form_urlencoded::byte_serialize(component.as_bytes()).collect()
}
