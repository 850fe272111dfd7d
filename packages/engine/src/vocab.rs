//! Vocabulary normalization: rewriting informal query terms into
//! canonical ones.
//!
//! Substitution is sequential, in table order, over lowercased text.
//! Later entries see the output of earlier ones, so chained synonym
//! resolution (informal term -> canonical term -> ...) depends on
//! entry order. That order-dependence is part of the contract and is
//! covered by tests, not an incident of implementation.

use regex::{NoExpand, Regex};

/// How synonym keys match against query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Keys match anywhere, including inside other words. This is
    /// the inherited source behavior and the default; a short key
    /// can rewrite the middle of an unrelated word.
    #[default]
    Substring,

    /// Keys only match at word boundaries.
    WordBoundary,
}

struct Entry {
    matcher: Regex,
    replacement: String,
}

/// An ordered table of informal-term -> canonical-term rewrites.
///
/// Keys are treated as literal text (regex-escaped); [`MatchPolicy`]
/// controls only whether they are anchored at word boundaries.
pub struct SynonymTable {
    policy: MatchPolicy,
    entries: Vec<Entry>,
}

impl SynonymTable {
    /// Create an empty table with the given matching policy.
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
        }
    }

    /// Append an entry. Entries apply in insertion order.
    pub fn with_entry(mut self, key: &str, replacement: impl Into<String>) -> Self {
        let escaped = regex::escape(&key.to_lowercase());
        let pattern = match self.policy {
            MatchPolicy::Substring => escaped,
            MatchPolicy::WordBoundary => format!(r"\b{escaped}\b"),
        };
        // Escaped literals always compile.
        let matcher = Regex::new(&pattern).expect("escaped synonym key must compile");
        self.entries.push(Entry {
            matcher,
            replacement: replacement.into(),
        });
        self
    }

    /// The table's matching policy.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Lowercase `text`, then apply every entry in order, replacing
    /// all occurrences. Pure; unmatched text passes through
    /// unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_lowercase();
        for entry in &self.entries {
            text = entry
                .matcher
                .replace_all(&text, NoExpand(&entry.replacement))
                .into_owned();
        }
        text
    }
}

/// The fixed property-type and location tables, applied in that
/// order.
pub struct Vocabulary {
    property_types: SynonymTable,
    locations: SynonymTable,
}

impl Vocabulary {
    /// The default tables under the given policy.
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            property_types: SynonymTable::new(policy)
                .with_entry("house", "villa")
                .with_entry("flat", "apartment")
                .with_entry("f4", "f3|f6")
                .with_entry("studio", "apartment"),
            locations: SynonymTable::new(policy)
                .with_entry("oran", "oran")
                .with_entry("alger", "algiers")
                .with_entry("constantine", "constantine")
                .with_entry("annaba", "annaba")
                .with_entry("batna", "batna")
                .with_entry("béjaïa", "bejaia")
                .with_entry("blida", "blida"),
        }
    }

    /// Custom tables, for callers with their own vocabulary.
    pub fn with_tables(property_types: SynonymTable, locations: SynonymTable) -> Self {
        Self {
            property_types,
            locations,
        }
    }

    /// Normalize raw query text: lowercase, then rewrite property
    /// synonyms, then location synonyms.
    pub fn normalize(&self, text: &str) -> String {
        let text = self.property_types.apply(text);
        self.locations.apply(&text)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_known_synonyms() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.normalize("a house in Oran"), "a villa in oran");
        assert_eq!(vocab.normalize("FLAT in alger"), "apartment in algiers");
        assert_eq!(vocab.normalize("an f4 in blida"), "an f3|f6 in blida");
    }

    #[test]
    fn test_canonical_text_is_untouched() {
        // Idempotence on already-canonical terms.
        let vocab = Vocabulary::default();
        let canonical = "villa in oran less than 10m";
        assert_eq!(vocab.normalize(canonical), canonical);
        assert_eq!(vocab.normalize(&vocab.normalize(canonical)), canonical);
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.normalize("house or house"), "villa or villa");
    }

    #[test]
    fn test_entries_apply_in_table_order() {
        // "a" -> "b" must run before "b" -> "c" sees its output.
        let table = SynonymTable::new(MatchPolicy::WordBoundary)
            .with_entry("a", "b")
            .with_entry("b", "c");
        assert_eq!(table.apply("a"), "c");

        let reversed = SynonymTable::new(MatchPolicy::WordBoundary)
            .with_entry("b", "c")
            .with_entry("a", "b");
        assert_eq!(reversed.apply("a"), "b");
    }

    #[test]
    fn test_substring_policy_matches_inside_words() {
        // Inherited source behavior: "flat" rewrites inside
        // "flatmate". Kept deliberately, not a bug fix target.
        let vocab = Vocabulary::new(MatchPolicy::Substring);
        assert_eq!(vocab.normalize("my flatmate"), "my apartmentmate");
    }

    #[test]
    fn test_word_boundary_policy_leaves_longer_words_alone() {
        let vocab = Vocabulary::new(MatchPolicy::WordBoundary);
        assert_eq!(vocab.normalize("my flatmate"), "my flatmate");
        assert_eq!(vocab.normalize("a flat in oran"), "a apartment in oran");
    }
}
