//! Text Index Module
//!
//! Inverted index over product name and description with relevance scoring.

use std::collections::{BTreeSet, HashMap, HashSet};

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "is", "it", "no",
    "not", "of", "on", "or", "the", "to", "with",
];

/// Splits text into lowercase alphanumeric tokens, dropping stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

// == Text Query ==
/// A parsed search term.
///
/// Whitespace separated words match with OR semantics. A word prefixed with
/// `-` excludes every document containing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextQuery {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TextQuery {
    pub fn parse(term: &str) -> Self {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for word in term.split_whitespace() {
            match word.strip_prefix('-') {
                Some(negated) if !negated.is_empty() => exclude.extend(tokenize(negated)),
                _ => include.extend(tokenize(word)),
            }
        }

        include.sort();
        include.dedup();
        exclude.sort();
        exclude.dedup();

        Self { include, exclude }
    }

    /// True when the query has no positive term and so can match nothing.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }
}

// == Indexed Field ==
#[derive(Debug, Default)]
struct FieldTerms {
    counts: HashMap<String, u32>,
    len: u32,
}

impl FieldTerms {
    fn new(text: &str) -> Self {
        let mut field = Self::default();
        for token in tokenize(text) {
            *field.counts.entry(token).or_insert(0) += 1;
            field.len += 1;
        }
        field
    }

    fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    fn score(&self, term: &str) -> f64 {
        match self.counts.get(term) {
            Some(&n) if self.len > 0 => 0.5 + n as f64 / self.len as f64,
            _ => 0.0,
        }
    }
}

#[derive(Debug)]
struct IndexedDoc {
    name: FieldTerms,
    description: FieldTerms,
}

// == Text Index ==
/// Inverted index keyed by token, pointing at document positions.
#[derive(Debug, Default)]
pub struct TextIndex {
    docs: Vec<IndexedDoc>,
    postings: HashMap<String, BTreeSet<usize>>,
}

impl TextIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the next document. Returns its position.
    pub fn push(&mut self, name: &str, description: Option<&str>) -> usize {
        let position = self.docs.len();
        let doc = IndexedDoc {
            name: FieldTerms::new(name),
            description: FieldTerms::new(description.unwrap_or_default()),
        };

        let terms: HashSet<&String> = doc
            .name
            .counts
            .keys()
            .chain(doc.description.counts.keys())
            .collect();
        for term in terms {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(position);
        }

        self.docs.push(doc);
        position
    }

    /// Returns `(position, score)` pairs for matching documents, most
    /// relevant first. Equal scores keep insertion order.
    pub fn search(&self, query: &TextQuery) -> Vec<(usize, f64)> {
        if query.is_empty() {
            return Vec::new();
        }

        let candidates: BTreeSet<usize> = query
            .include
            .iter()
            .filter_map(|term| self.postings.get(term))
            .flatten()
            .copied()
            .collect();

        let mut scored: Vec<(usize, f64)> = candidates
            .into_iter()
            .filter(|&pos| {
                let doc = &self.docs[pos];
                !query
                    .exclude
                    .iter()
                    .any(|t| doc.name.contains(t) || doc.description.contains(t))
            })
            .map(|pos| {
                let doc = &self.docs[pos];
                let score = query
                    .include
                    .iter()
                    .map(|t| doc.name.score(t) + doc.description.score(t))
                    .sum();
                (pos, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored
    }
}
