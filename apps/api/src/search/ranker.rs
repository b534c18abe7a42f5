//! Relevance Ranker: orders a document collection against a free-text query.
//!
//! Scoring model (per searchable field, summed over fields):
//!   for each distinct query term with frequency `tf` in a field of `n` tokens,
//!   weight = tf × (0.5 + 0.5 × tf / n)
//! Documents sharing no token with the query are dropped. Ordering is score
//! descending with ties kept in collection order.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;

/// Anything the ranker can score: a list of independently tokenized fields.
pub trait Searchable {
    fn searchable_fields(&self) -> Vec<String>;
}

impl Searchable for ResumeRecord {
    fn searchable_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.parsed_text.clone(),
            self.skills.join(" "),
        ]
    }
}

impl Searchable for JobPosting {
    fn searchable_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.company.clone(),
            self.location.clone().unwrap_or_default(),
            self.skills.join(" "),
            self.requirements.join(" "),
            self.experience.clone(),
        ]
    }
}

/// Splits on non-alphanumeric boundaries and lowercases.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Distinct query tokens in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms(Vec<String>);

impl QueryTerms {
    pub fn from_text(query: &str) -> Self {
        let mut terms: Vec<String> = Vec::new();
        for token in tokenize(query) {
            if !terms.contains(&token) {
                terms.push(token);
            }
        }
        QueryTerms(terms)
    }

    /// Like `from_text`, but a query without a single searchable token is a
    /// validation failure.
    pub fn parse(query: &str) -> Result<Self, AppError> {
        let terms = Self::from_text(query);
        if terms.is_empty() {
            return Err(AppError::validation("query", "Search query is required"));
        }
        Ok(terms)
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Relevance of one document; `0.0` means no query token occurs in it.
pub fn relevance_score<T: Searchable>(terms: &QueryTerms, doc: &T) -> f64 {
    doc.searchable_fields()
        .iter()
        .map(|field| field_score(terms, field))
        .sum()
}

fn field_score(terms: &QueryTerms, text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let total = tokens.len() as f64;
    terms
        .terms()
        .iter()
        .filter_map(|term| counts.get(term.as_str()))
        .map(|&tf| {
            let tf = tf as f64;
            tf * (0.5 + 0.5 * tf / total)
        })
        .sum()
}

/// Ranks `docs` against parsed query terms. Empty terms match nothing.
pub fn rank_by_terms<T: Searchable>(terms: &QueryTerms, docs: Vec<T>) -> Vec<T> {
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, T)> = docs
        .into_iter()
        .filter_map(|doc| {
            let score = relevance_score(terms, &doc);
            (score > 0.0).then_some((score, doc))
        })
        .collect();

    // sort_by is stable: equal scores keep collection order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, doc)| doc).collect()
}
