// src/engine/search.rs

use crate::models::question::Question;

/// Matches of a free-text search, with their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub questions: Vec<Question>,
    pub total: usize,
}

/// Case-insensitive substring search over question text (answers are ignored).
///
/// Results are ordered by ascending id regardless of input order. The caller
/// is expected to route empty terms elsewhere; an empty term here matches
/// everything.
pub fn search(questions: &[Question], term: &str) -> SearchResult {
    let needle = term.to_lowercase();

    let mut matches: Vec<Question> = questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matches.sort_by_key(|q| q.id);

    SearchResult {
        total: matches.len(),
        questions: matches,
    }
}
