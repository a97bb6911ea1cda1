//! Fuzzy selection of the best country among name-search results.
//!
//! Every candidate gets an additive score against the lowercased query:
//!
//! | Condition                                   | Score |
//! |---------------------------------------------|-------|
//! | common name equals the query                | 100   |
//! | common name starts with the query           | 50    |
//! | query is a space-bounded word in the name   | 25    |
//! | name contains the query                     | 10    |
//! | an alt spelling equals the query            | 40    |
//! | else an alt spelling starts with the query  | 20    |
//! | first capital contains the query            | 15    |
//!
//! The alt-spelling scan stops at the first spelling that equals or starts
//! with the query. Ranking is a stable sort by descending score.

use crate::models::Country;

pub const SCORE_EXACT_NAME: u32 = 100;
pub const SCORE_NAME_PREFIX: u32 = 50;
pub const SCORE_NAME_WORD: u32 = 25;
pub const SCORE_NAME_SUBSTRING: u32 = 10;
pub const SCORE_ALT_SPELLING_EXACT: u32 = 40;
pub const SCORE_ALT_SPELLING_PREFIX: u32 = 20;
pub const SCORE_CAPITAL_SUBSTRING: u32 = 15;

/// A candidate and its score for one search.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub country: &'a Country,
    pub score: u32,
}

/// Scores one candidate. `query_lower` must already be lowercased.
pub fn score_candidate(country: &Country, query_lower: &str) -> u32 {
    let name = country.common_name().to_lowercase();
    let mut score = 0;

    if name == query_lower {
        score += SCORE_EXACT_NAME;
    }
    if name.starts_with(query_lower) {
        score += SCORE_NAME_PREFIX;
    }
    if name.contains(&format!(" {query_lower}")) || name.contains(&format!("{query_lower} ")) {
        score += SCORE_NAME_WORD;
    }
    if name.contains(query_lower) {
        score += SCORE_NAME_SUBSTRING;
    }

    for alt in &country.alt_spellings {
        let alt = alt.to_lowercase();
        if alt == query_lower {
            score += SCORE_ALT_SPELLING_EXACT;
            break;
        }
        if alt.starts_with(query_lower) {
            score += SCORE_ALT_SPELLING_PREFIX;
            break;
        }
    }

    if let Some(capital) = country.first_capital() {
        if capital.to_lowercase().contains(query_lower) {
            score += SCORE_CAPITAL_SUBSTRING;
        }
    }

    score
}

/// Scores all candidates and sorts them best first.
///
/// `sort_by` is stable, so candidates with equal scores keep their input order.
pub fn rank_candidates<'a>(candidates: &'a [Country], query: &str) -> Vec<ScoredCandidate<'a>> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|country| ScoredCandidate {
            country,
            score: score_candidate(country, &query_lower),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Picks the best-scoring candidate, or `None` for an empty list.
pub fn best_match<'a>(candidates: &'a [Country], query: &str) -> Option<&'a Country> {
    match candidates {
        [] => None,
        [only] => Some(only),
        _ => rank_candidates(candidates, query)
            .first()
            .map(|scored| scored.country),
    }
}
