//! Matching and ranking engine over an [`IndexStore`].
//!
//! `search` is a pure function of its inputs: no mutation, no I/O, no
//! per-call state. Any number of searches may run concurrently against the
//! same store.

pub(crate) mod scoring;
pub(crate) mod tokenize;

use crate::record::SearchRecord;
use crate::store::IndexStore;

use scoring::score_record;
use tokenize::tokenize;

/// One ranked search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    /// The matched record.
    pub record: &'a SearchRecord,
    /// The record's position in load order. Doubles as the deterministic
    /// tie-break for equal scores.
    pub index: usize,
    /// Relevance score; always greater than zero for returned hits.
    pub score: f32,
}

/// Searches the store for `query`, returning at most `limit` hits ranked by
/// descending relevance.
///
/// Ties are broken by load order, so identical inputs always produce
/// identical output, and the result for a smaller limit is a prefix of the
/// result for a larger one. A query that normalizes to no tokens (empty or
/// all punctuation) and a `limit` of 0 both yield an empty list; neither is
/// an error, and no query can fail against any store contents.
pub fn search<'a>(store: &'a IndexStore, query: &str, limit: usize) -> Vec<SearchHit<'a>> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }
    let phrase = query.trim().to_lowercase();

    let mut hits: Vec<SearchHit<'a>> = store
        .all()
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let score = score_record(record, &phrase, &tokens);
            (score > 0.0).then_some(SearchHit {
                record,
                index,
                score,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    hits.truncate(limit);

    tracing::debug!(
        "Search for {:?}: {} tokens, {} hits (limit {})",
        query,
        tokens.len(),
        hits.len(),
        limit
    );

    hits
}
