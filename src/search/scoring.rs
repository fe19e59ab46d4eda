//! Relevance scoring for search records.
//!
//! The weight table below is the ranking policy. It is deliberately simple
//! and fully deterministic: a record's score depends only on its own fields
//! and the normalized query, never on other records or on iteration order.

use crate::record::{Category, SearchRecord};

/// The full normalized query appearing as a substring of the title.
/// Dominates everything else so that exact heading hits rank first.
pub(crate) const WEIGHT_TITLE_PHRASE: f32 = 8.0;

/// One query token appearing as a substring of the title, summed per token.
pub(crate) const WEIGHT_TITLE_TOKEN: f32 = 3.0;

/// One query token appearing as a substring of the body text, summed per
/// token up to [`TEXT_SCORE_CAP`].
pub(crate) const WEIGHT_TEXT_TOKEN: f32 = 1.0;

/// Cap on the total text contribution per record. Long pages mention many
/// terms; without the cap they would outrank precise title matches purely
/// by length.
pub(crate) const TEXT_SCORE_CAP: f32 = 4.0;

/// Multiplicative boost applied after the weighted sum, by category.
///
/// Symbol entries (types, functions, methods, modules, macros, constants)
/// get 1.25, keywords 1.1, everything else is neutral at 1.0.
pub(crate) fn category_boost(category: Category) -> f32 {
    if category.is_symbol() {
        1.25
    } else if category == Category::Keyword {
        1.1
    } else {
        1.0
    }
}

/// Scores one record against a normalized query.
///
/// `phrase` is the whole query lowercased and trimmed; `tokens` is the
/// deduplicated token set from [`super::tokenize::tokenize`]. Returns 0.0
/// when no token matches anywhere, which excludes the record from results.
pub(crate) fn score_record(record: &SearchRecord, phrase: &str, tokens: &[String]) -> f32 {
    let title = record.title.to_lowercase();
    let text = record.text.to_lowercase();

    let mut score = 0.0;
    if !phrase.is_empty() && title.contains(phrase) {
        score += WEIGHT_TITLE_PHRASE;
    }

    let mut text_score = 0.0;
    for token in tokens {
        if title.contains(token.as_str()) {
            score += WEIGHT_TITLE_TOKEN;
        }
        if text.contains(token.as_str()) {
            text_score += WEIGHT_TEXT_TOKEN;
        }
    }
    score += text_score.min(TEXT_SCORE_CAP);

    score * category_boost(record.category)
}
