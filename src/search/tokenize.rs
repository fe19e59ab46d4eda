//! Query normalization for search matching.

use ahash::AHashSet;

/// Normalizes a query into its set of match tokens.
///
/// Lowercases and splits on every non-alphanumeric character, dropping empty
/// segments and duplicates. First-occurrence order is kept so downstream
/// iteration is deterministic. No stemming is applied: matching is plain
/// substring containment, so "plurals" only matches text containing
/// "plurals".
pub(crate) fn tokenize(query: &str) -> Vec<String> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut tokens = Vec::new();

    for raw in query.split(|c: char| !c.is_alphanumeric()) {
        if raw.is_empty() {
            continue;
        }
        let token = raw.to_lowercase();
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("fork the project", vec!["fork", "the", "project"])]
    #[case("RocketModule", vec!["rocketmodule"])]
    #[case("full-index", vec!["full", "index"])]
    #[case("get_metaicvi", vec!["get", "metaicvi"])]
    #[case("  spaced   out  ", vec!["spaced", "out"])]
    #[case("u8 i32", vec!["u8", "i32"])]
    fn tokenize_splits_on_non_alphanumeric(#[case] input: &str, #[case] expected: Vec<&str>) {
        let expected: Vec<String> = expected.iter().map(|s| (*s).to_string()).collect();
        check!(tokenize(input) == expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    #[case("-_-- ##")]
    fn tokenize_yields_nothing_for_empty_queries(#[case] input: &str) {
        check!(tokenize(input).is_empty());
    }

    #[test]
    fn tokenize_deduplicates_preserving_first_occurrence() {
        check!(tokenize("index Index INDEX page index") == vec!["index", "page"]);
    }

    #[rstest]
    #[case("Москва")]
    #[case("日本語 検索")]
    #[case("🦀 search")]
    fn tokenize_handles_unicode(#[case] input: &str) {
        // Should not panic; alphanumeric unicode segments survive as tokens.
        let _tokens = tokenize(input);
    }
}
