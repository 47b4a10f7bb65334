//! Word-overlap similarity between issue summaries.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::Issue;

/// Pairs scoring at or above this are reported as likely duplicates.
pub const DUPLICATE_THRESHOLD: f64 = 0.6;

/// Two issues whose summaries overlap enough to be the same ticket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityPair {
    pub first: String,
    pub second: String,
    pub score: f64,
}

/// Lowercased word tokens, split on anything outside `[A-Za-z0-9_]`.
pub fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Jaccard index of the two token sets. Zero when neither text has a token.
pub fn similarity(a: &str, b: &str) -> f64 {
    jaccard(&token_set(a), &token_set(b))
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Compare every unordered pair of summaries once, in enumeration order.
pub fn find_duplicates(issues: &[Issue]) -> Vec<SimilarityPair> {
    // Tokenize once per issue rather than once per pair.
    let tokens: Vec<HashSet<String>> = issues.iter().map(|i| token_set(i.summary())).collect();

    let mut pairs = Vec::new();
    for i in 0..issues.len() {
        for j in (i + 1)..issues.len() {
            let score = jaccard(&tokens[i], &tokens[j]);
            if score >= DUPLICATE_THRESHOLD {
                pairs.push(SimilarityPair {
                    first: issues[i].key.clone(),
                    second: issues[j].key.clone(),
                    score,
                });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Issue, IssueFields};

    fn issue(key: &str, summary: &str) -> Issue {
        Issue {
            key: key.to_string(),
            fields: IssueFields { summary: summary.to_string(), ..Default::default() },
        }
    }

    #[test]
    fn tokens_ignore_case_punctuation_and_repeats() {
        let tokens = token_set("Fix: LOGIN-bug, fix login_bug!!");
        let mut sorted: Vec<_> = tokens.into_iter().collect();
        sorted.sort();
        assert_eq!(sorted, vec!["bug", "fix", "login", "login_bug"]);
    }

    #[test]
    fn similarity_is_symmetric() {
        let samples = ["Fix login bug", "Fix the login bug", "Update billing invoice", "", "login"];
        for a in samples {
            for b in samples {
                assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn identical_text_scores_one() {
        assert_eq!(similarity("Crash on save", "crash ON save"), 1.0);
    }

    #[test]
    fn empty_token_sets_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("!!!", "-- ..."), 0.0);
    }

    #[test]
    fn three_of_four_tokens_is_a_duplicate() {
        assert_eq!(similarity("Fix login bug", "Fix the login bug"), 0.75);
        assert_eq!(similarity("Fix login bug", "Update billing invoice"), 0.0);
    }

    #[test]
    fn duplicates_are_reported_once_in_enumeration_order() {
        let issues = vec![
            issue("A-1", "Fix login bug"),
            issue("A-2", "Update billing invoice"),
            issue("A-3", "Fix the login bug"),
            issue("A-4", "fix login bug"),
        ];

        let pairs = find_duplicates(&issues);
        let keys: Vec<(&str, &str)> =
            pairs.iter().map(|p| (p.first.as_str(), p.second.as_str())).collect();
        assert_eq!(keys, vec![("A-1", "A-3"), ("A-1", "A-4"), ("A-3", "A-4")]);
        assert_eq!(pairs[0].score, 0.75);
        assert_eq!(pairs[1].score, 1.0);
        assert!(pairs.iter().all(|p| p.first != p.second));
    }

    #[test]
    fn identical_summaries_on_different_keys_still_pair() {
        let issues = vec![issue("A-1", "Same"), issue("A-2", "Same")];
        assert_eq!(find_duplicates(&issues).len(), 1);
    }

    #[test]
    fn no_pairs_for_short_lists() {
        assert!(find_duplicates(&[]).is_empty());
        assert!(find_duplicates(&[issue("A-1", "Only one")]).is_empty());
    }
}
