//! Boolean query grammar and evaluation.
//!
//! A query is a sequence of words optionally joined by `and` / `or`.
//! Adjacent words are implicitly ANDed and `and` binds tighter than `or`, so a
//! query is a disjunction of AND-groups evaluated left to right.

use crate::index::InvertedIndex;
use crate::result_set::ResultSet;
use crate::word::{is_operator, tokenize, AND, OR};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,
    #[error("'{0}' cannot be first")]
    LeadingOperator(String),
    #[error("'{0}' and '{1}' cannot be adjacent")]
    ConsecutiveOperators(String, String),
    #[error("'{0}' cannot be last")]
    TrailingOperator(String),
}

/// Check the grammar of an already-normalized query line.
pub fn validate(line: &str) -> Result<(), QueryError> {
    let tokens = tokenize(line);
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(QueryError::Empty);
    };
    if is_operator(first) {
        return Err(QueryError::LeadingOperator(first.to_string()));
    }
    if let Some(pair) = tokens.windows(2).find(|w| is_operator(w[0]) && is_operator(w[1])) {
        return Err(QueryError::ConsecutiveOperators(pair[0].to_string(), pair[1].to_string()));
    }
    if is_operator(last) {
        return Err(QueryError::TrailingOperator(last.to_string()));
    }
    Ok(())
}

pub fn is_valid(line: &str) -> bool { validate(line).is_ok() }

/// Evaluate a validated, normalized query against `index`.
pub fn evaluate(line: &str, index: &InvertedIndex) -> ResultSet {
    let mut matched = ResultSet::new();
    let mut group = ResultSet::new();
    for token in tokenize(line) {
        match token {
            OR => {
                matched = matched.union(&group);
                group = ResultSet::new();
            }
            AND => {}
            word => {
                let term = index.find(word).map(ResultSet::from_postings).unwrap_or_default();
                group = term.intersect(&group);
            }
        }
    }
    matched.union(&group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Score;

    fn pets() -> InvertedIndex {
        let mut idx = InvertedIndex::new(8);
        idx.insert("cat", 1, 2).unwrap();
        idx.insert("cat", 2, 5).unwrap();
        idx.insert("dog", 2, 3).unwrap();
        idx.insert("fish", 3, 4).unwrap();
        idx
    }

    fn scores(s: &ResultSet) -> Vec<(&str, Score)> {
        let mut v: Vec<_> = s.iter().map(|d| (d.id(), d.score())).collect();
        v.sort();
        v
    }

    #[test]
    fn validates_grammar() {
        assert!(is_valid("foo and bar"));
        assert!(is_valid("foo bar or baz"));
        assert!(is_valid("foo"));
        assert_eq!(validate(""), Err(QueryError::Empty));
        assert_eq!(validate("and foo"), Err(QueryError::LeadingOperator("and".into())));
        assert_eq!(validate("or foo"), Err(QueryError::LeadingOperator("or".into())));
        assert_eq!(
            validate("foo and or bar"),
            Err(QueryError::ConsecutiveOperators("and".into(), "or".into()))
        );
        assert_eq!(validate("foo or"), Err(QueryError::TrailingOperator("or".into())));
        assert_eq!(validate("foo and"), Err(QueryError::TrailingOperator("and".into())));
    }

    #[test]
    fn operator_words_only_match_exactly() {
        assert!(is_valid("android or oregon"));
        assert!(is_valid("ORacle"));
    }

    #[test]
    fn and_takes_min() {
        let idx = pets();
        assert_eq!(scores(&evaluate("cat and dog", &idx)), vec![("2", 3)]);
        assert_eq!(scores(&evaluate("cat dog", &idx)), vec![("2", 3)]);
    }

    #[test]
    fn or_sums() {
        let idx = pets();
        assert_eq!(scores(&evaluate("cat or dog", &idx)), vec![("1", 2), ("2", 8)]);
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let idx = pets();
        // (cat and dog) or fish
        assert_eq!(scores(&evaluate("cat and dog or fish", &idx)), vec![("2", 3), ("3", 4)]);
        // fish or (cat and dog)
        assert_eq!(scores(&evaluate("fish or cat dog", &idx)), vec![("2", 3), ("3", 4)]);
    }

    #[test]
    fn first_term_seeds_group() {
        let idx = pets();
        assert_eq!(scores(&evaluate("cat", &idx)), vec![("1", 2), ("2", 5)]);
    }

    #[test]
    fn missing_terms_match_nothing_alone() {
        let idx = pets();
        assert!(evaluate("unicorn", &idx).is_empty());
        assert_eq!(scores(&evaluate("unicorn or dog", &idx)), vec![("2", 3)]);
    }

    #[test]
    fn missing_term_in_and_group_passes_through() {
        // An absent term contributes an empty term-result, which the AND
        // combinator treats as an identity.
        let idx = pets();
        assert_eq!(scores(&evaluate("cat and unicorn", &idx)), vec![("1", 2), ("2", 5)]);
    }
}
