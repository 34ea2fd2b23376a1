use crate::error::CoreError;
use crate::pagedir::PageDir;
use anyhow::Result;

pub type Score = u64;

/// A query hit: a document identifier and its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: String,
    score: Score,
}

impl Document {
    /// Fails on an empty id or a negative score.
    pub fn new(id: impl Into<String>, score: i64) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() { return Err(CoreError::EmptyDocumentId); }
        if score < 0 { return Err(CoreError::NegativeScore(score)); }
        Ok(Self { id, score: score as Score })
    }

    pub(crate) fn with_score(id: &str, score: Score) -> Self {
        Self { id: id.to_string(), score }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn score(&self) -> Score { self.score }

    /// Overwrite the score. Unlike construction, zero is rejected too.
    pub fn set_score(&mut self, score: i64) -> Result<(), CoreError> {
        if score <= 0 { return Err(CoreError::NonPositiveScore(score)); }
        self.score = score as Score;
        Ok(())
    }

    /// The source URL recorded by the crawler for this document.
    pub fn url(&self, pagedir: &PageDir) -> Result<String> {
        pagedir.url(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_construction() {
        assert_eq!(Document::new("", 1), Err(CoreError::EmptyDocumentId));
        assert_eq!(Document::new("7", -1), Err(CoreError::NegativeScore(-1)));
        let d = Document::new("7", 0).unwrap();
        assert_eq!((d.id(), d.score()), ("7", 0));
    }

    #[test]
    fn set_score_requires_positive() {
        let mut d = Document::new("3", 4).unwrap();
        assert_eq!(d.set_score(0), Err(CoreError::NonPositiveScore(0)));
        assert_eq!(d.set_score(-2), Err(CoreError::NonPositiveScore(-2)));
        assert_eq!(d.score(), 4);
        d.set_score(9).unwrap();
        assert_eq!(d.score(), 9);
    }
}
