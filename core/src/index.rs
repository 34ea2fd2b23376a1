use crate::error::CoreError;
use std::collections::hash_map::{self, HashMap};

pub type DocId = u32;
pub type Count = u32;

/// Occurrence counts of one word, keyed by document id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    counts: HashMap<DocId, Count>,
}

impl PostingList {
    pub fn new() -> Self { Self::default() }

    /// Set the count for `doc_id`, replacing any previous value.
    pub fn set(&mut self, doc_id: DocId, count: Count) {
        self.counts.insert(doc_id, count);
    }

    pub fn get(&self, doc_id: DocId) -> Option<Count> { self.counts.get(&doc_id).copied() }
    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// (doc_id, count) pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, Count)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }
}

impl FromIterator<(DocId, Count)> for PostingList {
    fn from_iter<I: IntoIterator<Item = (DocId, Count)>>(iter: I) -> Self {
        Self { counts: iter.into_iter().collect() }
    }
}

/// Word to posting list map. Words are stored exactly as inserted, so callers
/// insert and look up already-normalized words.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    words: HashMap<String, PostingList>,
}

impl InvertedIndex {
    /// `slot_hint` pre-sizes the word table; the index grows past it freely.
    pub fn new(slot_hint: usize) -> Self {
        Self { words: HashMap::with_capacity(slot_hint) }
    }

    /// Record that `word` occurs `count` times in `doc_id`. An existing count
    /// for the same pair is overwritten, not accumulated.
    pub fn insert(&mut self, word: &str, doc_id: i64, count: i64) -> Result<(), CoreError> {
        if word.is_empty() { return Err(CoreError::EmptyWord); }
        let doc_id = DocId::try_from(doc_id).map_err(|_| CoreError::InvalidDocId(doc_id))?;
        let count = Count::try_from(count).map_err(|_| CoreError::InvalidCount(count))?;
        self.words.entry(word.to_string()).or_default().set(doc_id, count);
        Ok(())
    }

    pub fn find(&self, word: &str) -> Option<&PostingList> { self.words.get(word) }

    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    pub fn iter(&self) -> hash_map::Iter<'_, String, PostingList> { self.words.iter() }

    /// Install a whole posting list for a word that is not yet present.
    /// Returns false, leaving the index unchanged, if the word already exists.
    pub(crate) fn insert_postings(&mut self, word: &str, postings: PostingList) -> bool {
        match self.words.entry(word.to_string()) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => { slot.insert(postings); true }
        }
    }
}
