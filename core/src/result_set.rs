use crate::document::{Document, Score};
use crate::index::PostingList;
use std::collections::{HashMap, HashSet};

/// Unordered bag of scored documents built while evaluating one query.
///
/// Sets built with [`insert`](Self::insert) may hold the same id twice; sets
/// returned by [`intersect`](Self::intersect) and [`union`](Self::union) never do.
/// Documents are cloned whenever they move into a new set.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    docs: Vec<Document>,
}

impl ResultSet {
    pub fn new() -> Self { Self::default() }

    /// The term-result for one word: a document per posting, scored by count.
    pub fn from_postings(postings: &PostingList) -> Self {
        let docs = postings
            .iter()
            .map(|(doc_id, count)| Document::with_score(&doc_id.to_string(), Score::from(count)))
            .collect();
        Self { docs }
    }

    pub fn insert(&mut self, doc: Document) { self.docs.push(doc); }

    pub fn len(&self) -> usize { self.docs.len() }
    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    /// Remove and return some document; `None` once drained.
    pub fn extract(&mut self) -> Option<Document> { self.docs.pop() }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> { self.docs.iter() }

    /// AND. Documents present in both sets, scored by the smaller score.
    ///
    /// An empty side is an identity, not an annihilator: if exactly one set is
    /// empty the result is a copy of the other. Query evaluation depends on
    /// this to seed each AND-group with its first term.
    pub fn intersect(&self, other: &ResultSet) -> ResultSet {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => ResultSet::new(),
            (false, true) => self.clone(),
            (true, false) => other.clone(),
            (false, false) => {
                let seen = first_scores(self);
                let mut common: Vec<(&str, Score)> = Vec::new();
                let mut taken: HashSet<&str> = HashSet::new();
                for doc in other.iter() {
                    if let Some(&score) = seen.get(doc.id()) {
                        if taken.insert(doc.id()) {
                            common.push((doc.id(), score.min(doc.score())));
                        }
                    }
                }
                common.into_iter().map(|(id, score)| Document::with_score(id, score)).collect()
            }
        }
    }

    /// OR. Every document from either set; ids present more than once have
    /// their scores summed.
    pub fn union(&self, other: &ResultSet) -> ResultSet {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, Score> = HashMap::new();
        for doc in self.iter().chain(other.iter()) {
            let total = totals.entry(doc.id()).or_insert_with(|| {
                order.push(doc.id());
                0
            });
            *total = total.saturating_add(doc.score());
        }
        order.into_iter().map(|id| Document::with_score(id, totals[id])).collect()
    }
}

// Score of the first occurrence of each id.
fn first_scores(set: &ResultSet) -> HashMap<&str, Score> {
    let mut seen = HashMap::with_capacity(set.len());
    for doc in set.iter() {
        seen.entry(doc.id()).or_insert(doc.score());
    }
    seen
}

impl FromIterator<Document> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self { docs: iter.into_iter().collect() }
    }
}
