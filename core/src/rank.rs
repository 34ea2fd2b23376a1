use crate::document::{Document, Score};
use crate::pagedir::PageDir;
use crate::result_set::ResultSet;
use std::fmt;
use std::io::{self, Write};

/// Drain `set` and order its documents by descending score. Ties are left in
/// whatever order the drain produced.
pub fn rank(mut set: ResultSet) -> Vec<Document> {
    let mut docs = Vec::with_capacity(set.len());
    while let Some(doc) = set.extract() {
        docs.push(doc);
    }
    docs.sort_by(|a, b| b.score().cmp(&a.score()));
    docs
}

/// One line of query output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub score: Score,
    pub id: String,
    pub url: String,
}

impl Hit {
    /// Resolve `doc`'s URL from the page directory. A page that cannot be read
    /// yields an empty URL.
    pub fn resolve(doc: Document, pagedir: &PageDir) -> Self {
        let url = doc.url(pagedir).unwrap_or_else(|e| {
            tracing::warn!(doc_id = doc.id(), error = %e, "unable to resolve document url");
            String::new()
        });
        Hit { score: doc.score(), id: doc.id().to_string(), url }
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}, ID: {}, URL:{}", self.score, self.id, self.url)
    }
}

/// Write the ranked results of a query, or a no-match line.
pub fn present<W: Write>(set: ResultSet, pagedir: &PageDir, out: &mut W) -> io::Result<()> {
    if set.is_empty() {
        return writeln!(out, "No documents matched.");
    }
    for doc in rank(set) {
        writeln!(out, "{}", Hit::resolve(doc, pagedir))?;
    }
    Ok(())
}
