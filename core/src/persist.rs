//! Text persistence for [`InvertedIndex`].
//!
//! One line per word: `word d1 c1 d2 c2 ... dn cn`. Lines are written sorted by
//! word and postings by document id; readers must not rely on either order.

use crate::index::{Count, DocId, InvertedIndex, PostingList};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_index<W: Write>(index: &InvertedIndex, out: &mut W) -> std::io::Result<()> {
    let mut words: Vec<(&String, &PostingList)> = index.iter().collect();
    words.sort_by(|a, b| a.0.cmp(b.0));
    for (word, postings) in words {
        let mut pairs: Vec<(DocId, Count)> = postings.iter().collect();
        pairs.sort_unstable_by_key(|(doc_id, _)| *doc_id);
        write!(out, "{word}")?;
        for (doc_id, count) in pairs {
            write!(out, " {doc_id} {count}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn save_index<P: AsRef<Path>>(index: &InvertedIndex, path: P) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("cannot open {} for writing", path.display()))?;
    let mut out = BufWriter::new(f);
    write_index(index, &mut out)?;
    out.flush()?;
    tracing::debug!(path = %path.display(), words = index.len(), "saved index");
    Ok(())
}

/// Parse the text format. Blank lines are skipped; on each other line the
/// `(doc_id, count)` pairs are read until the first one that does not parse.
pub fn parse_index(text: &str) -> InvertedIndex {
    let mut index = InvertedIndex::new(text.lines().count());
    for (lineno, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            tracing::debug!(line = lineno + 1, "skipping blank index line");
            continue;
        };
        let mut postings = PostingList::new();
        loop {
            let (Some(doc_id), Some(count)) = (tokens.next(), tokens.next()) else { break };
            let (Ok(doc_id), Ok(count)) = (doc_id.parse::<i64>(), count.parse::<i64>()) else { break };
            match (DocId::try_from(doc_id), Count::try_from(count)) {
                (Ok(doc_id), Ok(count)) => postings.set(doc_id, count),
                _ => tracing::debug!(line = lineno + 1, doc_id, count, "skipping out of range pair"),
            }
        }
        if !index.insert_postings(word, postings) {
            tracing::debug!(line = lineno + 1, word, "duplicate word line ignored");
        }
    }
    index
}

pub fn load_index<P: AsRef<Path>>(path: P) -> Result<InvertedIndex> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("cannot read index file {}", path.display()))?;
    // Undecodable bytes become U+FFFD; the affected words simply never match.
    let index = parse_index(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), words = index.len(), "loaded index");
    Ok(index)
}

impl InvertedIndex {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> { save_index(self, path) }
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> { load_index(path) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pairs(postings: &PostingList) -> Vec<(DocId, Count)> {
        let mut v: Vec<_> = postings.iter().collect();
        v.sort();
        v
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.dat");
        let mut idx = InvertedIndex::new(10);
        idx.insert("foo", 1, 3).unwrap();
        idx.insert("foo", 2, 5).unwrap();
        idx.insert("bar", 9, 1).unwrap();
        idx.save(&path).unwrap();

        let loaded = InvertedIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(pairs(loaded.find("foo").unwrap()), vec![(1, 3), (2, 5)]);
        assert_eq!(pairs(loaded.find("bar").unwrap()), vec![(9, 1)]);
    }

    #[test]
    fn writes_one_line_per_word() {
        let mut idx = InvertedIndex::new(2);
        idx.insert("zebra", 4, 1).unwrap();
        idx.insert("apple", 2, 2).unwrap();
        idx.insert("apple", 1, 6).unwrap();
        let mut buf = Vec::new();
        write_index(&idx, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "apple 1 6 2 2\nzebra 4 1\n");
    }

    #[test]
    fn tolerates_malformed_lines() {
        let idx = parse_index("\n   \nfoo 1 2 3\nbar 1 x 4 4\nneg -1 5 2 2\nlonely\nfoo 8 8\n");
        // trailing half pair dropped
        assert_eq!(pairs(idx.find("foo").unwrap()), vec![(1, 2)]);
        // parsing stops at the first bad pair
        assert!(idx.find("bar").unwrap().is_empty());
        // negative pair is skipped, later pairs still read
        assert_eq!(pairs(idx.find("neg").unwrap()), vec![(2, 2)]);
        assert!(idx.find("lonely").unwrap().is_empty());
        assert_eq!(idx.len(), 4);
    }

    #[test]
    fn load_survives_non_utf8_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.dat");
        fs::write(&path, b"caf\xe9 1 1\ncat 1 2 2 5\ndog 2 \xff 3\n").unwrap();
        let idx = load_index(&path).unwrap();
        assert_eq!(pairs(idx.find("cat").unwrap()), vec![(1, 2), (2, 5)]);
        assert!(idx.find("dog").unwrap().is_empty());
        assert_eq!(pairs(idx.find("caf\u{fffd}").unwrap()), vec![(1, 1)]);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(load_index(dir.path().join("nope")).is_err());
    }

    #[test]
    fn save_to_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        assert!(save_index(&InvertedIndex::default(), dir.path().join("missing/index")).is_err());
    }
}
