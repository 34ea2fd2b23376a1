use anyhow::Result;
use std::collections::HashMap;
use tse_core::tokenizer::page_words;
use tse_core::word::normalize_word;
use tse_core::{InvertedIndex, PageDir};

/// Default number of word slots reserved for a fresh index.
pub const TYPICAL_INDEX_SIZE: usize = 500;
/// Words shorter than this are not indexed.
pub const MIN_WORD_LEN: usize = 3;

/// Index every page in `pagedir`, visiting doc ids 1, 2, ... until the first
/// missing page file.
pub fn build_index(pagedir: &PageDir, slot_hint: usize, min_word_len: usize) -> Result<InvertedIndex> {
    let mut index = InvertedIndex::new(slot_hint);
    let mut doc_id = 1u32;
    while let Some(page) = pagedir.load_page(doc_id)? {
        let words = index_page(&mut index, doc_id, &page.html, min_word_len)?;
        tracing::debug!(doc_id, url = %page.url, words, "indexed page");
        doc_id += 1;
    }
    tracing::info!(num_docs = doc_id - 1, num_words = index.len(), "ingested pages");
    Ok(index)
}

/// Count the normalized words of one page and record them under `doc_id`.
/// Returns the number of distinct words recorded.
pub fn index_page(index: &mut InvertedIndex, doc_id: u32, html: &str, min_word_len: usize) -> Result<usize> {
    let mut seen: HashMap<String, i64> = HashMap::new();
    for word in page_words(html) {
        if word.chars().count() < min_word_len { continue; }
        *seen.entry(normalize_word(word)).or_insert(0) += 1;
    }
    for (word, count) in &seen {
        index.insert(word, i64::from(doc_id), *count)?;
    }
    Ok(seen.len())
}
