use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unterminated tags run to end of input, as a browser would treat them.
    static ref TAG: Regex = Regex::new(r"<[^>]*>?").expect("valid regex");
    static ref WORD: Regex = Regex::new(r"[A-Za-z]+").expect("valid regex");
}

/// Scan stored page HTML for words: everything inside `<...>` is skipped and
/// every maximal run of ASCII letters outside tags is a word, in page order.
/// Words keep their original case; callers normalize.
pub fn page_words(html: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut last = 0;
    for tag in TAG.find_iter(html) {
        words.extend(WORD.find_iter(&html[last..tag.start()]).map(|m| m.as_str()));
        last = tag.end();
    }
    words.extend(WORD.find_iter(&html[last..]).map(|m| m.as_str()));
    words
}
