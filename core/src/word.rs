/// Lowercase every character of a single token.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Lowercase a raw query line, collapse whitespace runs to one space and trim
/// both ends.
pub fn normalize_input(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for word in line.split_whitespace() {
        if !out.is_empty() { out.push(' '); }
        out.push_str(&word.to_lowercase());
    }
    out
}

/// Split a line on whitespace, preserving order.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

pub const AND: &str = "and";
pub const OR: &str = "or";

pub fn is_operator(token: &str) -> bool { token == AND || token == OR }
