use anyhow::Result;
use std::io::{BufRead, Write};
use tse_core::word::normalize_input;
use tse_core::{evaluate, present, validate, InvertedIndex, PageDir};

pub const PROMPT: &str = "Query: ";
pub const SEPARATOR: &str = "-----------------------------------------------";

/// Run the interactive query loop until `input` reaches end of file.
///
/// Query results go to `out`; syntax errors go to `err`. Input lines that
/// are not valid UTF-8 are decoded lossily rather than ending the session.
pub fn run_session<R, W, E>(
    index: &InvertedIndex,
    pagedir: &PageDir,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut queries = 0usize;
    let mut buf = Vec::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let raw = line.trim_end_matches(['\n', '\r']);
        if raw.is_empty() {
            writeln!(out, "{SEPARATOR}")?;
            continue;
        }

        let query = normalize_input(raw);
        writeln!(out, "{query}")?;
        match validate(&query) {
            Ok(()) => {
                queries += 1;
                let results = evaluate(&query, index);
                tracing::debug!(query = %query, matches = results.len(), "evaluated query");
                present(results, pagedir, &mut *out)?;
            }
            Err(e) => {
                writeln!(err, "Error: Invalid query syntax: {e}")?;
                err.flush()?;
            }
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    tracing::info!(queries, "query session finished");
    Ok(())
}
