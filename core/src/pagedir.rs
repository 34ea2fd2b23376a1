//! Crawler page directory: a `.crawler` marker file plus one file per
//! document id holding `url\ndepth\nhtml`.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

const MARKER: &str = ".crawler";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub depth: u32,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct PageDir {
    root: PathBuf,
}

impl PageDir {
    /// Create the directory if needed and write the marker file.
    pub fn init<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).with_context(|| format!("cannot create {}", root.display()))?;
        File::create(root.join(MARKER)).with_context(|| format!("cannot write marker in {}", root.display()))?;
        Ok(Self { root })
    }

    /// Open an existing page directory; fails unless the marker is readable.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        File::open(root.join(MARKER)).map_err(|_| anyhow!("{} is not a crawler directory", root.display()))?;
        Ok(Self { root })
    }

    fn page_path(&self, doc_id: &str) -> PathBuf { self.root.join(doc_id) }

    pub fn save_page(&self, doc_id: u32, page: &Page) -> Result<()> {
        let path = self.page_path(&doc_id.to_string());
        fs::write(&path, format!("{}\n{}\n{}", page.url, page.depth, page.html))
            .with_context(|| format!("cannot write page {}", path.display()))
    }

    /// `Ok(None)` if no page was saved under `doc_id`. Bytes that are not
    /// UTF-8 are replaced, and an unparsable depth line reads as depth 0.
    pub fn load_page(&self, doc_id: u32) -> Result<Option<Page>> {
        let path = self.page_path(&doc_id.to_string());
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("cannot read page {}", path.display())),
        };
        let text = String::from_utf8_lossy(&bytes);
        let mut parts = text.splitn(3, '\n');
        let url = parts.next().unwrap_or_default().trim_end_matches('\r').to_string();
        let depth_line = parts.next().unwrap_or_default().trim();
        let depth = depth_line.parse::<u32>().unwrap_or_else(|_| {
            tracing::warn!(doc_id, depth = depth_line, "unparsable page depth, using 0");
            0
        });
        let html = parts.next().unwrap_or_default().to_string();
        Ok(Some(Page { url, depth, html }))
    }

    /// First line of the page file, without its line terminator.
    pub fn url(&self, doc_id: &str) -> Result<String> {
        let path = self.page_path(doc_id);
        let f = File::open(&path).with_context(|| format!("cannot open page {}", path.display()))?;
        let mut line = Vec::new();
        BufReader::new(f).read_until(b'\n', &mut line)?;
        Ok(String::from_utf8_lossy(&line).trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_requires_marker() {
        let dir = tempdir().unwrap();
        assert!(PageDir::open(dir.path()).is_err());
        PageDir::init(dir.path()).unwrap();
        assert!(PageDir::open(dir.path()).is_ok());
    }

    #[test]
    fn pages_round_trip() {
        let dir = tempdir().unwrap();
        let pd = PageDir::init(dir.path().join("pages")).unwrap();
        let page = Page { url: "http://example.com/".into(), depth: 2, html: "<p>hi</p>\n<p>there</p>".into() };
        pd.save_page(1, &page).unwrap();
        assert_eq!(pd.load_page(1).unwrap(), Some(page));
        assert_eq!(pd.load_page(2).unwrap(), None);
        assert_eq!(pd.url("1").unwrap(), "http://example.com/");
        assert!(pd.url("2").is_err());
    }

    #[test]
    fn lenient_page_decoding() {
        let dir = tempdir().unwrap();
        let pd = PageDir::init(dir.path()).unwrap();
        fs::write(dir.path().join("1"), b"http://latin1/\r\n3\r\ncaf\xe9 menu").unwrap();
        fs::write(dir.path().join("2"), b"http://nodepth/\nnot-a-number\n<p>x</p>").unwrap();

        let page = pd.load_page(1).unwrap().unwrap();
        assert_eq!(page.url, "http://latin1/");
        assert_eq!(page.depth, 3);
        assert_eq!(page.html, "caf\u{fffd} menu");
        assert_eq!(pd.url("1").unwrap(), "http://latin1/");

        let page = pd.load_page(2).unwrap().unwrap();
        assert_eq!((page.depth, page.html.as_str()), (0, "<p>x</p>"));
    }
}
