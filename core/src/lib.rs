pub mod document;
pub mod error;
pub mod index;
pub mod pagedir;
pub mod persist;
pub mod query;
pub mod rank;
pub mod result_set;
pub mod tokenizer;
pub mod word;

pub use document::{Document, Score};
pub use error::CoreError;
pub use index::{Count, DocId, InvertedIndex, PostingList};
pub use pagedir::{Page, PageDir};
pub use query::{evaluate, is_valid, validate, QueryError};
pub use rank::{present, rank, Hit};
pub use result_set::ResultSet;
