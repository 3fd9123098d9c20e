use lopdf::{Document, ObjectId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    /// Input kind not recognized; carries the offending document's title
    #[error("Unsupported format for '{title}': {detail}")]
    UnsupportedFormat { title: String, detail: String },
    /// Bytes failed to decode as the declared kind
    #[error("Cannot decode '{title}': {reason}")]
    CorruptInput { title: String, reason: String },
    /// Pipeline precondition violated (document count, main flag)
    #[error("Invalid input: {0}")]
    Input(String),
    /// Pagination could not be computed
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),
    /// Planned and actual page counts diverged during assembly
    #[error("Assembly failed: {0}")]
    Assembly(String),
}

pub type Result<T> = std::result::Result<T, BundleError>;

/// Source kinds the adapter understands
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceKind {
    Pdf,
    /// Single raster image, rendered onto one page
    Image,
}

/// One user-supplied input document, captured as an immutable snapshot
/// before the pipeline runs. Exactly one document in a bundle has
/// `is_main` set; everything else becomes an appendix in input order.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub title: String,
    pub is_main: bool,
    pub kind: SourceKind,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn main(title: impl Into<String>, kind: SourceKind, bytes: Vec<u8>) -> Self {
        Self {
            title: title.into(),
            is_main: true,
            kind,
            bytes,
        }
    }

    pub fn appendix(title: impl Into<String>, kind: SourceKind, bytes: Vec<u8>) -> Self {
        Self {
            title: title.into(),
            is_main: false,
            kind,
            bytes,
        }
    }
}

/// An adapted source: a parsed document plus its pages in reading
/// order. The page count is always `page_ids().len()`; an image source
/// yields exactly one page.
#[derive(Debug, Clone)]
pub struct PageSet {
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl PageSet {
    pub fn from_document(document: Document) -> Self {
        // get_pages is keyed by 1-based page number, so values come
        // back in reading order
        let page_ids = document.get_pages().values().copied().collect();
        Self { document, page_ids }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page_ids(&self) -> &[ObjectId] {
        &self.page_ids
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }
}
