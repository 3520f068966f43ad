// Comparison pipeline: two files in, one angle out.
//
// Strategy: read and count both documents concurrently (they share nothing),
// reject empty documents by path, then hand both tables to the similarity
// engine for the angle.

use std::path::Path;

use tracing::info;

use crate::document::Document;
use crate::error::DistanceError;
use crate::text::tokenizer::TokenizerKind;
use crate::vector::angle::compare_tables;

/// Result of comparing two documents.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: Document,
    pub second: Document,
    /// Angle between the frequency vectors, in radians
    pub angle: f64,
    pub cosine: f64,
    /// Inner product of the two frequency vectors
    pub inner_product: u64,
    /// Number of distinct words that appear in both documents
    pub shared_words: usize,
}

/// Load both files and compute the angle between them.
pub async fn run(
    first: &Path,
    second: &Path,
    tokenizer: TokenizerKind,
) -> Result<Comparison, DistanceError> {
    let (doc_a, doc_b) = tokio::try_join!(
        Document::load(first, tokenizer),
        Document::load(second, tokenizer),
    )?;

    ensure_not_empty(&doc_a, first)?;
    ensure_not_empty(&doc_b, second)?;

    compare_documents(doc_a, doc_b)
}

/// Compare two already-built documents.
pub fn compare_documents(first: Document, second: Document) -> Result<Comparison, DistanceError> {
    let vectors = compare_tables(&first.table, &second.table)?;

    info!(
        first = %first.label,
        second = %second.label,
        angle = vectors.angle,
        shared_words = vectors.shared_words,
        "Documents compared"
    );

    Ok(Comparison {
        first,
        second,
        angle: vectors.angle,
        cosine: vectors.cosine,
        inner_product: vectors.inner_product,
        shared_words: vectors.shared_words,
    })
}

fn ensure_not_empty(document: &Document, path: &Path) -> Result<(), DistanceError> {
    if document.is_empty() {
        return Err(DistanceError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
