// Document — one input file reduced to its diagnostic counts and frequency table.

use std::path::Path;

use tracing::info;

use crate::error::DistanceError;
use crate::text::source::read_lines;
use crate::text::tokenizer::{Tokenizer, TokenizerKind};
use crate::vector::frequency::FrequencyTable;

/// A processed document. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display label, normally the file path
    pub label: String,
    pub line_count: usize,
    /// Total number of tokens, duplicates included
    pub word_count: usize,
    pub table: FrequencyTable,
}

impl Document {
    /// Tokenize and count already-read lines.
    pub fn from_lines(label: impl Into<String>, lines: &[String], tokenizer: &dyn Tokenizer) -> Self {
        let tokens = tokenizer.tokenize_lines(lines);
        let word_count = tokens.len();
        let table = FrequencyTable::from_tokens(tokens);

        Self {
            label: label.into(),
            line_count: lines.len(),
            word_count,
            table,
        }
    }

    /// Read `path` and build its frequency table.
    ///
    /// The read is async; tokenizing and counting run on the blocking pool.
    pub async fn load(path: &Path, kind: TokenizerKind) -> Result<Self, DistanceError> {
        let lines = read_lines(path).await?;
        let label = path.display().to_string();

        let document = tokio::task::spawn_blocking(move || {
            let tokenizer = kind.build();
            Document::from_lines(label, &lines, tokenizer.as_ref())
        })
        .await?;

        info!(
            path = %document.label,
            lines = document.line_count,
            words = document.word_count,
            distinct = document.distinct_words(),
            tokenizer = %kind,
            "Built frequency table"
        );

        Ok(document)
    }

    pub fn distinct_words(&self) -> usize {
        self.table.len()
    }

    /// True when the document produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
