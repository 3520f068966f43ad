// JSON report — one object describing both documents and their distance.

use serde::Serialize;

use super::format_angle;
use crate::document::Document;
use crate::pipeline::compare::Comparison;
use crate::vector::frequency::FrequencyEntry;

#[derive(Debug, Serialize)]
pub struct DocumentReport<'a> {
    pub path: &'a str,
    pub lines: usize,
    pub words: usize,
    pub distinct_words: usize,
    /// Most frequent words, only present when a listing was requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_words: Vec<&'a FrequencyEntry>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub first: DocumentReport<'a>,
    pub second: DocumentReport<'a>,
    pub inner_product: u64,
    pub shared_words: usize,
    pub cosine_similarity: f64,
    /// Full-precision angle in radians
    pub angle: f64,
    /// Angle rounded to the configured precision
    pub angle_text: String,
}

impl<'a> DocumentReport<'a> {
    fn new(document: &'a Document, top: usize) -> Self {
        Self {
            path: &document.label,
            lines: document.line_count,
            words: document.word_count,
            distinct_words: document.distinct_words(),
            top_words: document.table.most_frequent(top),
        }
    }
}

/// Build the report for a comparison.
pub fn build_report(comparison: &Comparison, precision: usize, top: usize) -> ComparisonReport<'_> {
    let angle_text = format_angle(comparison.angle, precision);
    ComparisonReport {
        first: DocumentReport::new(&comparison.first, top),
        second: DocumentReport::new(&comparison.second, top),
        inner_product: comparison.inner_product,
        shared_words: comparison.shared_words,
        cosine_similarity: comparison.cosine,
        angle: comparison.angle,
        angle_text,
    }
}

/// Serialize the report as pretty-printed JSON.
pub fn render(comparison: &Comparison, precision: usize, top: usize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_report(comparison, precision, top))
}
